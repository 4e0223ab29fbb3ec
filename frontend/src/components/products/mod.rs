//! Storefront product grid with the category filter bar.

use common::catalog::{filter_products, Mirror, SyncStatus};
use common::model::{CategoryFilter, Language, Product};
use yew::html::Scope;
use yew::prelude::*;

use crate::i18n::{translation, Translation};

mod card;

use card::product_card;

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub products: Mirror<Product>,
    pub language: Language,
}

pub enum Msg {
    SetFilter(CategoryFilter),
}

pub struct ProductsSection {
    filter: CategoryFilter,
}

impl Component for ProductsSection {
    type Message = Msg;
    type Properties = ProductsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            filter: CategoryFilter::All,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFilter(filter) => {
                let changed = self.filter != filter;
                self.filter = filter;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let text = translation(props.language);

        html! {
            <section id="products" class="products">
                <h2>{text.products_title}</h2>
                { build_filter_bar(self.filter, text, ctx.link()) }
                { build_status_banner(&props.products, text) }
                { self.build_grid(props, text) }
            </section>
        }
    }
}

impl ProductsSection {
    fn build_grid(&self, props: &ProductsProps, text: &Translation) -> Html {
        if props.products.is_loading() {
            return html! { <p class="products-loading">{text.loading}</p> };
        }

        let visible = filter_products(props.products.items(), self.filter);
        if visible.is_empty() {
            return html! { <p class="products-empty">{text.empty_category}</p> };
        }

        html! {
            <div class="product-grid">
                { for visible.into_iter().map(|product| product_card(product, props.language, text)) }
            </div>
        }
    }
}

fn build_filter_bar(selected: CategoryFilter, text: &Translation, link: &Scope<ProductsSection>) -> Html {
    html! {
        <div class="filter-bar">
            {
                for CategoryFilter::CHOICES.into_iter().map(|filter| html! {
                    <button
                        class={classes!("filter-btn", (filter == selected).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetFilter(filter))}
                    >
                        {text.filter_label(filter)}
                    </button>
                })
            }
        </div>
    }
}

/// Tells the visitor when the list on screen may be out of date.
fn build_status_banner(products: &Mirror<Product>, text: &Translation) -> Html {
    match products.status() {
        SyncStatus::Reconnecting { .. } if products.is_stale() => {
            html! { <div class="sync-banner">{text.reconnecting}</div> }
        }
        SyncStatus::Failed { .. } => {
            html! { <div class="sync-banner offline">{text.offline}</div> }
        }
        _ => Html::default(),
    }
}
