//! Root component. Owns the two live subscriptions and their mirrors, the
//! selected language and which page is showing.

use common::catalog::{Mirror, SyncEvent};
use common::gateway::{HeroSlides, Products};
use common::model::{HeroSlide, Language, Product};
use yew::{html, Component, Context, Html};

use crate::components::admin::AdminPanel;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::products::ProductsSection;
use crate::config::sync_retry_policy;
use crate::sync::{subscribe, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Store,
    Admin,
}

pub enum Msg {
    SetLanguage(Language),
    ShowAdmin,
    ShowStore,
    Products(SyncEvent<Product>),
    Slides(SyncEvent<HeroSlide>),
}

pub struct App {
    language: Language,
    page: Page,
    products: Mirror<Product>,
    slides: Mirror<HeroSlide>,
    _products_subscription: Subscription,
    _slides_subscription: Subscription,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();
        Self {
            language: Language::default(),
            page: Page::Store,
            products: Mirror::new(),
            slides: Mirror::new(),
            _products_subscription: subscribe::<Products>(
                link.callback(Msg::Products),
                sync_retry_policy(),
            ),
            _slides_subscription: subscribe::<HeroSlides>(
                link.callback(Msg::Slides),
                sync_retry_policy(),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetLanguage(language) => {
                let changed = self.language != language;
                self.language = language;
                changed
            }
            Msg::ShowAdmin => {
                self.page = Page::Admin;
                true
            }
            Msg::ShowStore => {
                self.page = Page::Store;
                true
            }
            Msg::Products(event) => self.products.apply(event),
            Msg::Slides(event) => self.slides.apply(event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::Admin => html! {
                <AdminPanel
                    products={self.products.clone()}
                    slides={self.slides.clone()}
                    on_back={link.callback(|_| Msg::ShowStore)}
                />
            },
            Page::Store => html! {
                <div class="storefront">
                    <Navbar
                        language={self.language}
                        on_language={link.callback(Msg::SetLanguage)}
                        on_admin={link.callback(|_| Msg::ShowAdmin)}
                    />
                    <Hero slides={self.slides.shared()} language={self.language} />
                    <ProductsSection products={self.products.clone()} language={self.language} />
                </div>
            },
        }
    }
}
