use common::model::{Language, Product};
use yew::prelude::*;

use crate::config::PLACEHOLDER_IMAGE;
use crate::helpers::format_price;
use crate::i18n::Translation;

pub fn product_card(product: &Product, language: Language, text: &Translation) -> Html {
    let image = product
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let name = product.name.get(language).to_string();

    html! {
        <div class="product-card" key={product.id.clone()}>
            <div class="product-image">
                <img src={image} alt={name.clone()} loading="lazy" />
                if product.is_new {
                    <span class="badge-new">{text.new_badge}</span>
                }
                <span class="product-detail-overlay">{text.view_detail}</span>
            </div>
            <div class="product-body">
                <h3>{name}</h3>
                if let Some(description) = &product.description {
                    <p class="product-description">{description.get(language).to_string()}</p>
                }
                <div class="product-meta">
                    if !product.weight.is_empty() {
                        <span class="weight-chip">{product.weight.clone()}</span>
                    }
                    if let Some(price) = product.price {
                        <span class="price">{format_price(price)}</span>
                    }
                </div>
            </div>
        </div>
    }
}
