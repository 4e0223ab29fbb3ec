use common::catalog::Mirror;
use common::model::{HeroSlide, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminProps {
    pub products: Mirror<Product>,
    pub slides: Mirror<HeroSlide>,
    /// Leaves the panel and returns to the storefront.
    pub on_back: Callback<()>,
}
