use crate::app::App;

mod app;
mod components;
mod config;
mod helpers;
mod i18n;
mod store;
mod sync;

fn main() {
    yew::Renderer::<App>::new().render();
}
