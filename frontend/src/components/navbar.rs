use common::model::Language;
use yew::prelude::*;

use crate::helpers::scroll_to_section;
use crate::i18n::{language_label, translation};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub language: Language,
    pub on_language: Callback<Language>,
    pub on_admin: Callback<()>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let text = translation(props.language);

        html! {
            <nav class="navbar">
                <span class="navbar-brand" onclick={Callback::from(|_| scroll_to_section("home"))}>
                    {"Thai Taste"}
                </span>
                <div class="navbar-links">
                    <button onclick={Callback::from(|_| scroll_to_section("home"))}>{text.nav_home}</button>
                    <button onclick={Callback::from(|_| scroll_to_section("products"))}>{text.nav_products}</button>
                </div>
                <div class="navbar-languages">
                    { for Language::ALL.into_iter().map(|language| language_button(language, props)) }
                </div>
                <button class="navbar-admin" onclick={props.on_admin.reform(|_| ())}>
                    {text.nav_admin}
                </button>
            </nav>
        }
    }
}

fn language_button(language: Language, props: &NavbarProps) -> Html {
    let on_language = props.on_language.clone();
    html! {
        <button
            class={classes!("lang-btn", (props.language == language).then_some("active"))}
            onclick={Callback::from(move |_| on_language.emit(language))}
        >
            {language_label(language)}
        </button>
    }
}
