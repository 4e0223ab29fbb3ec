use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::scroll_to_section;
use crate::i18n::translation;

use super::{Hero, Msg};

pub fn view(component: &Hero, ctx: &Context<Hero>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let text = translation(props.language);
    let Some(slide) = component
        .carousel
        .current()
        .and_then(|index| props.slides.get(index))
    else {
        // Nothing to play: a plain black background, no overlay.
        return html! { <section id="home" class="hero hero-blank" /> };
    };

    html! {
        <section id="home" class="hero">
            <video
                key={slide.id.clone()}
                ref={component.video_ref.clone()}
                class="hero-video"
                src={slide.url.clone()}
                autoplay=true
                muted=true
                playsinline=true
                onended={link.callback(|_| Msg::Next)}
            />
            { build_controls(component, link) }
            <div class="hero-content">
                <h1>{text.hero_title}</h1>
                <p>{text.hero_subtitle}</p>
                <button class="hero-cta" onclick={Callback::from(|_| scroll_to_section("products"))}>
                    {text.hero_cta}
                </button>
            </div>
            <div class="hero-scroll-hint" onclick={Callback::from(|_| scroll_to_section("products"))}>
                {"⌄"}
            </div>
        </section>
    }
}

/// Previous/next arrows for more than one slide, and one dot per slide.
fn build_controls(component: &Hero, link: &Scope<Hero>) -> Html {
    let carousel = &component.carousel;
    if carousel.is_empty() {
        return Html::default();
    }

    html! {
        <>
            if carousel.has_controls() {
                <button class="hero-prev" onclick={link.callback(|_| Msg::Previous)}>{"‹"}</button>
                <button class="hero-next" onclick={link.callback(|_| Msg::Next)}>{"›"}</button>
            }
            <div class="hero-indicators">
                {
                    for carousel.indicators().map(|(index, active)| html! {
                        <button
                            class={classes!("hero-dot", active.then_some("active"))}
                            onclick={link.callback(move |_| Msg::Select(index))}
                        />
                    })
                }
            </div>
        </>
    }
}
