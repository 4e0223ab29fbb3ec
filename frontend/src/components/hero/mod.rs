//! Homepage hero: a video carousel behind the storefront headline.
//!
//! The carousel index lives in a `Carousel`, which clamps itself whenever the
//! slide list changes. After every transition the visible clip is reloaded,
//! muted and played from the start. Browsers may refuse autoplay; that is
//! logged and otherwise ignored.

use common::carousel::{Carousel, PlaybackError};
use gloo_console::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

mod props;
mod view;

pub use props::HeroProps;

pub enum Msg {
    Next,
    Previous,
    Select(usize),
}

pub struct Hero {
    pub carousel: Carousel,
    pub video_ref: NodeRef,
    /// Set by every transition; cleared once the clip has been restarted.
    pub restart_pending: bool,
}

impl Component for Hero {
    type Message = Msg;
    type Properties = HeroProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            carousel: Carousel::new(ctx.props().slides.len()),
            video_ref: NodeRef::default(),
            restart_pending: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let moved = match msg {
            Msg::Next => self.carousel.advance(),
            Msg::Previous => self.carousel.retreat(),
            Msg::Select(index) => self.carousel.select(index),
        };
        if moved.is_some() {
            self.restart_pending = true;
        }
        moved.is_some()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let slides = &ctx.props().slides;
        let previous = self
            .carousel
            .current()
            .and_then(|index| old_props.slides.get(index))
            .map(|slide| slide.id.clone());

        self.carousel.set_len(slides.len());
        let current = self
            .carousel
            .current()
            .and_then(|index| slides.get(index))
            .map(|slide| slide.id.clone());

        if previous != current {
            self.restart_pending = true;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.restart_pending {
            return;
        }
        self.restart_pending = false;

        if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
            restart(video);
        }
    }
}

fn restart(video: HtmlVideoElement) {
    video.set_muted(true);
    video.load();
    match video.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!(PlaybackError(format!("{:?}", e)).to_string());
            }
        }),
        Err(e) => warn!(PlaybackError(format!("{:?}", e)).to_string()),
    }
}
