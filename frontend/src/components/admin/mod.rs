//! Admin panel: product and hero slide management.
//!
//! The panel reads the same live mirrors as the storefront, so created and
//! deleted items show up (or disappear) with the next snapshot. All writes go
//! through a single `MutationGateway`, which keeps one mutation in flight at a
//! time. Labels are Thai only.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdminProps;
pub use state::AdminPanel;

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
