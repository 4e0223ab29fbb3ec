//! Live catalog state shared by every view that renders a collection.
//!
//! - `filter`: the pure category filter over a product mirror.
//! - `mirror`: the wholesale-replaced local copy of a collection plus its
//!   connection status.
//! - `retry`: backoff schedule and reconnect bookkeeping used when the live
//!   subscription drops.

pub mod filter;
pub mod mirror;
pub mod retry;

pub use filter::filter_products;
pub use mirror::{Mirror, SyncEvent, SyncStatus};
pub use retry::{Reconnect, RetryPolicy};
