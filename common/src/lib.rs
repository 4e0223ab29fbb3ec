//! Shared model and UI-independent logic for the storefront.
//!
//! Everything in this crate compiles for both the wasm frontend and the native
//! backend, so it carries no transport or rendering code:
//! - `model`: products, hero slides, categories and localized text.
//! - `requests`: small response payloads exchanged with the backend.
//! - `catalog`: the category filter, the live mirror and its retry policy.
//! - `carousel`: the hero slide index state machine.
//! - `gateway`: admin form validation and the mutation gateway.

pub mod carousel;
pub mod catalog;
pub mod gateway;
pub mod model;
pub mod requests;
