//! Frontend settings. The app is served by the backend, so every endpoint is
//! same-origin and relative.

use common::catalog::RetryPolicy;
use std::time::Duration;

pub const API_BASE: &str = "/api";

/// Shown for products without an image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x400?text=No+Image";

/// How long toast notifications stay on screen, in milliseconds.
pub const TOAST_MILLIS: u32 = 3000;

pub fn sync_retry_policy() -> RetryPolicy {
    RetryPolicy {
        initial_delay: Duration::from_secs(1),
        multiplier: 2.0,
        max_delay: Duration::from_secs(30),
        max_attempts: 10,
    }
}
