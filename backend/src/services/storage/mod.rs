//! Blob storage endpoints used by the admin panel for product images.
//!
//! - `POST /api/storage/{key}`: multipart upload with a `file` field, stored under `key`.
//! - `GET /api/storage/url/{key}`: the public URL of a stored blob (`/media/<key>`).
//!
//! The stored files themselves are served by `actix_files` under `/media`.

mod upload;
mod url;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::gateway::BlobKey;

use crate::error::ApiError;

const API_PATH: &str = "/api/storage";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/url/{key:.*}", get().to(url::process))
        .route("/{key:.*}", post().to(upload::process))
}

fn parse_key(raw: &str) -> Result<BlobKey, ApiError> {
    Ok(BlobKey::parse(raw)?)
}
