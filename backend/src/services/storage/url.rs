use actix_web::{web, HttpResponse};
use common::requests::BlobUrl;

use super::parse_key;
use crate::blobs::BlobStore;
use crate::error::ApiError;

/// Handler for `GET /api/storage/url/{key}`.
pub async fn process(
    key: web::Path<String>,
    blobs: web::Data<BlobStore>,
) -> Result<HttpResponse, ApiError> {
    let key = parse_key(&key)?;
    if !blobs.exists(&key) {
        return Err(ApiError::NotFound(format!("blob {}", key)));
    }
    Ok(HttpResponse::Ok().json(BlobUrl {
        url: blobs.public_url(&key),
    }))
}
