use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use log::info;

use super::parse_key;
use crate::blobs::BlobStore;
use crate::error::ApiError;

/// Handler for `POST /api/storage/{key}`.
///
/// Streams the `file` field of the multipart body to disk. Other fields are
/// ignored. Fails with `413` as soon as the configured limit is exceeded.
pub async fn process(
    key: web::Path<String>,
    blobs: web::Data<BlobStore>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let key = parse_key(&key)?;
    let written = store_file_field(&blobs, &key, payload).await?;
    info!("stored blob {} ({} bytes)", key, written);
    Ok(HttpResponse::Created().finish())
}

async fn store_file_field(
    blobs: &BlobStore,
    key: &common::gateway::BlobKey,
    mut payload: Multipart,
) -> Result<usize, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let is_file = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .is_some_and(|name| name == "file");
        if !is_file {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let mut writer = blobs.writer(key)?;
        while let Some(chunk) = field.next().await {
            let written = chunk
                .map_err(ApiError::from)
                .and_then(|chunk| writer.write_chunk(&chunk));
            if let Err(e) = written {
                writer.abort();
                return Err(e);
            }
        }
        let written = writer.written();
        writer.finish()?;
        return Ok(written);
    }
    Err(ApiError::MissingFile)
}
