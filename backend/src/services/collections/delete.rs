use actix_web::{web, HttpResponse};
use log::info;

use crate::error::ApiError;
use crate::live::state::{commit, CatalogState, LiveCollection};

/// Handler for `DELETE /api/<collection>/{id}`.
pub async fn process<C: LiveCollection>(
    state: web::Data<CatalogState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let target = id.clone();
    let removed = commit::<C, _, _>(&state, move |conn| C::delete(conn, &target)).await?;

    if !removed {
        return Err(ApiError::NotFound(format!("{} document {}", C::NAME, id)));
    }
    info!("deleted {} document {}", C::NAME, id);
    Ok(HttpResponse::NoContent().finish())
}
