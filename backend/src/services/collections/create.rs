use actix_web::{web, HttpResponse};
use common::requests::InsertedDocument;
use log::info;

use crate::error::ApiError;
use crate::live::state::{commit, CatalogState, LiveCollection};

/// Handler for `POST /api/<collection>`.
///
/// The draft is validated before anything touches the database; the store
/// assigns the id and the creation timestamp.
pub async fn process<C: LiveCollection>(
    state: web::Data<CatalogState>,
    payload: web::Json<C::Draft>,
) -> Result<HttpResponse, ApiError> {
    let draft = payload.into_inner();
    C::validate(&draft)?;

    let id = commit::<C, _, _>(&state, move |conn| C::insert(conn, draft)).await?;
    info!("created {} document {}", C::NAME, id);

    Ok(HttpResponse::Created().json(InsertedDocument { id }))
}
