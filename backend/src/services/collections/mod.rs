//! # Collection Service Module
//!
//! Generic document endpoints, mounted once per collection under
//! `/api/<collection>` (`products`, `hero_slides`).
//!
//! ## Sub-modules:
//! - `create`: validates a draft, stores it and publishes the new snapshot.
//! - `delete`: removes a document by id and publishes the new snapshot.
//! - `subscribe`: streams full snapshots as server-sent events.

mod create;
mod delete;
mod subscribe;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

use crate::live::state::LiveCollection;

/// Configures the Actix `Scope` for collection `C`.
///
/// # Registered Routes:
///
/// *   **`GET /subscribe`**: `text/event-stream` of `snapshot` events, each carrying the
///     whole collection as a JSON array. The current snapshot is sent on connect.
/// *   **`POST /`**: inserts the JSON draft and answers `201 {"id": ...}`; invalid drafts
///     are rejected with `400`.
/// *   **`DELETE /{id}`**: answers `204`, or `404` when the id is unknown.
pub fn configure_routes<C: LiveCollection>() -> Scope {
    scope(&format!("/api/{}", C::NAME))
        .route("/subscribe", get().to(subscribe::process::<C>))
        .route("", post().to(create::process::<C>))
        .route("/{id}", delete().to(delete::process::<C>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::live::state::CatalogState;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::gateway::{HeroSlides, Products};
    use common::model::Category;
    use common::requests::InsertedDocument;
    use serde_json::json;

    #[actix_web::test]
    async fn create_then_delete_a_product() {
        let (_dir, db) = temp_database();
        let state = web::Data::new(CatalogState::load(db).unwrap());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(configure_routes::<Products>()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({
                "category": "beverage",
                "name": { "th": "ชาไทย", "en": "Thai tea" },
                "weight": "500g",
                "price": 89.0,
                "isNew": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let inserted: InsertedDocument = test::read_body_json(resp).await;

        let snapshot = state.products.current();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, inserted.id);
        assert_eq!(snapshot[0].category, Category::Beverage);
        assert!(snapshot[0].is_new);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{}", inserted.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(state.products.current().is_empty());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{}", inserted.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn rejects_a_product_without_thai_name() {
        let (_dir, db) = temp_database();
        let state = web::Data::new(CatalogState::load(db).unwrap());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(configure_routes::<Products>()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "category": "seasoning", "name": { "th": "  ", "en": "Salt" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.products.current().is_empty());
    }

    #[actix_web::test]
    async fn creates_hero_slides_in_order() {
        let (_dir, db) = temp_database();
        let state = web::Data::new(CatalogState::load(db).unwrap());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(configure_routes::<HeroSlides>()),
        )
        .await;

        for url in ["/media/one.mp4", "/media/two.mp4"] {
            let req = test::TestRequest::post()
                .uri("/api/hero_slides")
                .set_json(json!({ "url": url, "type": "video" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let urls: Vec<String> = state
            .hero_slides
            .current()
            .iter()
            .map(|slide| slide.url.clone())
            .collect();
        assert_eq!(urls, vec!["/media/one.mp4", "/media/two.mp4"]);
    }
}
