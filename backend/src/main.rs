mod blobs;
mod config;
mod db;
mod error;
mod live;
mod services;
mod static_files;

use crate::blobs::{BlobStore, MEDIA_PREFIX};
use crate::config::ServerConfig;
use crate::db::Database;
use crate::live::state::CatalogState;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use common::gateway::{HeroSlides, Products};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::load().map_err(io::Error::other)?;

    let db = Database::new(&config.database_path);
    db.init().map_err(|e| io::Error::other(e.to_string()))?;
    let catalog = web::Data::new(
        CatalogState::load(db).map_err(|e| io::Error::other(e.to_string()))?,
    );
    info!(
        "Loaded {} products and {} hero slides from {}",
        catalog.products.current().len(),
        catalog.hero_slides.current().len(),
        config.database_path.display()
    );

    let blobs = BlobStore::new(&config.storage_dir, config.upload_limit_bytes());
    blobs.ensure_root()?;
    let storage_dir = blobs.root().to_path_buf();
    let blobs = web::Data::new(blobs);

    info!("Storefront running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(catalog.clone())
            .app_data(blobs.clone())
            .service(services::collections::configure_routes::<Products>())
            .service(services::collections::configure_routes::<HeroSlides>())
            .service(services::storage::configure_routes())
            .service(Files::new(MEDIA_PREFIX, storage_dir.clone()))
            .default_service(web::route().to(static_files::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
