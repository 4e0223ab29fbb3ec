//! Live snapshots of the catalog collections.
//!
//! Every collection owns a `SnapshotHub`: a `tokio::sync::watch` channel whose
//! value is always the complete, ordered content of the collection as of the
//! last committed mutation. Subscribers (the SSE endpoints) read the current
//! value on connect and are woken on every later publish.
//!
//! Mutations go through `commit`, which holds the hub's writer lock across
//! "write, reload, publish". Two concurrent mutations on one collection can
//! therefore never publish their snapshots out of order.

use actix_web::web;
use common::gateway::{HeroSlides, Products};
use common::model::{HeroSlide, Product};
use log::debug;
use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::{watch, Mutex, MutexGuard};

use crate::db::{Database, Repository};
use crate::error::ApiError;

pub type Snapshot<T> = Arc<Vec<T>>;

pub struct SnapshotHub<T> {
    sender: watch::Sender<Snapshot<T>>,
    writer: Mutex<()>,
}

impl<T> SnapshotHub<T> {
    pub fn new(initial: Vec<T>) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));
        Self {
            sender,
            writer: Mutex::new(()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> Snapshot<T> {
        Arc::clone(&self.sender.borrow())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    fn publish(&self, items: Vec<T>) {
        self.sender.send_replace(Arc::new(items));
    }
}

/// Shared application state: the database handle and one hub per collection.
pub struct CatalogState {
    pub db: Database,
    pub products: SnapshotHub<Product>,
    pub hero_slides: SnapshotHub<HeroSlide>,
}

impl CatalogState {
    /// Loads the initial snapshots from `db`.
    pub fn load(db: Database) -> Result<Self, ApiError> {
        let conn = db.open()?;
        let products = SnapshotHub::new(Products::list(&conn)?);
        let hero_slides = SnapshotHub::new(HeroSlides::list(&conn)?);
        Ok(Self {
            db,
            products,
            hero_slides,
        })
    }
}

/// A collection that has a live hub in `CatalogState`.
pub trait LiveCollection: Repository {
    fn hub(state: &CatalogState) -> &SnapshotHub<Self::Document>;
}

impl LiveCollection for Products {
    fn hub(state: &CatalogState) -> &SnapshotHub<Product> {
        &state.products
    }
}

impl LiveCollection for HeroSlides {
    fn hub(state: &CatalogState) -> &SnapshotHub<HeroSlide> {
        &state.hero_slides
    }
}

/// Runs `op` against collection `C` and publishes the resulting snapshot.
///
/// Nothing is published when `op` fails.
pub async fn commit<C, R, F>(state: &CatalogState, op: F) -> Result<R, ApiError>
where
    C: LiveCollection,
    R: Send + 'static,
    F: FnOnce(&Connection) -> Result<R, ApiError> + Send + 'static,
{
    let hub = C::hub(state);
    let _writer = hub.lock_writer().await;

    let db = state.db.clone();
    let (result, snapshot) = web::block(move || -> Result<_, ApiError> {
        let conn = db.open()?;
        let result = op(&conn)?;
        let snapshot = C::list(&conn)?;
        Ok((result, snapshot))
    })
    .await??;

    debug!(
        "publishing {} snapshot ({} documents, {} subscribers)",
        C::NAME,
        snapshot.len(),
        hub.subscriber_count()
    );
    hub.publish(snapshot);
    Ok(result)
}
