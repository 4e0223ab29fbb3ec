//! Admin mutation gateway.
//!
//! Validates admin input, sequences the store calls of one submission and
//! refuses to start a second mutation while one is in flight. Removal of a
//! deleted item from the screen is left to the next live snapshot.

pub mod error;
pub mod form;
pub mod store;

use std::cell::Cell;

pub use error::{MutationError, StoreError, ValidationError};
pub use form::{ProductForm, SlideForm, StagedImage};
pub use store::{BlobKey, CatalogStore, Collection, HeroSlides, Products};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

pub struct MutationGateway<S> {
    store: S,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when the mutation finishes, however it ends.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: CatalogStore> MutationGateway<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            in_flight: Cell::new(false),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    fn begin(&self) -> Result<InFlight<'_>, MutationError> {
        if self.in_flight.replace(true) {
            return Err(MutationError::Busy);
        }
        Ok(InFlight(&self.in_flight))
    }

    /// Creates a product from the admin form.
    ///
    /// A staged image is uploaded first and its URL replaces whatever was typed
    /// into the image field. The insert is only issued once the upload has
    /// completed. Returns the id assigned by the store.
    pub async fn create_product(
        &self,
        form: &ProductForm,
        image: Option<&StagedImage<S::Blob>>,
        now_ms: i64,
    ) -> Result<String, MutationError> {
        let mut draft = form.to_draft()?;
        let _guard = self.begin()?;

        if let Some(image) = image {
            let key = BlobKey::for_product_image(now_ms, &image.file_name);
            self.store.upload(&key, &image.blob).await?;
            draft.image = Some(self.store.download_url(&key).await?);
        }

        Ok(self.store.insert::<Products>(&draft).await?)
    }

    pub async fn create_slide(&self, form: &SlideForm) -> Result<String, MutationError> {
        let draft = form.to_draft()?;
        let _guard = self.begin()?;
        Ok(self.store.insert::<HeroSlides>(&draft).await?)
    }

    /// Deletes document `id` from collection `C` once `confirm` agrees.
    pub async fn delete<C: Collection>(
        &self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, MutationError> {
        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }
        let _guard = self.begin()?;
        self.store.delete::<C>(id).await?;
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, NewProduct};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Upload(String),
        DownloadUrl(String),
        Insert(&'static str, serde_json::Value),
        Delete(&'static str, String),
    }

    #[derive(Default)]
    struct RecordingStore {
        calls: RefCell<Vec<Call>>,
        fail_upload: bool,
        fail_insert: bool,
    }

    impl RecordingStore {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn inserted_products(&self) -> Vec<NewProduct> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::Insert("products", json) => serde_json::from_value(json).ok(),
                    _ => None,
                })
                .collect()
        }
    }

    impl CatalogStore for RecordingStore {
        type Blob = Vec<u8>;

        async fn insert<C: Collection>(&self, draft: &C::Draft) -> Result<String, StoreError> {
            if self.fail_insert {
                return Err(StoreError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            let json = serde_json::to_value(draft).map_err(|e| StoreError::Decode(e.to_string()))?;
            self.calls.borrow_mut().push(Call::Insert(C::NAME, json));
            Ok(format!("{}-{}", C::NAME, self.calls.borrow().len()))
        }

        async fn delete<C: Collection>(&self, id: &str) -> Result<(), StoreError> {
            self.calls
                .borrow_mut()
                .push(Call::Delete(C::NAME, id.to_string()));
            Ok(())
        }

        async fn upload(&self, key: &BlobKey, _blob: &Vec<u8>) -> Result<(), StoreError> {
            if self.fail_upload {
                return Err(StoreError::Network("connection reset".to_string()));
            }
            self.calls
                .borrow_mut()
                .push(Call::Upload(key.as_str().to_string()));
            Ok(())
        }

        async fn download_url(&self, key: &BlobKey) -> Result<String, StoreError> {
            self.calls
                .borrow_mut()
                .push(Call::DownloadUrl(key.as_str().to_string()));
            Ok(format!("/media/{key}"))
        }
    }

    fn form() -> ProductForm {
        ProductForm {
            category: Some(Category::Seasoning),
            name_th: "ผงปรุงรสไก่".to_string(),
            image_url: "https://typed.example.com/manual.png".to_string(),
            ..ProductForm::default()
        }
    }

    fn staged() -> StagedImage<Vec<u8>> {
        StagedImage {
            file_name: "chicken.png".to_string(),
            blob: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn blank_thai_name_never_reaches_the_store() {
        let gateway = MutationGateway::new(RecordingStore::default());
        let mut form = form();
        form.name_th = "  ".to_string();

        let result = gateway.create_product(&form, Some(&staged()), 1).await;

        assert_eq!(
            result,
            Err(MutationError::Validation(ValidationError::MissingThaiName))
        );
        assert!(gateway.store().calls().is_empty());
        assert!(!gateway.is_busy());
    }

    #[tokio::test]
    async fn staged_image_is_uploaded_before_insert_and_wins_over_typed_url() {
        let gateway = MutationGateway::new(RecordingStore::default());

        let id = gateway
            .create_product(&form(), Some(&staged()), 1_700_000_000_000)
            .await
            .unwrap();
        assert!(id.starts_with("products-"));

        let calls = gateway.store().calls();
        let key = "products/1700000000000_chicken.png".to_string();
        assert_eq!(calls[0], Call::Upload(key.clone()));
        assert_eq!(calls[1], Call::DownloadUrl(key.clone()));
        assert!(matches!(calls[2], Call::Insert("products", _)));

        let inserted = gateway.store().inserted_products();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].image.as_deref(), Some(format!("/media/{key}").as_str()));
    }

    #[tokio::test]
    async fn typed_url_is_kept_without_a_staged_image() {
        let gateway = MutationGateway::new(RecordingStore::default());
        gateway.create_product(&form(), None, 1).await.unwrap();

        let inserted = gateway.store().inserted_products();
        assert_eq!(
            inserted[0].image.as_deref(),
            Some("https://typed.example.com/manual.png")
        );
    }

    #[tokio::test]
    async fn failed_upload_skips_the_insert() {
        let store = RecordingStore {
            fail_upload: true,
            ..RecordingStore::default()
        };
        let gateway = MutationGateway::new(store);

        let result = gateway.create_product(&form(), Some(&staged()), 1).await;

        assert!(matches!(
            result,
            Err(MutationError::Store(StoreError::Network(_)))
        ));
        assert!(gateway.store().inserted_products().is_empty());
        assert!(!gateway.is_busy());
    }

    #[tokio::test]
    async fn store_failure_is_reported_and_releases_the_gateway() {
        let store = RecordingStore {
            fail_insert: true,
            ..RecordingStore::default()
        };
        let gateway = MutationGateway::new(store);

        let result = gateway.create_slide(&SlideForm {
            url: "/media/intro.mp4".to_string(),
        })
        .await;

        assert!(matches!(
            result,
            Err(MutationError::Store(StoreError::Status { status: 503, .. }))
        ));
        assert!(!gateway.is_busy());
    }

    #[tokio::test]
    async fn creates_a_slide() {
        let gateway = MutationGateway::new(RecordingStore::default());
        gateway
            .create_slide(&SlideForm {
                url: " /media/intro.mp4 ".to_string(),
            })
            .await
            .unwrap();

        match &gateway.store().calls()[0] {
            Call::Insert("hero_slides", json) => {
                assert_eq!(json["url"], "/media/intro.mp4");
                assert_eq!(json["type"], "video");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let gateway = MutationGateway::new(RecordingStore::default());
        let outcome = gateway.delete::<Products>("p1", || false).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(gateway.store().calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_targets_the_collection() {
        let gateway = MutationGateway::new(RecordingStore::default());
        let outcome = gateway.delete::<HeroSlides>("s1", || true).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            gateway.store().calls(),
            vec![Call::Delete("hero_slides", "s1".to_string())]
        );
    }

    #[tokio::test]
    async fn second_mutation_while_busy_is_refused() {
        let gateway = MutationGateway::new(RecordingStore::default());
        let _held = gateway.begin().unwrap();

        let result = gateway.delete::<Products>("p1", || true).await;

        assert_eq!(result, Err(MutationError::Busy));
        assert!(gateway.store().calls().is_empty());
    }
}
