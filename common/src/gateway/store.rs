//! Boundary between the admin gateway and the remote catalog store.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{StoreError, ValidationError};
use crate::model::{HeroSlide, NewHeroSlide, NewProduct, Product};

/// A named collection of documents in the store.
pub trait Collection {
    const NAME: &'static str;
    type Document: DeserializeOwned + Clone + PartialEq + 'static;
    type Draft: Serialize;
}

pub struct Products;

impl Collection for Products {
    const NAME: &'static str = "products";
    type Document = Product;
    type Draft = NewProduct;
}

pub struct HeroSlides;

impl Collection for HeroSlides {
    const NAME: &'static str = "hero_slides";
    type Document = HeroSlide;
    type Draft = NewHeroSlide;
}

/// Mutation side of the remote store: documents plus blob storage.
///
/// Reads happen through the live subscription, not through this trait.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    /// Payload the blob store accepts (a browser `File`, raw bytes in tests).
    type Blob;

    /// Inserts a draft and returns the identifier the store assigned.
    async fn insert<C: Collection>(&self, draft: &C::Draft) -> Result<String, StoreError>;

    async fn delete<C: Collection>(&self, id: &str) -> Result<(), StoreError>;

    async fn upload(&self, key: &BlobKey, blob: &Self::Blob) -> Result<(), StoreError>;

    /// URL under which the blob stored at `key` can be fetched.
    async fn download_url(&self, key: &BlobKey) -> Result<String, StoreError>;
}

/// Relative storage path made of `[A-Za-z0-9._-]` segments separated by `/`.
/// No segment may start with a dot, which also rules out `.` and `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobKey(String);

impl BlobKey {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let valid = !raw.is_empty()
            && raw.split('/').all(|segment| {
                !segment.is_empty()
                    && !segment.starts_with('.')
                    && segment.chars().all(is_key_char)
            });
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidBlobKey(raw.to_string()))
        }
    }

    /// Key for a product image: `products/<millis>_<file name>`. The timestamp
    /// prefix keeps uploads of identically named files apart.
    pub fn for_product_image(timestamp_ms: i64, file_name: &str) -> Self {
        let mut sanitized: String = file_name
            .chars()
            .map(|c| if is_key_char(c) { c } else { '_' })
            .collect();
        if sanitized.chars().all(|c| c == '.') {
            sanitized = "image".to_string();
        }
        Self(format!("products/{}_{}", timestamp_ms.max(0), sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}

impl std::fmt::Display for BlobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_image_key_is_timestamped_and_sanitized() {
        let key = BlobKey::for_product_image(1_700_000_000_000, "ผง ปรุงรส (1).jpg");
        assert!(key.as_str().starts_with("products/1700000000000_"));
        assert!(key.as_str().ends_with(".jpg"));
        assert!(BlobKey::parse(key.as_str()).is_ok());
    }

    #[test]
    fn degenerate_file_names_still_produce_a_valid_key() {
        for name in ["", "..", "."] {
            let key = BlobKey::for_product_image(5, name);
            assert!(BlobKey::parse(key.as_str()).is_ok(), "{key}");
        }
    }

    #[test]
    fn rejects_traversal_and_empty_segments() {
        for raw in ["", "../etc/passwd", "a//b", "/abs", "a/./b", "a b", "a/"] {
            assert!(BlobKey::parse(raw).is_err(), "{raw} should be rejected");
        }
        assert!(BlobKey::parse("products/1_photo.png").is_ok());
    }

    #[test]
    fn rejects_hidden_segments() {
        for raw in [".incoming/abc", "products/.hidden.png", ".env"] {
            assert!(BlobKey::parse(raw).is_err(), "{raw} should be rejected");
        }
        assert!(BlobKey::parse("products/1_.png").is_ok());
    }
}
