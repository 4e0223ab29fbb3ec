//! Catalog product documents.
//!
//! `Product` is what the store hands back in snapshots, `NewProduct` is the
//! draft the admin panel submits. The store assigns `id` and `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::localized::LocalizedText;
use crate::gateway::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Free-text pack size such as `500g`.
    #[serde(default)]
    pub weight: String,
    /// `None` means the price is not listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub category: Category,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

impl NewProduct {
    /// Checks the invariants a stored product must satisfy.
    ///
    /// Run by the admin form before anything is sent, and again by the backend
    /// before a draft is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.th.trim().is_empty() {
            return Err(ValidationError::MissingThaiName);
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::InvalidPrice(price.to_string()));
            }
        }
        Ok(())
    }

    /// Attaches the store-assigned identity to this draft.
    pub fn into_product(self, id: String, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            category: self.category,
            name: self.name,
            description: self.description,
            weight: self.weight,
            price: self.price,
            image: self.image,
            is_new: self.is_new,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(th: &str) -> NewProduct {
        NewProduct {
            category: Category::Beverage,
            name: LocalizedText::new(th),
            weight: "250ml".to_string(),
            ..NewProduct::default()
        }
    }

    #[test]
    fn rejects_blank_thai_name() {
        assert_eq!(draft("   ").validate(), Err(ValidationError::MissingThaiName));
        assert_eq!(draft("ชาเขียว").validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_price() {
        let mut product = draft("ชาเขียว");
        product.price = Some(-1.0);
        assert!(matches!(
            product.validate(),
            Err(ValidationError::InvalidPrice(_))
        ));
        product.price = Some(0.0);
        assert_eq!(product.validate(), Ok(()));
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let product = draft("ชาเขียว").into_product("p1".to_string(), DateTime::UNIX_EPOCH);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["isNew"], false);
        assert_eq!(json["category"], "beverage");
        assert_eq!(json["name"]["th"], "ชาเขียว");
        assert!(json.get("price").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let json = r#"{"id":"x","category":"additives","name":{"th":"สาร"},"createdAt":"2024-01-01T00:00:00Z"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, None);
        assert!(!product.is_new);
        assert_eq!(product.weight, "");
    }
}
