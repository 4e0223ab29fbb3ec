//! Admin form state, kept as raw text inputs until submission.

use crate::model::{Category, LocalizedText, NewHeroSlide, NewProduct, SlideKind};

use super::error::ValidationError;

/// An image file picked in the admin form, waiting to be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage<B> {
    pub file_name: String,
    pub blob: B,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub category: Option<Category>,
    pub name_th: String,
    pub name_en: String,
    pub name_cn: String,
    pub description_th: String,
    pub description_en: String,
    pub description_cn: String,
    pub weight: String,
    pub price: String,
    pub image_url: String,
    pub is_new: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            category: Some(Category::default()),
            name_th: String::new(),
            name_en: String::new(),
            name_cn: String::new(),
            description_th: String::new(),
            description_en: String::new(),
            description_cn: String::new(),
            weight: String::new(),
            price: String::new(),
            image_url: String::new(),
            is_new: false,
        }
    }
}

impl ProductForm {
    /// Builds the draft to insert, or the first validation problem found.
    pub fn to_draft(&self) -> Result<NewProduct, ValidationError> {
        if self.name_th.trim().is_empty() {
            return Err(ValidationError::MissingThaiName);
        }
        let category = self.category.ok_or(ValidationError::MissingCategory)?;

        let price = match self.price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?,
            ),
        };

        let description = LocalizedText::from_inputs(
            &self.description_th,
            &self.description_en,
            &self.description_cn,
        );
        let image = self.image_url.trim();

        let draft = NewProduct {
            category,
            name: LocalizedText::from_inputs(&self.name_th, &self.name_en, &self.name_cn),
            description: (!description.is_blank()).then_some(description),
            weight: self.weight.trim().to_string(),
            price,
            image: (!image.is_empty()).then(|| image.to_string()),
            is_new: self.is_new,
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideForm {
    pub url: String,
}

impl SlideForm {
    pub fn to_draft(&self) -> Result<NewHeroSlide, ValidationError> {
        let draft = NewHeroSlide {
            url: self.url.trim().to_string(),
            kind: SlideKind::Video,
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn reset(&mut self) {
        self.url.clear();
    }
}
