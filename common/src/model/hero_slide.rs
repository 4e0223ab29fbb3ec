use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gateway::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    #[default]
    Video,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Video => "video",
        }
    }
}

/// A homepage hero slide. Snapshots list slides in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: SlideKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewHeroSlide {
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: SlideKind,
}

impl NewHeroSlide {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingSlideUrl);
        }
        Ok(())
    }

    pub fn into_slide(self, id: String, created_at: DateTime<Utc>) -> HeroSlide {
        HeroSlide {
            id,
            url: self.url,
            kind: self.kind,
            created_at,
        }
    }
}
