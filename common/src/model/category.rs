use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category tag.
///
/// The derived `Ord` follows declaration order, which is kept alphabetical so it
/// matches the lexicographic ordering of the serialized tags used by the store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Additives,
    Beverage,
    #[default]
    Seasoning,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Seasoning, Category::Beverage, Category::Additives];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Additives => "additives",
            Category::Beverage => "beverage",
            Category::Seasoning => "seasoning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "additives" => Ok(Category::Additives),
            "beverage" => Ok(Category::Beverage),
            "seasoning" => Ok(Category::Seasoning),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Selection of the storefront filter bar: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar entries in display order.
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Seasoning),
        CategoryFilter::Only(Category::Beverage),
        CategoryFilter::Only(Category::Additives),
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic_on_tag() {
        let mut tags: Vec<Category> = Category::ALL.to_vec();
        tags.sort();
        let names: Vec<&str> = tags.iter().map(Category::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn parses_and_prints_tags() {
        assert_eq!("beverage".parse::<Category>(), Ok(Category::Beverage));
        assert_eq!(Category::Additives.to_string(), "additives");
        assert!("snacks".parse::<Category>().is_err());
    }

    #[test]
    fn filter_serializes_as_plain_tag() {
        assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&CategoryFilter::Only(Category::Seasoning)).unwrap(),
            "\"seasoning\""
        );
        let parsed: CategoryFilter = serde_json::from_str("\"beverage\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Only(Category::Beverage));
    }
}
