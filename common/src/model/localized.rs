use serde::{Deserialize, Serialize};

/// Display language of the storefront. Thai is the primary catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Th,
    En,
    Cn,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Th, Language::En, Language::Cn];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Th => "th",
            Language::En => "en",
            Language::Cn => "cn",
        }
    }
}

/// Text keyed by language. The Thai entry is mandatory, the others optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub th: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
}

impl LocalizedText {
    pub fn new(th: impl Into<String>) -> Self {
        Self {
            th: th.into(),
            en: None,
            cn: None,
        }
    }

    /// Returns the text for `lang`, falling back to Thai when the translation
    /// is missing or blank.
    pub fn get(&self, lang: Language) -> &str {
        let translated = match lang {
            Language::Th => None,
            Language::En => self.en.as_deref(),
            Language::Cn => self.cn.as_deref(),
        };
        translated
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.th)
    }

    /// Builds a value from raw form inputs, trimming each field and dropping
    /// blank optional translations.
    pub fn from_inputs(th: &str, en: &str, cn: &str) -> Self {
        Self {
            th: th.trim().to_string(),
            en: non_blank(en),
            cn: non_blank(cn),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.th.trim().is_empty()
            && self.en.as_deref().is_none_or(|t| t.trim().is_empty())
            && self.cn.as_deref().is_none_or(|t| t.trim().is_empty())
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_thai() {
        let text = LocalizedText {
            th: "ผงปรุงรส".to_string(),
            en: Some("Seasoning powder".to_string()),
            cn: Some("  ".to_string()),
        };
        assert_eq!(text.get(Language::En), "Seasoning powder");
        assert_eq!(text.get(Language::Cn), "ผงปรุงรส");
        assert_eq!(text.get(Language::Th), "ผงปรุงรส");
    }

    #[test]
    fn from_inputs_trims_and_drops_blank_translations() {
        let text = LocalizedText::from_inputs("  ชา ", "Tea ", "");
        assert_eq!(text.th, "ชา");
        assert_eq!(text.en.as_deref(), Some("Tea"));
        assert_eq!(text.cn, None);
        assert!(!text.is_blank());
        assert!(LocalizedText::from_inputs(" ", "", "").is_blank());
    }
}
