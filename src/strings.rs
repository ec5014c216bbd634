//! Localized string table for the cards.
//!
//! Lookups are keyed by [`StringKey`]. The table starts from the built-in
//! English values; hosts may override any subset of keys.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Content description and custom action label for the dismiss control.
    ShowFewer,
    /// Dialog title.
    FewerStories,
    /// Dialog body.
    FewerStoriesContent,
    /// Dialog confirm control.
    Agree,
    /// Click label announced for opening an article.
    ReadArticle,
    /// Caption template, `{1}` = date, `{2}` = minutes.
    HomePostMinRead,
}

impl StringKey {
    pub const ALL: [StringKey; 6] = [
        StringKey::ShowFewer,
        StringKey::FewerStories,
        StringKey::FewerStoriesContent,
        StringKey::Agree,
        StringKey::ReadArticle,
        StringKey::HomePostMinRead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StringKey::ShowFewer => "cd_show_fewer",
            StringKey::FewerStories => "fewer_stories",
            StringKey::FewerStoriesContent => "fewer_stories_content",
            StringKey::Agree => "agree",
            StringKey::ReadArticle => "action_read_article",
            StringKey::HomePostMinRead => "home_post_min_read",
        }
    }

    fn default_value(self) -> &'static str {
        match self {
            StringKey::ShowFewer => "Show fewer like this",
            StringKey::FewerStories => "Show fewer stories like this?",
            StringKey::FewerStoriesContent => "This feature is not yet implemented",
            StringKey::Agree => "Agree",
            StringKey::ReadArticle => "read article",
            StringKey::HomePostMinRead => "{1} - {2} min read",
        }
    }
}

impl FromStr for StringKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        StringKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownStringKey { key: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strings {
    values: HashMap<StringKey, String>,
}

impl Default for Strings {
    fn default() -> Self {
        let values = StringKey::ALL
            .into_iter()
            .map(|key| (key, key.default_value().to_string()))
            .collect();
        Self { values }
    }
}

impl Strings {
    /// Build a table from the defaults plus `overrides` keyed by resource name.
    ///
    /// # Errors
    /// Fails on an unknown key, or when the caption template drops one of
    /// its placeholders.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut strings = Self::default();
        for (name, value) in overrides {
            let key: StringKey = name.parse()?;
            if key == StringKey::HomePostMinRead {
                for placeholder in ["{1}", "{2}"] {
                    if !value.contains(placeholder) {
                        return Err(ConfigError::MissingPlaceholder {
                            key: key.as_str(),
                            placeholder,
                        });
                    }
                }
            }
            strings.values.insert(key, value.clone());
        }
        tracing::debug!(count = overrides.len(), "Applied string overrides");
        Ok(strings)
    }

    pub fn get(&self, key: StringKey) -> &str {
        self.values
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_value())
    }

    /// Format the "date - N min read" caption.
    pub fn min_read(&self, date: &str, minutes: u32) -> String {
        self.get(StringKey::HomePostMinRead)
            .replace("{1}", date)
            .replace("{2}", &minutes.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_uses_template() {
        let strings = Strings::default();
        assert_eq!(strings.min_read("Apr 1", 5), "Apr 1 - 5 min read");
    }

    #[test]
    fn overrides_replace_only_named_keys() {
        let mut overrides = BTreeMap::new();
        overrides.insert("agree".to_string(), "OK".to_string());
        let strings = Strings::with_overrides(&overrides).unwrap();
        assert_eq!(strings.get(StringKey::Agree), "OK");
        assert_eq!(strings.get(StringKey::ReadArticle), "read article");
    }

    #[test]
    fn reordered_template_placeholders() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "home_post_min_read".to_string(),
            "{2} Min. Lesezeit · {1}".to_string(),
        );
        let strings = Strings::with_overrides(&overrides).unwrap();
        assert_eq!(strings.min_read("1. Apr", 5), "5 Min. Lesezeit · 1. Apr");
    }

    #[test]
    fn unknown_key_rejected() {
        let mut overrides = BTreeMap::new();
        overrides.insert("nope".to_string(), "x".to_string());
        assert!(matches!(
            Strings::with_overrides(&overrides),
            Err(ConfigError::UnknownStringKey { .. })
        ));
    }

    #[test]
    fn template_missing_placeholder_rejected() {
        let mut overrides = BTreeMap::new();
        overrides.insert("home_post_min_read".to_string(), "{1} only".to_string());
        assert!(matches!(
            Strings::with_overrides(&overrides),
            Err(ConfigError::MissingPlaceholder { placeholder: "{2}", .. })
        ));
    }
}
