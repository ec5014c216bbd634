use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeVariant,
    /// Popular card size override in cells.
    pub popular_card: Option<CardSizeConfig>,
    /// Localized string overrides keyed by resource name (e.g. "agree").
    pub strings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSizeConfig {
    pub width: u16,
    pub height: u16,
}
