//! Locale maps (`{ "en": "Women", "de": "Damen" }`).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Locale used when a localized value is given as a plain string.
pub const DEFAULT_LOCALE: &str = "en";

/// A mapping from locale code to a localized string value.
///
/// Serializes as a JSON object. Deserializes from either an object or a plain
/// string, which is treated as the value for [`DEFAULT_LOCALE`].
///
/// ```
/// use ocm_catalog_core::LocalizedString;
///
/// let name: LocalizedString = serde_json::from_str(r#""Women""#).unwrap();
/// assert_eq!(name.get("en"), Some("Women"));
///
/// let name = LocalizedString::from([("en", "Women"), ("de", "Damen")]);
/// assert_eq!(name.get("de"), Some("Damen"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Create an empty locale map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create a map holding a single value for the default locale.
    #[must_use]
    pub fn default_locale(value: impl Into<String>) -> Self {
        Self::new().with(DEFAULT_LOCALE, value)
    }

    /// Add or replace the value for `locale`.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(locale.into(), value.into());
        self
    }

    /// Get the value for a locale.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Value for `locale`, falling back to the default locale, then to any value.
    #[must_use]
    pub fn get_or_any(&self, locale: &str) -> Option<&str> {
        self.get(locale)
            .or_else(|| self.get(DEFAULT_LOCALE))
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    /// Whether the map has no locale entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of locale entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(locale, value)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&str> for LocalizedString {
    fn from(value: &str) -> Self {
        Self::default_locale(value)
    }
}

impl From<String> for LocalizedString {
    fn from(value: String) -> Self {
        Self::default_locale(value)
    }
}

impl From<BTreeMap<String, String>> for LocalizedString {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedString {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(locale, value)| (locale.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Map(BTreeMap<String, String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Plain(value) => Self::default_locale(value),
            Raw::Map(map) => Self(map),
        })
    }
}
