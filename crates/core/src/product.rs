//! Product drafts and product projections.
//!
//! Drafts are fully typed. Fetched projections keep every field the platform
//! returns (unmodelled fields are preserved in `extra`) so that read-only
//! endpoints can pass them through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{LocalizedString, Money, ProductId, Reference};

/// A product attribute value: `{ "name": "size", "value": "M" }`.
///
/// Values are arbitrary JSON because the shape depends on the attribute type
/// (text, localized text, enum key, nested sets, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

impl Attribute {
    /// Create an attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute holding a localized text value.
    #[must_use]
    pub fn localized(name: impl Into<String>, value: &LocalizedString) -> Self {
        let map: Map<String, Value> = value
            .iter()
            .map(|(locale, text)| (locale.to_string(), Value::String(text.to_string())))
            .collect();
        Self::new(name, Value::Object(map))
    }

    /// Attribute holding a set of nested attribute groups.
    ///
    /// Each inner vector becomes one element of the set, itself a list of
    /// `{name, value}` pairs as the platform expects for nested types.
    #[must_use]
    pub fn nested_set(name: impl Into<String>, groups: Vec<Vec<Self>>) -> Self {
        let value = groups
            .into_iter()
            .map(|group| {
                Value::Array(
                    group
                        .into_iter()
                        .map(|attr| {
                            let mut pair = Map::new();
                            pair.insert("name".to_string(), Value::String(attr.name));
                            pair.insert("value".to_string(), attr.value);
                            Value::Object(pair)
                        })
                        .collect(),
                )
            })
            .collect();
        Self::new(name, Value::Array(value))
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub w: u32,
    pub h: u32,
}

/// An externally hosted product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub dimensions: ImageDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Price entry in a variant draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDraft {
    pub value: Money,
}

impl From<Money> for PriceDraft {
    fn from(value: Money) -> Self {
        Self { value }
    }
}

/// Variant payload inside a product draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<PriceDraft>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_type: Reference,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_variant: Option<ProductVariantDraft>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariantDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
}

impl ProductDraft {
    /// All variant drafts, master first.
    pub fn all_variants(&self) -> impl Iterator<Item = &ProductVariantDraft> {
        self.master_variant.iter().chain(self.variants.iter())
    }
}

/// A product as returned by the create endpoint (only the fields we read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub version: i64,
    #[serde(default)]
    pub key: Option<String>,
}

/// A variant of a product projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductVariant {
    /// Find an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }
}

/// A product projection (current or staged product data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    pub id: ProductId,
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default)]
    pub categories: Vec<Reference>,
    pub master_variant: ProductVariant,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductProjection {
    /// All variants, master first.
    pub fn all_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        std::iter::once(&self.master_variant).chain(self.variants.iter())
    }

    /// Variant carrying `sku`, if any.
    #[must_use]
    pub fn variant_by_sku(&self, sku: &str) -> Option<&ProductVariant> {
        self.all_variants()
            .find(|v| v.sku.as_deref() == Some(sku))
    }

    /// Display name, falling back when the locale is missing.
    #[must_use]
    pub fn display_name(&self, locale: &str) -> &str {
        self.name.get_or_any(locale).unwrap_or("Unnamed product")
    }
}
