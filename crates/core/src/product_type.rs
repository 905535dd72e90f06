//! Product type and attribute schema payloads.

use serde::{Deserialize, Serialize};

use crate::types::{LocalizedString, ProductTypeId, Reference, ReferenceTypeId};

/// Plain enum value: `{ "key": "percent", "label": "%" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub key: String,
    pub label: String,
}

impl EnumValue {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Localized enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedEnumValue {
    pub key: String,
    pub label: LocalizedString,
}

/// Attribute type, tagged by `name` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum AttributeType {
    Boolean,
    Text,
    Ltext,
    Enum {
        values: Vec<EnumValue>,
    },
    Lenum {
        values: Vec<LocalizedEnumValue>,
    },
    Number,
    Money,
    Date,
    Time,
    Datetime,
    Reference {
        #[serde(rename = "referenceTypeId")]
        reference_type_id: ReferenceTypeId,
    },
    Set {
        #[serde(rename = "elementType")]
        element_type: Box<AttributeType>,
    },
    Nested {
        #[serde(rename = "typeReference")]
        type_reference: Reference,
    },
}

impl AttributeType {
    /// A set whose elements are nested attributes of another product type.
    #[must_use]
    pub fn set_of_nested(product_type: &ProductTypeId) -> Self {
        Self::Set {
            element_type: Box::new(Self::Nested {
                type_reference: Reference::product_type(product_type),
            }),
        }
    }
}

/// How attribute values relate across the variants of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeConstraint {
    #[default]
    None,
    Unique,
    CombinationUnique,
    SameForAll,
}

/// Attribute definition inside a product type draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinitionDraft {
    pub name: String,
    pub label: LocalizedString,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub is_required: bool,
    pub attribute_constraint: AttributeConstraint,
    pub is_searchable: bool,
}

impl AttributeDefinitionDraft {
    /// Optional, unconstrained, not searchable.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<LocalizedString>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            attribute_type,
            is_required: false,
            attribute_constraint: AttributeConstraint::None,
            is_searchable: false,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    #[must_use]
    pub const fn searchable(mut self) -> Self {
        self.is_searchable = true;
        self
    }

    #[must_use]
    pub const fn constraint(mut self, constraint: AttributeConstraint) -> Self {
        self.attribute_constraint = constraint;
        self
    }
}

/// Request body for creating a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinitionDraft>,
}

/// A product type as returned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: ProductTypeId,
    pub version: i64,
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<serde_json::Value>,
}

/// Update action on a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ProductTypeUpdateAction {
    AddAttributeDefinition { attribute: AttributeDefinitionDraft },
    RemoveAttributeDefinition { name: String },
}

/// Versioned update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeUpdate {
    pub version: i64,
    pub actions: Vec<ProductTypeUpdateAction>,
}
