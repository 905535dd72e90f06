//! Typed references between platform resources.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductTypeId};

/// Resource kind named in a reference's `typeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceTypeId {
    Category,
    Product,
    ProductType,
    Channel,
    CustomerGroup,
    TaxCategory,
    State,
}

/// A reference to another resource: `{ "typeId": "category", "id": "..." }`.
///
/// Used both as the resource identifier in drafts and as the reference
/// returned on fetched resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub type_id: ReferenceTypeId,
    pub id: String,
}

impl Reference {
    /// Reference to a category.
    #[must_use]
    pub fn category(id: &CategoryId) -> Self {
        Self {
            type_id: ReferenceTypeId::Category,
            id: id.as_str().to_string(),
        }
    }

    /// Reference to a product type.
    #[must_use]
    pub fn product_type(id: &ProductTypeId) -> Self {
        Self {
            type_id: ReferenceTypeId::ProductType,
            id: id.as_str().to_string(),
        }
    }
}
