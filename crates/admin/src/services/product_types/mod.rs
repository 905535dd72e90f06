//! Product type service: creates the apparel attribute schema.

pub mod materials;
pub mod schema;

use ocm_catalog_core::{AttributeDefinitionDraft, ProductType, ProductTypeDraft, ProductTypeId};
use tracing::instrument;

pub use schema::{MaterialKind, NestedTypeIds};

use crate::commercetools::{CommerceError, CommercetoolsClient};

/// The three material composition types, as created.
#[derive(Debug, Clone)]
pub struct MaterialTypes {
    pub outer_fabric: ProductType,
    pub lining: ProductType,
    pub filling: ProductType,
}

/// Product type operations bound to one platform client.
#[derive(Debug, Clone)]
pub struct ProductTypeService {
    client: CommercetoolsClient,
}

impl ProductTypeService {
    /// Create a new product type service.
    #[must_use]
    pub const fn new(client: CommercetoolsClient) -> Self {
        Self { client }
    }

    /// Create the outer fabric, lining, and filling types, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first failed create; earlier types stay created.
    #[instrument(skip(self))]
    pub async fn create_material_types(&self) -> Result<MaterialTypes, CommerceError> {
        let outer_fabric = self
            .client
            .create_product_type(&schema::material_type(MaterialKind::OuterFabric))
            .await?;
        let lining = self
            .client
            .create_product_type(&schema::material_type(MaterialKind::Lining))
            .await?;
        let filling = self
            .client
            .create_product_type(&schema::material_type(MaterialKind::Filling))
            .await?;

        tracing::info!("All material types created");
        Ok(MaterialTypes {
            outer_fabric,
            lining,
            filling,
        })
    }

    /// Create the benefits type, the material types, then the shirt type
    /// referencing all of them.
    ///
    /// # Errors
    ///
    /// Returns the first failed create. A `Conflict` kind error usually means
    /// the schema already exists.
    #[instrument(skip(self))]
    pub async fn create_shirt_product_type(&self) -> Result<ProductType, CommerceError> {
        let benefits = self
            .client
            .create_product_type(&schema::benefits_type())
            .await?;
        let materials = self.create_material_types().await?;

        let ids = NestedTypeIds {
            benefits: benefits.id,
            outer_fabric: materials.outer_fabric.id,
            lining: materials.lining.id,
            filling: materials.filling.id,
        };

        self.client
            .create_product_type(&schema::shirt_type(&ids))
            .await
    }

    /// Return the ID of the product type with the draft's key, creating it
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the create call fails.
    #[instrument(skip(self, draft), fields(key = ?draft.key))]
    pub async fn ensure_product_type(
        &self,
        draft: &ProductTypeDraft,
    ) -> Result<ProductTypeId, CommerceError> {
        if let Some(key) = draft.key.as_deref()
            && let Some(existing) = self.client.find_product_type_by_key(key).await?
        {
            tracing::info!(product_type_id = %existing.id, "Product type already exists");
            return Ok(existing.id);
        }

        Ok(self.client.create_product_type(draft).await?.id)
    }

    /// Add an attribute definition to the product type with `key`.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::NotFound` if no product type has that key.
    #[instrument(skip(self, definition), fields(attribute = %definition.name))]
    pub async fn add_attribute_definition(
        &self,
        key: &str,
        definition: AttributeDefinitionDraft,
    ) -> Result<ProductType, CommerceError> {
        let existing = self
            .client
            .find_product_type_by_key(key)
            .await?
            .ok_or_else(|| CommerceError::NotFound(format!("product type key={key}")))?;

        self.client
            .add_attribute_definition(key, existing.version, definition)
            .await
    }
}
