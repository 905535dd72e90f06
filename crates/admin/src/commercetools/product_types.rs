//! Product type endpoints.

use ocm_catalog_core::product_type::{ProductTypeUpdate, ProductTypeUpdateAction};
use ocm_catalog_core::{AttributeDefinitionDraft, PagedQueryResponse, ProductType, ProductTypeDraft};
use tracing::instrument;

use super::{CommerceError, CommercetoolsClient, escape_quoted};

/// Query predicate matching a product type key.
fn key_predicate(key: &str) -> String {
    format!("key=\"{}\"", escape_quoted(key))
}

impl CommercetoolsClient {
    /// Create a product type.
    ///
    /// # Errors
    ///
    /// Returns a `Conflict` kind error if the key already exists.
    #[instrument(skip(self, draft), fields(key = ?draft.key, name = %draft.name))]
    pub async fn create_product_type(
        &self,
        draft: &ProductTypeDraft,
    ) -> Result<ProductType, CommerceError> {
        let product_type: ProductType = self.post(&["product-types"], draft).await?;
        tracing::info!(product_type_id = %product_type.id, "Created product type");
        Ok(product_type)
    }

    /// Find a product type by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    #[instrument(skip(self))]
    pub async fn find_product_type_by_key(
        &self,
        key: &str,
    ) -> Result<Option<ProductType>, CommerceError> {
        let page: PagedQueryResponse<ProductType> = self
            .get(
                &["product-types"],
                &[("where", key_predicate(key)), ("limit", "1".to_string())],
            )
            .await?;
        Ok(page.into_first())
    }

    /// Add an attribute definition to an existing product type.
    ///
    /// # Errors
    ///
    /// Returns a `Conflict` kind error if `version` is stale.
    #[instrument(skip(self, definition), fields(attribute = %definition.name))]
    pub async fn add_attribute_definition(
        &self,
        key: &str,
        version: i64,
        definition: AttributeDefinitionDraft,
    ) -> Result<ProductType, CommerceError> {
        let update = ProductTypeUpdate {
            version,
            actions: vec![ProductTypeUpdateAction::AddAttributeDefinition {
                attribute: definition,
            }],
        };
        self.post(&["product-types", &format!("key={key}")], &update)
            .await
    }
}
