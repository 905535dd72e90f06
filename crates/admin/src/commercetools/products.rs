//! Product and product projection endpoints.

use ocm_catalog_core::{
    CategoryId, PagedQueryResponse, Product, ProductDraft, ProductProjection,
};
use tracing::instrument;

use super::{CommerceError, CommercetoolsClient, escape_quoted};

/// Default page size for the published product listing.
pub const DEFAULT_PRODUCT_LIMIT: u32 = 100;

/// Search filter matching any variant with the given SKU.
fn sku_filter(sku: &str) -> String {
    format!("variants.sku:\"{}\"", escape_quoted(sku))
}

/// Search filter matching products assigned to a category.
fn category_filter(category_id: &CategoryId) -> String {
    format!("categories.id:\"{}\"", escape_quoted(category_id.as_str()))
}

impl CommercetoolsClient {
    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns a `Conflict` kind error if the key, slug, or a SKU already
    /// exists, or a `Validation` kind error for attribute mismatches.
    #[instrument(skip(self, draft), fields(key = ?draft.key))]
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CommerceError> {
        let product: Product = self.post(&["products"], draft).await?;
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    /// Find the published product that has a variant with this SKU.
    ///
    /// # Errors
    ///
    /// Returns an error if the search request fails.
    #[instrument(skip(self))]
    pub async fn find_product_by_sku(
        &self,
        sku: &str,
    ) -> Result<Option<ProductProjection>, CommerceError> {
        let page: PagedQueryResponse<ProductProjection> = self
            .get(
                &["product-projections", "search"],
                &[
                    ("filter", sku_filter(sku)),
                    ("staged", "false".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(page.into_first())
    }

    /// Get the published projection of a product by its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails for a reason other than
    /// the product not existing.
    #[instrument(skip(self))]
    pub async fn get_product_projection_by_key(
        &self,
        key: &str,
    ) -> Result<Option<ProductProjection>, CommerceError> {
        self.get_optional(
            &["product-projections", &format!("key={key}")],
            &[("staged", "false".to_string())],
        )
        .await
    }

    /// List published products, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn published_products(
        &self,
        limit: u32,
    ) -> Result<Vec<ProductProjection>, CommerceError> {
        let page: PagedQueryResponse<ProductProjection> = self
            .get(
                &["product-projections", "search"],
                &[
                    ("staged", "false".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(page.into_results())
    }

    /// Published products assigned to a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the search request fails.
    #[instrument(skip(self), fields(category_id = %category_id))]
    pub async fn products_in_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<ProductProjection>, CommerceError> {
        let page: PagedQueryResponse<ProductProjection> = self
            .get(
                &["product-projections", "search"],
                &[
                    ("filter", category_filter(category_id)),
                    ("staged", "false".to_string()),
                    ("limit", DEFAULT_PRODUCT_LIMIT.to_string()),
                ],
            )
            .await?;
        Ok(page.into_results())
    }
}
