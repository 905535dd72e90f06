//! Category endpoints.

use ocm_catalog_core::{Category, CategoryDraft, CategoryId, PagedQueryResponse};
use tracing::instrument;

use super::{CommerceError, CommercetoolsClient};
use crate::services::hierarchy::CategoryCreator;

/// Page size used when listing every category.
pub const DEFAULT_CATEGORY_LIMIT: u32 = 500;

impl CommercetoolsClient {
    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns a `Conflict` kind error if the key or slug already exists, or
    /// a `Validation` kind error if required fields are missing.
    #[instrument(skip(self, draft), fields(key = %draft.key))]
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CommerceError> {
        let category: Category = self.post(&["categories"], draft).await?;
        tracing::info!(category_id = %category.id, "Created category");
        Ok(category)
    }

    /// Get a category by its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails for a reason other than
    /// the category not existing.
    #[instrument(skip(self))]
    pub async fn get_category_by_key(&self, key: &str) -> Result<Option<Category>, CommerceError> {
        self.get_optional(&["categories", &format!("key={key}")], &[])
            .await
    }

    /// Get a category by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails for a reason other than
    /// the category not existing.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn get_category_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CommerceError> {
        self.get_optional(&["categories", id.as_str()], &[]).await
    }

    /// List categories, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self, limit: u32) -> Result<Vec<Category>, CommerceError> {
        let page: PagedQueryResponse<Category> = self
            .get(&["categories"], &[("limit", limit.to_string())])
            .await?;
        Ok(page.into_results())
    }
}

impl CategoryCreator for CommercetoolsClient {
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CommerceError> {
        Self::create_category(self, draft).await
    }
}
