//! Category service: single creates, lookups, and hierarchy materialization.

use ocm_catalog_core::{Category, CategoryId, CategoryNode, CreatedCategory};
use tracing::instrument;

use super::hierarchy::{MaterializeError, materialize};
use crate::commercetools::{CommerceError, CommercetoolsClient};

/// Key of the development test category.
pub const TEST_CATEGORY_KEY: &str = "test-category";

/// Category operations bound to one platform client.
#[derive(Debug, Clone)]
pub struct CategoryService {
    client: CommercetoolsClient,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub const fn new(client: CommercetoolsClient) -> Self {
        Self { client }
    }

    /// Create one category, optionally under a parent.
    ///
    /// Children of `node` are ignored; use [`Self::create_hierarchy`] for
    /// trees.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails.
    #[instrument(skip(self, node), fields(key = %node.key))]
    pub async fn create_category(
        &self,
        node: &CategoryNode,
        parent_id: Option<&CategoryId>,
    ) -> Result<Category, CommerceError> {
        self.client.create_category(&node.to_draft(parent_id)).await
    }

    /// Create the development test category.
    ///
    /// # Errors
    ///
    /// Returns a `Conflict` kind error if it already exists.
    pub async fn create_test_category(&self) -> Result<Category, CommerceError> {
        self.create_category(&test_category(), None).await
    }

    /// Materialize a forest of categories. See [`materialize`].
    ///
    /// # Errors
    ///
    /// Returns [`MaterializeError`] on the first failed create call.
    pub async fn create_hierarchy(
        &self,
        roots: &[CategoryNode],
    ) -> Result<Vec<CreatedCategory>, MaterializeError> {
        materialize(&self.client, roots).await
    }

    /// Look up a category by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_by_key(&self, key: &str) -> Result<Option<Category>, CommerceError> {
        self.client.get_category_by_key(key).await
    }

    /// Look up a category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CommerceError> {
        self.client.get_category_by_id(id).await
    }

    /// List all categories (up to the platform page limit).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self) -> Result<Vec<Category>, CommerceError> {
        self.client
            .get_categories(crate::commercetools::DEFAULT_CATEGORY_LIMIT)
            .await
    }
}

/// The development test category node.
#[must_use]
pub fn test_category() -> CategoryNode {
    CategoryNode::new(TEST_CATEGORY_KEY, "Test Category", "test-category")
        .with_description("A test category for development purposes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_category_payload() {
        let draft = test_category().to_draft(None);
        assert_eq!(draft.key, "test-category");
        assert_eq!(draft.name.get("en"), Some("Test Category"));
        assert_eq!(draft.slug.get("en"), Some("test-category"));
        assert_eq!(
            draft.description.as_ref().and_then(|d| d.get("en")),
            Some("A test category for development purposes")
        );
        assert!(draft.parent.is_none());
    }
}
