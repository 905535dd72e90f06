//! Category tree input, create payloads, and created results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, LocalizedString, Reference};

/// One node of a caller-supplied category tree.
///
/// `key` must be unique across the whole forest and across the remote
/// project; this is not checked locally. Locale maps accept the plain-string
/// shorthand (see [`LocalizedString`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub key: String,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<LocalizedString>,
        slug: impl Into<LocalizedString>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            order_hint: None,
            children: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<LocalizedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Build the create payload for this node under an optional parent.
    #[must_use]
    pub fn to_draft(&self, parent: Option<&CategoryId>) -> CategoryDraft {
        CategoryDraft {
            key: self.key.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            order_hint: self.order_hint.clone(),
            parent: parent.map(Reference::category),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Total number of nodes in a forest.
#[must_use]
pub fn forest_node_count(roots: &[CategoryNode]) -> usize {
    roots.iter().map(CategoryNode::node_count).sum()
}

/// Request body for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub key: String,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,
}

/// A category as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub version: i64,
    #[serde(default)]
    pub key: Option<String>,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,
    #[serde(default)]
    pub ancestors: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl Category {
    /// ID of the parent category, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent.as_ref().map(|p| CategoryId::new(p.id.as_str()))
    }
}

/// A category created by a materialization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCategory {
    pub id: CategoryId,
    pub key: String,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
}

impl From<Category> for CreatedCategory {
    fn from(category: Category) -> Self {
        let parent_id = category.parent_id();
        Self {
            id: category.id,
            key: category.key.unwrap_or_default(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            parent_id,
        }
    }
}
