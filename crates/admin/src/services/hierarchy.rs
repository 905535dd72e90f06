//! Category tree materialization.
//!
//! Turns a caller-supplied forest of [`CategoryNode`]s into live categories,
//! one create call per node, parent before child. Each created parent's ID is
//! threaded into its children's create payloads.
//!
//! The walk uses an explicit stack instead of recursion, so hierarchy depth
//! is bounded only by memory. Calls are strictly sequential: a child's
//! payload needs the ID its parent was assigned.
//!
//! # Failure policy
//!
//! The first failed create aborts the run. Nothing later in pre-order is
//! attempted and nothing already created is rolled back. The returned
//! [`MaterializeError`] carries the failing key, its path from the root, and
//! every category created before the failure.

use std::future::Future;

use ocm_catalog_core::{Category, CategoryDraft, CategoryId, CategoryNode, CreatedCategory};
use thiserror::Error;
use tracing::instrument;

use crate::commercetools::{CommerceError, ErrorKind};

/// Remote category collection that can create one category at a time.
pub trait CategoryCreator {
    /// Create a single category and return it as stored remotely.
    fn create_category(
        &self,
        draft: &CategoryDraft,
    ) -> impl Future<Output = Result<Category, CommerceError>> + Send;
}

/// A create call failed partway through a materialization run.
#[derive(Debug, Error)]
#[error("failed to create category '{key}' (path: {}): {source}", .path.join(" > "))]
pub struct MaterializeError {
    /// The underlying API error.
    pub source: CommerceError,
    /// Key of the node whose create call failed.
    pub key: String,
    /// Keys from the root down to the failing node, inclusive.
    pub path: Vec<String>,
    /// Categories created before the failure, in pre-order.
    pub created: Vec<CreatedCategory>,
}

impl MaterializeError {
    /// Classification of the underlying failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Categories that now exist remotely despite the failure.
    #[must_use]
    pub fn into_created(self) -> Vec<CreatedCategory> {
        self.created
    }
}

/// Work item: a node, the ID of its created parent, and its depth.
struct Pending<'a> {
    node: &'a CategoryNode,
    parent_id: Option<CategoryId>,
    depth: usize,
}

/// Create every node of `roots` remotely, depth-first and parent-first.
///
/// Returns one [`CreatedCategory`] per node in pre-order. Root results have
/// no `parent_id`; every other result's `parent_id` is the `id` of its
/// structural parent's result.
///
/// Keys must be unique across the forest and the remote project. This is not
/// checked here: a duplicate surfaces as a `Conflict` kind error from the
/// remote side. Re-running on an already materialized forest therefore fails
/// on the first root.
///
/// # Errors
///
/// Returns [`MaterializeError`] on the first failed create call.
#[instrument(skip_all, fields(roots = roots.len()))]
pub async fn materialize<C>(
    creator: &C,
    roots: &[CategoryNode],
) -> Result<Vec<CreatedCategory>, MaterializeError>
where
    C: CategoryCreator,
{
    let mut created = Vec::with_capacity(ocm_catalog_core::forest_node_count(roots));
    let mut path: Vec<String> = Vec::new();

    // Reversed so that popping yields the first root first.
    let mut stack: Vec<Pending<'_>> = roots
        .iter()
        .rev()
        .map(|node| Pending {
            node,
            parent_id: None,
            depth: 0,
        })
        .collect();

    while let Some(Pending {
        node,
        parent_id,
        depth,
    }) = stack.pop()
    {
        path.truncate(depth);
        path.push(node.key.clone());

        let draft = node.to_draft(parent_id.as_ref());
        let category = match creator.create_category(&draft).await {
            Ok(category) => category,
            Err(source) => {
                tracing::warn!(
                    key = %node.key,
                    kind = %source.kind(),
                    created = created.len(),
                    "Category materialization aborted"
                );
                return Err(MaterializeError {
                    source,
                    key: node.key.clone(),
                    path,
                    created,
                });
            }
        };

        tracing::debug!(key = %node.key, category_id = %category.id, depth, "Materialized category");

        let id = category.id;
        stack.extend(node.children.iter().rev().map(|child| Pending {
            node: child,
            parent_id: Some(id.clone()),
            depth: depth + 1,
        }));

        created.push(CreatedCategory {
            id,
            key: draft.key,
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
            parent_id,
        });
    }

    tracing::info!(count = created.len(), "Category hierarchy materialized");
    Ok(created)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use ocm_catalog_core::{LocalizedString, Reference};

    use super::*;
    use crate::commercetools::ApiErrorObject;

    /// In-memory category collection that rejects duplicate keys.
    #[derive(Default)]
    struct FakeCategories {
        keys: Mutex<HashSet<String>>,
        calls: Mutex<Vec<CategoryDraft>>,
        fail_on: Option<(&'static str, &'static str)>,
    }

    impl FakeCategories {
        fn failing_on(key: &'static str, code: &'static str) -> Self {
            Self {
                fail_on: Some((key, code)),
                ..Self::default()
            }
        }

        fn attempted_keys(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|d| d.key.clone())
                .collect()
        }
    }

    fn api_error(code: &str) -> CommerceError {
        CommerceError::Api {
            status: 400,
            message: format!("{code} error"),
            errors: vec![ApiErrorObject {
                code: code.to_string(),
                message: format!("{code} error"),
                extra: serde_json::Map::new(),
            }],
        }
    }

    impl CategoryCreator for FakeCategories {
        async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CommerceError> {
            self.calls.lock().unwrap().push(draft.clone());

            if let Some((key, code)) = self.fail_on
                && draft.key == key
            {
                return Err(api_error(code));
            }
            if !self.keys.lock().unwrap().insert(draft.key.clone()) {
                return Err(api_error("DuplicateField"));
            }

            Ok(Category {
                id: CategoryId::new(format!("id-{}", draft.key)),
                version: 1,
                key: Some(draft.key.clone()),
                name: draft.name.clone(),
                slug: draft.slug.clone(),
                description: draft.description.clone(),
                parent: draft.parent.clone(),
                ancestors: Vec::new(),
                order_hint: draft.order_hint.clone(),
                created_at: None,
                last_modified_at: None,
            })
        }
    }

    fn node(key: &str) -> CategoryNode {
        CategoryNode::new(key, key, key)
    }

    /// a(b(d, e), c) and f(g)
    fn forest() -> Vec<CategoryNode> {
        vec![
            node("a")
                .with_child(node("b").with_child(node("d")).with_child(node("e")))
                .with_child(node("c")),
            node("f").with_child(node("g")),
        ]
    }

    fn keys(created: &[CreatedCategory]) -> Vec<&str> {
        created.iter().map(|c| c.key.as_str()).collect()
    }

    #[tokio::test]
    async fn test_women_tops_scenario() {
        let roots = vec![
            CategoryNode::new("women", "Women", "women")
                .with_child(CategoryNode::new("women-tops", "Tops", "women-tops")),
        ];
        let fake = FakeCategories::default();

        let created = materialize(&fake, &roots).await.unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].key, "women");
        assert_eq!(created[0].parent_id, None);
        assert_eq!(created[1].key, "women-tops");
        assert_eq!(created[1].parent_id.as_ref(), Some(&created[0].id));
        assert_eq!(created[1].name, LocalizedString::from("Tops"));
    }

    #[tokio::test]
    async fn test_preorder_and_parent_links() {
        let fake = FakeCategories::default();
        let created = materialize(&fake, &forest()).await.unwrap();

        assert_eq!(keys(&created), ["a", "b", "d", "e", "c", "f", "g"]);
        assert_eq!(created.len(), ocm_catalog_core::forest_node_count(&forest()));

        let id_of = |key: &str| created.iter().find(|c| c.key == key).map(|c| c.id.clone());
        for (child, parent) in [("b", "a"), ("d", "b"), ("e", "b"), ("c", "a"), ("g", "f")] {
            let result = created.iter().find(|c| c.key == child).unwrap();
            assert_eq!(result.parent_id, id_of(parent), "parent of {child}");
        }
        for root in ["a", "f"] {
            let result = created.iter().find(|c| c.key == root).unwrap();
            assert!(result.parent_id.is_none(), "{root} is a root");
        }
    }

    #[tokio::test]
    async fn test_parent_reference_sent_in_payload() {
        let fake = FakeCategories::default();
        materialize(&fake, &forest()).await.unwrap();

        let calls = fake.calls.lock().unwrap();
        assert!(calls[0].parent.is_none());
        assert_eq!(
            calls[1].parent,
            Some(Reference::category(&CategoryId::new("id-a")))
        );
    }

    #[tokio::test]
    async fn test_empty_forest() {
        let fake = FakeCategories::default();
        let created = materialize(&fake, &[]).await.unwrap();
        assert!(created.is_empty());
        assert!(fake.attempted_keys().is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_traversal() {
        let fake = FakeCategories::failing_on("b", "RequiredField");
        let err = materialize(&fake, &forest()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.key, "b");
        assert_eq!(err.path, ["a", "b"]);
        assert_eq!(keys(&err.created), ["a"]);
        // Nothing after "b" in pre-order was attempted.
        assert_eq!(fake.attempted_keys(), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_failure_path_for_deep_node() {
        let fake = FakeCategories::failing_on("e", "InvalidInput");
        let err = materialize(&fake, &forest()).await.unwrap_err();

        assert_eq!(err.path, ["a", "b", "e"]);
        assert_eq!(keys(&err.created), ["a", "b", "d"]);
        assert!(err.to_string().contains("a > b > e"));
    }

    #[tokio::test]
    async fn test_duplicate_key_in_forest_is_conflict() {
        let roots = vec![node("a").with_child(node("x")), node("x"), node("z")];
        let fake = FakeCategories::default();

        let err = materialize(&fake, &roots).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.path, ["x"]);
        assert_eq!(keys(&err.created), ["a", "x"]);
        assert_eq!(fake.attempted_keys(), ["a", "x", "x"]);
    }

    #[tokio::test]
    async fn test_rerun_fails_on_first_root() {
        let fake = FakeCategories::default();
        materialize(&fake, &forest()).await.unwrap();

        let err = materialize(&fake, &forest()).await.unwrap_err();

        assert!(err.source.is_conflict());
        assert_eq!(err.key, "a");
        assert!(err.into_created().is_empty());
    }

    #[tokio::test]
    async fn test_deep_chain_does_not_recurse() {
        let mut chain = node("level-0");
        for depth in (1..2_000).rev() {
            chain = node(&format!("level-{depth}")).with_child(chain);
        }
        let fake = FakeCategories::default();

        let created = materialize(&fake, &[chain]).await.unwrap();

        assert_eq!(created.len(), 2_000);
        assert!(created[0].parent_id.is_none());
        assert_eq!(created[1_999].key, "level-0");
    }
}
