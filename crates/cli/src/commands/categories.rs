//! Category commands.
//!
//! `create` materializes a category forest parent-first. Without `--file` it
//! uses the bundled women's hierarchy in `data/women.yaml`.

use ocm_catalog_admin::CategoryService;
use ocm_catalog_core::{CategoryId, CategoryNode, forest_node_count};
use tracing::{error, info};

use super::{client, load_yaml, print_json};

/// Bundled women's category hierarchy.
pub const WOMEN_HIERARCHY: &str = include_str!("../../data/women.yaml");

/// Materialize a category hierarchy.
///
/// On failure, logs the failing key, its path from the root, and every
/// category created before the failure. Re-running the same input fails on
/// the first already-created key.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or any create call fails.
pub async fn create(file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let roots: Vec<CategoryNode> = load_yaml(file, WOMEN_HIERARCHY).await?;
    info!(
        roots = roots.len(),
        categories = forest_node_count(&roots),
        "Creating category hierarchy"
    );

    let service = CategoryService::new(client()?);

    match service.create_hierarchy(&roots).await {
        Ok(created) => {
            info!(total = created.len(), "Category hierarchy created");
            print_json(&created)
        }
        Err(e) => {
            error!(
                key = %e.key,
                path = %e.path.join(" > "),
                kind = %e.kind(),
                "Category hierarchy creation stopped"
            );
            if !e.created.is_empty() {
                error!(
                    "{} categories were created before the failure:",
                    e.created.len()
                );
                for category in &e.created {
                    error!("  - {} ({})", category.key, category.id);
                }
            }
            Err(e.into())
        }
    }
}

/// Create the development test category.
///
/// # Errors
///
/// Returns an error if the create call fails.
pub async fn create_test() -> Result<(), Box<dyn std::error::Error>> {
    let service = CategoryService::new(client()?);
    let category = service.create_test_category().await?;
    info!(id = %category.id, "Test category created");
    print_json(&category)
}

/// List categories.
///
/// # Errors
///
/// Returns an error if the API request fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let service = CategoryService::new(client()?);
    let categories = service.list().await?;
    info!(count = categories.len(), "Fetched categories");
    print_json(&categories)
}

/// Show one category by key or ID.
///
/// # Errors
///
/// Returns an error if neither is given, the request fails, or no category
/// matches.
pub async fn get(key: Option<&str>, id: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let service = CategoryService::new(client()?);

    let (category, label) = match (key, id) {
        (Some(key), _) => (service.get_by_key(key).await?, format!("key={key}")),
        (None, Some(id)) => (
            service.get_by_id(&CategoryId::new(id)).await?,
            format!("id={id}"),
        ),
        (None, None) => return Err("either --key or --id is required".into()),
    };

    let category = category.ok_or_else(|| format!("No category found with {label}"))?;
    print_json(&category)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn women() -> Vec<CategoryNode> {
        serde_yaml::from_str(WOMEN_HIERARCHY).unwrap()
    }

    #[test]
    fn test_bundled_hierarchy_shape() {
        let roots = women();
        assert_eq!(roots.len(), 1);
        assert_eq!(forest_node_count(&roots), 36);

        let root = &roots[0];
        assert_eq!(root.key, "women");
        assert_eq!(root.name.get("de"), Some("Damen"));
        assert!(root.description.is_some());

        let groups: Vec<&str> = root.children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            groups,
            [
                "women-clothing",
                "women-shoes",
                "women-accessories",
                "women-lingerie",
                "women-activewear"
            ]
        );
        assert_eq!(root.children[0].children.len(), 11);
    }

    #[test]
    fn test_bundled_hierarchy_keys_are_unique() {
        fn collect<'a>(node: &'a CategoryNode, keys: &mut Vec<&'a str>) {
            keys.push(&node.key);
            for child in &node.children {
                collect(child, keys);
            }
        }

        let roots = women();
        let mut keys = Vec::new();
        for root in &roots {
            collect(root, &mut keys);
        }
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_bundled_hierarchy_has_seed_categories() {
        let roots = women();
        let keys: Vec<&str> = roots[0]
            .children
            .iter()
            .flat_map(|group| std::iter::once(group).chain(group.children.iter()))
            .map(|c| c.key.as_str())
            .collect();

        for key in [
            "women-tops",
            "women-dresses",
            "women-pants",
            "women-jackets",
            "women-shoes",
            "women-accessories",
            "women-lingerie",
            "women-activewear",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
