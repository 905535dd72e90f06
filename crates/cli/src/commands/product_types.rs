//! Product type commands.

use ocm_catalog_admin::ProductTypeService;
use tracing::info;

use super::{client, print_json};

/// Create the outer fabric, lining, and filling material types.
///
/// # Errors
///
/// Returns the first failed create; types created before it remain.
pub async fn materials() -> Result<(), Box<dyn std::error::Error>> {
    let service = ProductTypeService::new(client()?);
    let types = service.create_material_types().await?;

    for product_type in [&types.outer_fabric, &types.lining, &types.filling] {
        info!(id = %product_type.id, name = %product_type.name, "Created product type");
    }
    Ok(())
}

/// Create the full shirt product type with its nested types.
///
/// # Errors
///
/// Returns the first failed create. A conflict usually means the schema was
/// created by an earlier run.
pub async fn shirt() -> Result<(), Box<dyn std::error::Error>> {
    let service = ProductTypeService::new(client()?);
    let shirt = service.create_shirt_product_type().await?;

    info!(
        id = %shirt.id,
        attributes = shirt.attributes.len(),
        "Shirt product type created; pass its ID to `products seed --product-type-id`"
    );
    print_json(&shirt)
}
