//! Product commands: test product, catalog seeding, published lookups.
//!
//! `seed` expects the women's hierarchy (`categories create`) and a product
//! type (`product-types shirt`) to exist.

use ocm_catalog_admin::ProductService;
use ocm_catalog_admin::services::ProductTemplate;
use ocm_catalog_core::ProductTypeId;
use tracing::{info, warn};

use super::{client, load_yaml, print_json};

/// Bundled sample catalog.
pub const WOMEN_PRODUCTS: &str = include_str!("../../data/women_products.yaml");

fn service(product_type_id: &str) -> Result<ProductService, Box<dyn std::error::Error>> {
    Ok(ProductService::new(
        client()?,
        ProductTypeId::new(product_type_id),
    ))
}

/// Seed products from templates.
///
/// Individual product failures are logged and skipped; the command still
/// fails if none of the templates could be created.
///
/// # Errors
///
/// Returns an error if templates cannot be loaded, a category is missing, or
/// every product failed.
pub async fn seed(
    product_type_id: &str,
    file: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let templates: Vec<ProductTemplate> = load_yaml(file, WOMEN_PRODUCTS).await?;
    info!(templates = templates.len(), "Starting product seeding");

    let report = service(product_type_id)?.seed_catalog(&templates).await?;

    info!(total = report.created.len(), "Product seeding completed");
    for (category, count) in report.by_category() {
        info!("   {category}: {count} products");
    }

    if !report.failed.is_empty() {
        warn!(failed = report.failed.len(), "Some products were not created");
        for failure in &report.failed {
            warn!("  - {} ({}): {}", failure.name, failure.style_code, failure.error);
        }
    }

    if report.created.is_empty() && !templates.is_empty() {
        return Err("no products were created".into());
    }
    Ok(())
}

/// Create the development test product.
///
/// # Errors
///
/// Returns an error if the create call fails.
pub async fn create_test(
    product_type_id: &str,
    style_code: &str,
    name: &str,
    brand: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = service(product_type_id)?
        .create_test_product(style_code, name, brand)
        .await?;
    info!(id = %product.id, "Test product created");
    Ok(())
}

/// Print the published product that has a variant with `sku`.
///
/// # Errors
///
/// Returns an error if the request fails or nothing matches.
pub async fn by_sku(sku: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;
    let product = client
        .find_product_by_sku(sku)
        .await?
        .ok_or_else(|| format!("No product found with SKU: {sku}"))?;
    print_json(&product)
}

/// Print the published product with this style code.
///
/// # Errors
///
/// Returns an error if the request fails or nothing matches.
pub async fn by_style(style_code: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;
    let product = client
        .get_product_projection_by_key(style_code)
        .await?
        .ok_or_else(|| format!("No product found with style code: {style_code}"))?;
    print_json(&product)
}

/// Print published products (first page).
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn published() -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;
    let products = client
        .published_products(ocm_catalog_admin::commercetools::DEFAULT_PRODUCT_LIMIT)
        .await?;
    info!(count = products.len(), "Fetched published products");
    print_json(&products)
}
