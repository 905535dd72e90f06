//! Product API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use ocm_catalog_admin::commercetools::DEFAULT_PRODUCT_LIMIT;
use ocm_catalog_core::{Category, CategoryId, ProductProjection};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for SKU lookup.
#[derive(Debug, Deserialize)]
pub struct SkuQuery {
    pub sku: Option<String>,
}

/// A category together with its published products.
#[derive(Debug, Serialize)]
pub struct CategoryProducts {
    pub category: Category,
    pub products: Vec<ProductProjection>,
}

/// `GET /api/product?sku=` - the published product that has this SKU.
pub async fn by_sku(
    State(state): State<AppState>,
    Query(query): Query<SkuQuery>,
) -> Result<Json<ProductProjection>> {
    let sku = query
        .sku
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("SKU parameter is required".to_string()))?;

    tracing::info!(%sku, "API request received for SKU");

    let product = state
        .client()
        .find_product_by_sku(&sku)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No product found with SKU: {sku}")))?;

    tracing::debug!(product = product.display_name("en"), "Found product");
    Ok(Json(product))
}

/// `GET /api/products` - published products, first page.
pub async fn published(State(state): State<AppState>) -> Result<Json<Vec<ProductProjection>>> {
    tracing::info!("API request received for all published products");

    let products = state
        .client()
        .published_products(DEFAULT_PRODUCT_LIMIT)
        .await?;
    Ok(Json(products))
}

/// `GET /api/products/category/{category_id}` - published products in a category.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<ProductProjection>>> {
    tracing::info!(%category_id, "API request received for products in category");

    let products = state
        .client()
        .products_in_category(&CategoryId::new(category_id))
        .await?;
    Ok(Json(products))
}

/// `GET /api/products/category-key/{category_key}` - a category and its products.
pub async fn by_category_key(
    State(state): State<AppState>,
    Path(category_key): Path<String>,
) -> Result<Json<CategoryProducts>> {
    tracing::info!(%category_key, "API request received for products in category key");

    let category = state
        .client()
        .get_category_by_key(&category_key)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No category found with key: {category_key}"))
        })?;

    let products = state.client().products_in_category(&category.id).await?;
    Ok(Json(CategoryProducts { category, products }))
}
