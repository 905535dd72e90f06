//! Category API handlers.

use axum::{Json, extract::State};
use ocm_catalog_admin::commercetools::DEFAULT_CATEGORY_LIMIT;
use ocm_catalog_core::Category;

use crate::error::Result;
use crate::state::AppState;

/// `GET /api/categories` - all categories.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    tracing::info!("API request received for all categories");

    let categories = state.client().get_categories(DEFAULT_CATEGORY_LIMIT).await?;
    Ok(Json(categories))
}
