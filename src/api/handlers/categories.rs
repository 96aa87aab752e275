use crate::{
    AppState,
    types::{CategoriesResponse, Category},
};
use axum::{Json, extract::State};
use tracing::debug;

/// List every catalog category, in configured order
#[utoipa::path(
    get,
    path = "/api/v1/course/showAllCategories",
    responses(
        (status = 200, description = "All catalog categories", body = CategoriesResponse)
    ),
    tag = "catalog"
)]
pub async fn show_all_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let config = state.config_manager.config();
    let data: Vec<Category> = config.catalog.categories.clone();

    debug!(count = data.len(), "Serving catalog categories");

    Json(CategoriesResponse {
        success: true,
        data,
    })
}
