//! Category contract endpoint

use axum::Json;
use serde::Serialize;

use crate::types::Category;

/// One category entry for client filter UIs
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: String,
}

/// Response for GET /api/categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

/// GET /api/categories - the fixed category enumeration, verbatim
pub async fn list_categories() -> Json<CategoriesResponse> {
    let categories = Category::ALL
        .iter()
        .map(|c| CategoryInfo {
            value: c.as_str(),
            label: c.label(),
        })
        .collect();
    Json(CategoriesResponse { categories })
}
