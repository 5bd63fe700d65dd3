//! Handlers for the category/subcategory hierarchy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use owly_core::error::CoreError;
use owly_core::tree::{build_tree, TreeNode};
use owly_core::types::DbId;
use owly_db::models::category::Category;
use owly_db::repositories::CategoryRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::auth::SuccessResponse;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Request body for category and subcategory creation.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// A category with its nested subcategories, as returned by the list
/// endpoint.
#[derive(Debug, Serialize)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<CategoryTree>,
}

impl From<TreeNode<Category>> for CategoryTree {
    fn from(node: TreeNode<Category>) -> Self {
        CategoryTree {
            category: node.row,
            subcategories: node.children.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryTree>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct SubcategoryResponse {
    pub subcategory: Category,
}

/// GET /api/admin/categories
///
/// All categories as a two-level tree. The flat table comes back ordered
/// by name, so both roots and sibling groups are alphabetical.
pub async fn list_categories(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<CategoriesResponse>> {
    let rows = CategoryRepo::list(&state.pool).await?;
    let categories = build_tree(rows).into_iter().map(Into::into).collect();
    Ok(Json(CategoriesResponse { categories }))
}

/// POST /api/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Naam is verplicht".into(),
        )));
    }

    let category = CategoryRepo::create(&state.pool, name, None).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse { category })))
}

/// POST /api/admin/categories/{parentId}/subcategories
pub async fn create_subcategory(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(parent_id): Path<String>,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<SubcategoryResponse>)> {
    let name = input.name.trim();
    let parent_id: DbId = match parent_id.parse() {
        Ok(id) if !name.is_empty() => id,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Naam en parentId zijn verplicht".into(),
            )))
        }
    };

    CategoryRepo::find_by_id(&state.pool, parent_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Categorie",
            id: parent_id,
        })?;

    let subcategory = CategoryRepo::create(&state.pool, name, Some(parent_id)).await?;
    Ok((StatusCode::CREATED, Json(SubcategoryResponse { subcategory })))
}

/// DELETE /api/admin/categories/{id}
///
/// Subcategories are cascade-deleted by the schema; studio entries that
/// referenced the category keep their rows with the FK set null.
pub async fn delete_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id: DbId = id
        .parse()
        .map_err(|_| CoreError::Validation("Ongeldig ID".into()))?;

    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Categorie",
            id,
        }));
    }

    Ok(Json(SuccessResponse { success: true }))
}
