/**
 * Categories
 *
 * Forum categories are seeded at startup and read-only afterwards.
 */
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::{AuthError, BackendError};

/// A forum category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    #[sqlx(rename = "category_id")]
    pub id: String,
    #[sqlx(rename = "category_number")]
    pub number: i64,
    #[sqlx(rename = "category_name")]
    pub name: String,
}

/// All categories ordered by number
pub async fn fetch_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT category_id, category_number, category_name FROM categories ORDER BY category_number",
    )
    .fetch_all(pool)
    .await
}

/// GET /api/categories
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Category>>, BackendError> {
    let categories = fetch_categories(&pool).await.map_err(AuthError::from)?;
    Ok(Json(categories))
}
