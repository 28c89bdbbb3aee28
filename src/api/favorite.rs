//! Favorite Endpoints

use super::{fetch_json, fetch_unit, ApiError};
use crate::models::{RecipeDetail, RecipeId};

/// The current user's favorite recipes
pub async fn list_favorites() -> Result<Vec<RecipeDetail>, ApiError> {
    fetch_json("GET", "/api/recipe/favorite", None).await
}

/// Flip the stored favorite state of `id`.
///
/// The server decides the direction; the body of a success is not needed.
pub async fn toggle_favorite(id: RecipeId) -> Result<(), ApiError> {
    fetch_unit("POST", &format!("/api/recipe/favorite/{}", id), None).await
}
