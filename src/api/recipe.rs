//! Recipe Endpoints

use super::{encode, fetch_json, ApiError};
use crate::models::{GeneratedRecipe, RecipeDetail, RecipePrompt};

/// All recipes generated by the current user
pub async fn list_recipes() -> Result<Vec<RecipeDetail>, ApiError> {
    fetch_json("GET", "/api/recipe", None).await
}

/// Ask the backend to generate and store a recipe
pub async fn generate_recipe(prompt: &RecipePrompt) -> Result<RecipeDetail, ApiError> {
    let body = encode(prompt)?;
    let response: GeneratedRecipe = fetch_json("POST", "/api/recipe/ai", Some(body)).await?;
    Ok(response.recipe)
}
