//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use favorite_sync::FavoriteSet;
use serde::{Deserialize, Serialize};

pub use favorite_sync::RecipeId;

/// Minimal recipe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RecipeSummary {
    /// Card teaser: first two ingredient lines
    pub fn ingredients_preview(&self) -> String {
        if self.ingredients.is_empty() {
            return "No ingredients listed.".to_string();
        }
        let head: Vec<&str> = self.ingredients.split('\n').take(2).collect();
        format!("{}...", head.join(", "))
    }
}

/// Recipe with its tutorial videos (matches backend `Recipe.to_json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
}

impl RecipeDetail {
    pub fn id(&self) -> RecipeId {
        self.summary.id
    }
}

/// Externally hosted video for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: u32,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Logged-in user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /api/check_auth` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthStatus {
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

/// `POST /api/recipe/ai` body: exactly one of the two inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipePrompt {
    Ingredients(String),
    DishName(String),
}

/// `POST /api/recipe/ai` success body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedRecipe {
    pub recipe: RecipeDetail,
}

/// Which kind of prompt the generation form sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    #[default]
    Ingredients,
    DishName,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Ingredients => "ingredients",
            PromptKind::DishName => "dish_name",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dish_name" => PromptKind::DishName,
            _ => PromptKind::Ingredients,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Ingredients => "Ingredients",
            PromptKind::DishName => "Dish Name",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PromptKind::Ingredients => "Enter ingredients (e.g., chicken, rice, onions)",
            PromptKind::DishName => "Enter dish name (e.g., Chicken Curry)",
        }
    }

    pub fn prompt(&self, text: String) -> RecipePrompt {
        match self {
            PromptKind::Ingredients => RecipePrompt::Ingredients(text),
            PromptKind::DishName => RecipePrompt::DishName(text),
        }
    }
}

/// Favorite ids from a `GET /api/recipe/favorite` listing
pub fn favorite_ids(recipes: &[RecipeDetail]) -> FavoriteSet {
    recipes.iter().map(RecipeDetail::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(ingredients: &str) -> RecipeSummary {
        RecipeSummary {
            id: 1,
            name: "Soup".to_string(),
            ingredients: ingredients.to_string(),
            instructions: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_ingredients_preview() {
        assert_eq!(summary("carrot\nonion\nleek").ingredients_preview(), "carrot, onion...");
        assert_eq!(summary("salt").ingredients_preview(), "salt...");
        assert_eq!(summary("").ingredients_preview(), "No ingredients listed.");
    }

    #[test]
    fn test_generated_recipe_without_tutorials() {
        let body = r#"{
            "msg": "Recipe generated and saved!",
            "recipe": {
                "id": 42,
                "name": "Tacos",
                "ingredients": "tortillas\nbeef",
                "instructions": "Cook.\nServe.",
                "image_url": null,
                "user_id": 7,
                "tutorials": []
            }
        }"#;
        let generated: GeneratedRecipe = serde_json::from_str(body).unwrap();
        assert_eq!(generated.recipe.id(), 42);
        assert_eq!(generated.recipe.summary.name, "Tacos");
        assert_eq!(generated.recipe.summary.instructions, "Cook.\nServe.");
        assert!(generated.recipe.summary.image_url.is_none());
        assert!(generated.recipe.tutorials.is_empty());
    }

    #[test]
    fn test_recipe_listing_with_tutorial() {
        let body = r#"[{
            "id": 3,
            "name": "Curry",
            "ingredients": "chicken",
            "instructions": "Simmer",
            "image_url": "https://example.com/curry.jpg",
            "tutorials": [{
                "id": 1,
                "video_id": "abc",
                "title": "Easy Curry",
                "thumbnail_url": "https://img.example.com/abc.jpg",
                "channel_name": "Kitchen",
                "url": "https://www.youtube.com/watch?v=abc"
            }]
        }]"#;
        let recipes: Vec<RecipeDetail> = serde_json::from_str(body).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].tutorials[0].channel_name.as_deref(), Some("Kitchen"));
        assert_eq!(favorite_ids(&recipes), [3].into_iter().collect::<FavoriteSet>());
    }

    #[test]
    fn test_tutorial_with_null_columns() {
        let body = r#"[{
            "id": 5,
            "name": "Stew",
            "ingredients": "beef",
            "instructions": "Braise",
            "image_url": null,
            "tutorials": [{
                "id": 2,
                "video_id": "xyz",
                "title": "Beef Stew",
                "thumbnail_url": null,
                "channel_name": null,
                "url": "https://www.youtube.com/watch?v=xyz"
            }]
        }]"#;
        let recipes: Vec<RecipeDetail> = serde_json::from_str(body).unwrap();
        let tutorial = &recipes[0].tutorials[0];
        assert_eq!(tutorial.title, "Beef Stew");
        assert!(tutorial.thumbnail_url.is_none());
        assert!(tutorial.channel_name.is_none());
    }

    #[test]
    fn test_prompt_serializes_single_field() {
        let dish = PromptKind::DishName.prompt("Tacos".to_string());
        assert_eq!(serde_json::to_string(&dish).unwrap(), r#"{"dish_name":"Tacos"}"#);
        let ingredients = PromptKind::from_str("ingredients").prompt("rice".to_string());
        assert_eq!(serde_json::to_string(&ingredients).unwrap(), r#"{"ingredients":"rice"}"#);
    }

    #[test]
    fn test_auth_status_logged_out() {
        let status: AuthStatus = serde_json::from_str(r#"{"logged_in": false}"#).unwrap();
        assert!(!status.logged_in);
        assert!(status.user.is_none());
    }
}
