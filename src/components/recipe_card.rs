//! Recipe Card Component
//!
//! Summary card in the recipe grid.

use leptos::prelude::*;

use super::FavoriteButton;
use crate::models::{RecipeDetail, RecipeId};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Recipe";

/// A single recipe card; clicking it opens the detail overlay
#[component]
pub fn RecipeCard(
    recipe: RecipeDetail,
    #[prop(into)] favorite: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_open: Callback<RecipeId>,
    #[prop(into)] on_toggle: Callback<RecipeId>,
) -> impl IntoView {
    let id = recipe.id();
    let preview = recipe.summary.ingredients_preview();
    let image = recipe
        .summary
        .image_url
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let name = recipe.summary.name;
    let alt = name.clone();
    let title = name.clone();

    view! {
        <div class="recipe-card" on:click=move |_| on_open.run(id)>
            <img class="recipe-card-image" src=image alt=alt />
            <div class="recipe-card-body">
                <div class="recipe-card-title-row">
                    <h3 class="recipe-card-title" title=title>{name}</h3>
                    <FavoriteButton
                        favorite=favorite
                        pending=pending
                        on_toggle=move |_: ()| on_toggle.run(id)
                    />
                </div>
                <p class="recipe-card-preview">{preview}</p>
            </div>
        </div>
    }
}
