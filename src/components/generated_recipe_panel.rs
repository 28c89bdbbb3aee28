//! Generated Recipe Panel Component
//!
//! Main panel of the generate page showing the latest or selected recipe.

use leptos::prelude::*;

use super::{FavoriteButton, RecipeSections};
use crate::models::RecipeDetail;

#[component]
pub fn GeneratedRecipePanel(
    recipe: RecipeDetail,
    #[prop(into)] favorite: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    /// Inline error from the last failed toggle
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let name = recipe.summary.name.clone();

    view! {
        <section class="generated-recipe">
            <div class="generated-recipe-header">
                <h2>{name}</h2>
                <FavoriteButton
                    favorite=favorite
                    pending=pending
                    labelled=true
                    on_toggle=on_toggle
                />
            </div>
            {move || error.get().map(|message| view! { <p class="inline-error">{message}</p> })}
            <RecipeSections recipe=recipe />
        </section>
    }
}
