//! Recipe Detail Modal Component
//!
//! Overlay with the full recipe. Clicking the backdrop closes it.

use leptos::prelude::*;

use super::{FavoriteButton, RecipeSections};
use crate::models::{RecipeDetail, RecipeId};

#[component]
pub fn RecipeDetailModal(
    recipe: RecipeDetail,
    #[prop(into)] favorite: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_toggle: Callback<RecipeId>,
) -> impl IntoView {
    let id = recipe.id();
    let name = recipe.summary.name.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{name}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-actions">
                    <FavoriteButton
                        favorite=favorite
                        pending=pending
                        labelled=true
                        on_toggle=move |_: ()| on_toggle.run(id)
                    />
                </div>
                <RecipeSections recipe=recipe />
                <button class="modal-close-wide" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </div>
    }
}
