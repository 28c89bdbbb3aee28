//! Recipe Board Component
//!
//! Card grid plus detail overlay for one listing page. The page owns the
//! favorite state; cards and overlay only read it and report clicks.

use favorite_sync::{close_if_unfavorited, prune_unfavorited, FavoriteSync, Settlement};
use leptos::prelude::*;

use super::{RecipeCard, RecipeDetailModal};
use crate::context::{use_app_context, Page};
use crate::favorite_toggle::{is_favorite_signal, is_pending_signal, toggle_favorite};
use crate::models::{RecipeDetail, RecipeId};
use crate::store::{board_selected_recipe, board_set_toggle_error, BoardStore, RecipeBoardStoreFields};

/// Which recipes a listing page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Every recipe the user generated
    AllRecipes,
    /// Only favorites; an unfavorited recipe leaves the page
    FavoritesOnly,
}

impl ListingMode {
    pub fn title(&self) -> &'static str {
        match self {
            ListingMode::AllRecipes => "My Recipe Collection",
            ListingMode::FavoritesOnly => "My Favorite Recipes",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            ListingMode::AllRecipes => "Loading recipes...",
            ListingMode::FavoritesOnly => "Loading your favorite recipes...",
        }
    }

    pub fn fetch_error(&self) -> &'static str {
        match self {
            ListingMode::AllRecipes => "Failed to fetch previous recipes",
            ListingMode::FavoritesOnly => "Failed to fetch favorite recipes",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            ListingMode::AllRecipes => "You haven't generated any recipes yet.",
            ListingMode::FavoritesOnly => {
                "No Favorites Yet! Generate some recipes or browse your collection to find some you love!"
            }
        }
    }

    fn empty_action(&self) -> &'static str {
        match self {
            ListingMode::AllRecipes => "Generate Your First Recipe!",
            ListingMode::FavoritesOnly => "Discover Recipes",
        }
    }

    /// Header navigation for this page
    pub fn links(&self) -> Vec<(&'static str, Page)> {
        match self {
            ListingMode::AllRecipes => {
                vec![("Generate New", Page::Generate), ("View Favorites", Page::Favorites)]
            }
            ListingMode::FavoritesOnly => {
                vec![("Generate New", Page::Generate), ("All My Recipes", Page::History)]
            }
        }
    }
}

/// Apply a settled toggle to the board.
///
/// Failures become the inline error; on a favorites-only board a committed
/// unfavorite removes the card and closes the overlay showing it.
pub fn apply_settlement(board: &BoardStore, settlement: &Settlement, fallback: &str, mode: ListingMode) {
    if let Some(failure) = settlement.failure() {
        board_set_toggle_error(board, Some(failure.user_message(fallback)));
        return;
    }
    if mode == ListingMode::FavoritesOnly {
        board
            .recipes()
            .try_update(|recipes| prune_unfavorited(settlement, recipes, RecipeDetail::id));
        board
            .selected()
            .try_update(|selected| close_if_unfavorited(settlement, selected));
    }
}

#[component]
pub fn RecipeBoardView(
    board: BoardStore,
    favorites: RwSignal<FavoriteSync>,
    mode: ListingMode,
) -> impl IntoView {
    let ctx = use_app_context();

    let on_toggle = Callback::new(move |id: RecipeId| {
        board_set_toggle_error(&board, None);
        toggle_favorite(ctx, favorites, id, move |settlement, fallback| {
            apply_settlement(&board, &settlement, fallback, mode);
        });
    });
    let on_open = Callback::new(move |id: RecipeId| board.selected().set(Some(id)));
    let on_close = Callback::new(move |_: ()| board.selected().set(None));

    view! {
        {move || board.toggle_error().get().map(|message| view! {
            <p class="inline-error">{message}</p>
        })}

        <Show
            when=move || board.recipes().with(|recipes| !recipes.is_empty())
            fallback=move || view! {
                <div class="empty-state">
                    <p>{mode.empty_message()}</p>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Generate)>
                        {mode.empty_action()}
                    </button>
                </div>
            }
        >
            <div class="recipe-grid">
                <For
                    each=move || board.recipes().get()
                    key=|recipe: &RecipeDetail| recipe.id()
                    children=move |recipe| {
                        let id = recipe.id();
                        view! {
                            <RecipeCard
                                recipe=recipe
                                favorite=is_favorite_signal(favorites, id)
                                pending=is_pending_signal(favorites, id)
                                on_open=on_open
                                on_toggle=on_toggle
                            />
                        }
                    }
                />
            </div>
        </Show>

        {move || board_selected_recipe(&board).map(|recipe| {
            let id = recipe.id();
            view! {
                <RecipeDetailModal
                    recipe=recipe
                    favorite=is_favorite_signal(favorites, id)
                    pending=is_pending_signal(favorites, id)
                    on_close=on_close
                    on_toggle=on_toggle
                />
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_never_point_at_current_page() {
        let history: Vec<Page> = ListingMode::AllRecipes.links().into_iter().map(|(_, p)| p).collect();
        assert_eq!(history, vec![Page::Generate, Page::Favorites]);

        let favorites: Vec<Page> = ListingMode::FavoritesOnly.links().into_iter().map(|(_, p)| p).collect();
        assert_eq!(favorites, vec![Page::Generate, Page::History]);
    }

    #[test]
    fn test_fetch_error_per_mode() {
        assert_eq!(ListingMode::AllRecipes.fetch_error(), "Failed to fetch previous recipes");
        assert_eq!(ListingMode::FavoritesOnly.fetch_error(), "Failed to fetch favorite recipes");
    }
}
