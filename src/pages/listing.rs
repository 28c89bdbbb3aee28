//! Listing Pages
//!
//! History and favorites grids. Both pages share one layout and differ only
//! in what they fetch and what a committed unfavorite does.

use favorite_sync::{FavoriteSet, FavoriteSync};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::components::{ErrorScreen, ListingMode, PageHeader, RecipeBoardView, RequireSession, StatusScreen};
use crate::context::use_app_context;
use crate::models::{favorite_ids, RecipeDetail};
use crate::store::{board_finish_load, BoardStore, RecipeBoard, RecipeBoardStoreFields};

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <RequireSession>
            <ListingPage mode=ListingMode::AllRecipes />
        </RequireSession>
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <RequireSession>
            <ListingPage mode=ListingMode::FavoritesOnly />
        </RequireSession>
    }
}

/// Fetch the cards and the favorite set for `mode`.
///
/// The history page reads favorites separately and treats a failure there as
/// "nothing favorited"; the favorites page seeds every card as favorite.
async fn load_listing(mode: ListingMode) -> Result<(Vec<RecipeDetail>, FavoriteSet), ApiError> {
    match mode {
        ListingMode::AllRecipes => {
            let recipes = api::list_recipes().await?;
            let favorites = match api::list_favorites().await {
                Ok(list) => favorite_ids(&list),
                Err(err) => {
                    log::warn!("[LIST] Could not load favorites: {}", err);
                    FavoriteSet::new()
                }
            };
            Ok((recipes, favorites))
        }
        ListingMode::FavoritesOnly => {
            let recipes = api::list_favorites().await?;
            let favorites = favorite_ids(&recipes);
            Ok((recipes, favorites))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[component]
fn ListingPage(mode: ListingMode) -> impl IntoView {
    let ctx = use_app_context();
    let board: BoardStore = Store::new(RecipeBoard::new());
    let favorites = RwSignal::new(FavoriteSync::default());

    Effect::new(move |_| {
        let issued_at = favorites.with_untracked(FavoriteSync::epoch);
        spawn_local(async move {
            match load_listing(mode).await {
                Ok((recipes, set)) => {
                    log::info!("[LIST] Loaded {} recipes for {:?}", recipes.len(), mode);
                    favorites.try_update(|sync| sync.replace(set, issued_at));
                    board_finish_load(&board, Ok(recipes));
                }
                Err(err) => {
                    if ctx.handle_auth_error(&err) {
                        return;
                    }
                    log::error!("[LIST] Load failed for {:?}: {}", mode, err);
                    board_finish_load(&board, Err(err.user_message(mode.fetch_error())));
                }
            }
        });
    });

    let state = Memo::new(move |_| {
        if board.loading().get() {
            LoadState::Loading
        } else if let Some(message) = board.error().get() {
            LoadState::Failed(message)
        } else {
            LoadState::Ready
        }
    });

    view! {
        <div class="listing-page">
            <PageHeader title={mode.title()} links={mode.links()} />
            {move || match state.get() {
                LoadState::Loading => view! { <StatusScreen message={mode.loading_message()} /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorScreen message=message /> }.into_any(),
                LoadState::Ready => view! {
                    <RecipeBoardView board=board favorites=favorites mode=mode />
                }
                .into_any(),
            }}
        </div>
    }
}
