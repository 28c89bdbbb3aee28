//! Favorite Toggle Glue
//!
//! Runs one toggle through a view's [`FavoriteSync`]: optimistic flip now,
//! remote mutation in the background, settlement when it returns.

use favorite_sync::{FavoriteSync, Settlement};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::RecipeId;

/// Toggle `id` in `favorites` and call `on_settled` with the outcome.
///
/// `on_settled` also gets the fallback error text for this direction. It is
/// skipped when the owning view was torn down before the response arrived.
/// A toggle for an id that is still in flight is ignored.
pub fn toggle_favorite(
    ctx: AppContext,
    favorites: RwSignal<FavoriteSync>,
    id: RecipeId,
    on_settled: impl FnOnce(Settlement, &'static str) + 'static,
) {
    let ticket = match favorites.try_update(|sync| sync.begin(id)) {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            log::debug!("[FAV] {}", err);
            return;
        }
        None => return,
    };
    let fallback = if ticket.was_favorite() {
        "Failed to unfavorite recipe"
    } else {
        "Failed to favorite recipe"
    };

    spawn_local(async move {
        let result = api::toggle_favorite(id).await;
        let auth_lost = result.as_ref().err().is_some_and(|err| err.is_auth_required());
        let outcome = result.map_err(Into::into);
        let Some(settlement) = favorites.try_update(move |sync| sync.settle(ticket, outcome)) else {
            log::debug!("[FAV] View gone before toggle for recipe {} settled", id);
            return;
        };
        if auth_lost {
            ctx.expire_session();
        } else {
            on_settled(settlement, fallback);
        }
    });
}

/// Whether the view should paint `id` as favorite
pub fn is_favorite_signal(favorites: RwSignal<FavoriteSync>, id: RecipeId) -> Signal<bool> {
    Signal::derive(move || favorites.with(|sync| sync.is_favorite(id)))
}

/// Whether the affordance for `id` must be disabled
pub fn is_pending_signal(favorites: RwSignal<FavoriteSync>, id: RecipeId) -> Signal<bool> {
    Signal::derive(move || favorites.with(|sync| sync.is_pending(id)))
}
