//! Favorite Button Component
//!
//! Heart affordance shared by cards, the detail overlay and the generation panel.

use leptos::prelude::*;

/// Heart toggle
///
/// Disabled while a toggle for the same recipe is in flight.
///
/// # Arguments
/// * `favorite` - Membership in the owning view's favorite set
/// * `pending` - A toggle for this recipe has not settled yet
/// * `labelled` - Show "Favorited" / "Add to Favorites" next to the heart
#[component]
pub fn FavoriteButton(
    #[prop(into)] favorite: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(optional)] labelled: bool,
) -> impl IntoView {
    let label = move || match (labelled, favorite.get()) {
        (false, true) => "♥",
        (false, false) => "♡",
        (true, true) => "♥ Favorited",
        (true, false) => "♡ Add to Favorites",
    };

    view! {
        <button
            type="button"
            class=move || if favorite.get() { "favorite-btn active" } else { "favorite-btn" }
            title=move || if favorite.get() { "Remove from favorites" } else { "Add to favorites" }
            disabled=move || pending.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {label}
        </button>
    }
}
