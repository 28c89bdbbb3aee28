//! Favorite Sync
//!
//! Optimistic favorite toggling for the recipe views.
//!
//! A view owns one [`FavoriteSync`]. A toggle flips the local set right away
//! via [`FavoriteSync::begin`], the caller issues the remote mutation, then
//! hands the result to [`FavoriteSync::settle`] which either keeps the flip or
//! restores the previous membership of that one id.

mod listing;
mod set;
mod sync;

pub use listing::{close_if_unfavorited, prune_unfavorited};
pub use set::{optimistic_toggle, FavoriteSet, RecipeId};
pub use sync::{FavoriteSync, PendingToggle, Settlement, SyncError, ToggleFailure};
