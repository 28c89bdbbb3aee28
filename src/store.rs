//! Recipe Board Store
//!
//! Per-page state for the recipe listings, using Leptos reactive_stores for
//! fine-grained reactivity. Each page creates its own board; nothing here is
//! shared between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{RecipeDetail, RecipeId};

/// Listing page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RecipeBoard {
    /// Recipes shown as cards, in backend order
    pub recipes: Vec<RecipeDetail>,
    /// Recipe open in the detail overlay
    pub selected: Option<RecipeId>,
    /// Initial fetch still running
    pub loading: bool,
    /// Page-level fetch error
    pub error: Option<String>,
    /// Inline error from the last failed favorite toggle
    pub toggle_error: Option<String>,
}

impl RecipeBoard {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<RecipeBoard>;

// ========================
// Store Helper Functions
// ========================

/// Recipe currently shown in the overlay, if it is still listed
pub fn board_selected_recipe(board: &BoardStore) -> Option<RecipeDetail> {
    let id = board.selected().get()?;
    board
        .recipes()
        .with(|recipes| recipes.iter().find(|recipe| recipe.id() == id).cloned())
}

/// Finish the initial load, ignoring a board whose page is gone
pub fn board_finish_load(board: &BoardStore, result: Result<Vec<RecipeDetail>, String>) {
    board.try_update(|state| {
        match result {
            Ok(recipes) => state.recipes = recipes,
            Err(message) => state.error = Some(message),
        }
        state.loading = false;
    });
}

pub fn board_set_toggle_error(board: &BoardStore, message: Option<String>) {
    board.toggle_error().try_update(|error| *error = message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_starts_loading() {
        let board = RecipeBoard::new();
        assert!(board.loading);
        assert!(board.recipes.is_empty());
        assert_eq!(board.selected, None);
        assert_eq!(board.error, None);
    }
}
