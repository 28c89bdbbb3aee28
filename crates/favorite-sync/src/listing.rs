//! Favorites Listing
//!
//! On a favorites-only page a committed unfavorite takes the recipe off the
//! page: the card goes away and an overlay showing it closes.

use crate::set::RecipeId;
use crate::sync::Settlement;

/// Drop the unfavorited recipe from a favorites listing.
///
/// Returns true when an entry was removed.
pub fn prune_unfavorited<T>(
    settlement: &Settlement,
    items: &mut Vec<T>,
    key: impl Fn(&T) -> RecipeId,
) -> bool {
    let Some(id) = settlement.unfavorited() else {
        return false;
    };
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// Close an overlay that is showing the unfavorited recipe.
///
/// Returns true when the overlay was closed.
pub fn close_if_unfavorited(settlement: &Settlement, selected: &mut Option<RecipeId>) -> bool {
    match (settlement.unfavorited(), *selected) {
        (Some(id), Some(shown)) if id == shown => {
            *selected = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::FavoriteSet;
    use crate::sync::{FavoriteSync, ToggleFailure};

    #[derive(Debug, PartialEq)]
    struct Card {
        id: RecipeId,
    }

    #[test]
    fn test_unfavorite_removes_card_and_closes_overlay() {
        let mut cards = vec![Card { id: 1 }, Card { id: 2 }];
        let mut selected = Some(2);
        let mut sync = FavoriteSync::new(cards.iter().map(|c| c.id).collect::<FavoriteSet>());

        let ticket = sync.begin(2).unwrap();
        let settlement = sync.settle(ticket, Ok(()));

        assert!(prune_unfavorited(&settlement, &mut cards, |c| c.id));
        assert!(close_if_unfavorited(&settlement, &mut selected));
        assert_eq!(cards, vec![Card { id: 1 }]);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_overlay_on_other_recipe_stays_open() {
        let mut cards = vec![Card { id: 1 }, Card { id: 2 }];
        let mut selected = Some(1);
        let settlement = Settlement::Committed { id: 2, favorite: false };

        prune_unfavorited(&settlement, &mut cards, |c| c.id);
        assert!(!close_if_unfavorited(&settlement, &mut selected));
        assert_eq!(selected, Some(1));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_reverted_toggle_keeps_listing() {
        let mut cards = vec![Card { id: 1 }, Card { id: 2 }];
        let mut selected = Some(2);
        let settlement = Settlement::Reverted {
            id: 2,
            failure: ToggleFailure::NetworkFailure("offline".to_string()),
        };

        assert!(!prune_unfavorited(&settlement, &mut cards, |c| c.id));
        assert!(!close_if_unfavorited(&settlement, &mut selected));
        assert_eq!(cards.len(), 2);
        assert_eq!(selected, Some(2));
    }

    #[test]
    fn test_committed_favorite_keeps_listing() {
        let mut cards = vec![Card { id: 3 }];
        let settlement = Settlement::Committed { id: 3, favorite: true };
        assert!(!prune_unfavorited(&settlement, &mut cards, |c| c.id));
        assert_eq!(cards.len(), 1);
    }
}
