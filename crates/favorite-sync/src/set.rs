//! Favorite Set
//!
//! Value type holding the ids the current user has marked as favorite.

use std::collections::HashSet;

/// Backend-assigned recipe identifier
pub type RecipeId = u32;

/// Set of favorited recipe ids.
///
/// Cheap membership tests; cloned into each render rather than shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<RecipeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns true if the id was not present before.
    pub fn insert(&mut self, id: RecipeId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the id was present before.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        self.ids.remove(&id)
    }

    /// Force the membership of `id` to `favorite`
    pub fn set_membership(&mut self, id: RecipeId, favorite: bool) {
        if favorite {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Copy of this set with the membership of `id` flipped
    pub fn toggled(&self, id: RecipeId) -> Self {
        let mut next = self.clone();
        let was_favorite = next.contains(id);
        next.set_membership(id, !was_favorite);
        next
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecipeId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<RecipeId> for FavoriteSet {
    fn extend<I: IntoIterator<Item = RecipeId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

/// The set a view renders while the toggle for `id` is in flight.
///
/// Mirrors the backend's flip: present ids are removed, absent ids added.
pub fn optimistic_toggle(id: RecipeId, current: &FavoriteSet) -> FavoriteSet {
    current.toggled(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(ids: &[RecipeId]) -> FavoriteSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_optimistic_toggle_removes_present_id() {
        let current = set_of(&[3, 7]);
        let next = optimistic_toggle(7, &current);
        assert_eq!(next, set_of(&[3]));
        // Input is untouched
        assert_eq!(current, set_of(&[3, 7]));
    }

    #[test]
    fn test_optimistic_toggle_adds_absent_id() {
        let next = optimistic_toggle(9, &set_of(&[3]));
        assert_eq!(next, set_of(&[3, 9]));
    }

    #[test]
    fn test_toggle_only_changes_target_membership() {
        let current = set_of(&[1, 2, 3, 4]);
        for id in 0..8 {
            let next = optimistic_toggle(id, &current);
            for other in 0..8 {
                if other == id {
                    assert_ne!(next.contains(other), current.contains(other));
                } else {
                    assert_eq!(next.contains(other), current.contains(other));
                }
            }
        }
    }

    #[test]
    fn test_insert_is_unique() {
        let mut set = FavoriteSet::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert_eq!(set.len(), 1);
        assert!(set.remove(5));
        assert!(set.is_empty());
    }
}
