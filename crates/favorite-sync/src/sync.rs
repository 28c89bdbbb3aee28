//! Favorite Synchronizer
//!
//! Per-view owner of a [`FavoriteSet`] plus the ids whose toggle is in flight.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::set::{optimistic_toggle, FavoriteSet, RecipeId};

/// Why a remote toggle did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleFailure {
    /// The request never completed
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// The server answered with a non-2xx status
    #[error("rejected by server ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    RejectedByServer { status: u16, message: Option<String> },
}

impl ToggleFailure {
    /// Message to show next to the affordance.
    ///
    /// Uses the server's `error` text when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ToggleFailure::RejectedByServer {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("a favorite toggle for recipe {0} is already in flight")]
    AlreadyPending(RecipeId),
}

/// Ticket for one in-flight toggle; hand it back to [`FavoriteSync::settle`].
#[must_use = "a pending toggle must be settled or the id stays locked"]
#[derive(Debug, PartialEq, Eq)]
pub struct PendingToggle {
    id: RecipeId,
    was_favorite: bool,
}

impl PendingToggle {
    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn was_favorite(&self) -> bool {
        self.was_favorite
    }
}

/// Outcome of a settled toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Optimistic state confirmed; `favorite` is the new membership
    Committed { id: RecipeId, favorite: bool },
    /// Membership restored to its pre-toggle value
    Reverted { id: RecipeId, failure: ToggleFailure },
}

impl Settlement {
    pub fn id(&self) -> RecipeId {
        match self {
            Settlement::Committed { id, .. } | Settlement::Reverted { id, .. } => *id,
        }
    }

    /// Id that left the favorites for good, if any
    pub fn unfavorited(&self) -> Option<RecipeId> {
        match self {
            Settlement::Committed { id, favorite: false } => Some(*id),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ToggleFailure> {
        match self {
            Settlement::Reverted { failure, .. } => Some(failure),
            Settlement::Committed { .. } => None,
        }
    }
}

/// Favorite state owned by exactly one view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSync {
    set: FavoriteSet,
    pending: HashSet<RecipeId>,
    /// Bumped by every settle
    epoch: u64,
    /// Epoch at which each id last settled
    settled_at: HashMap<RecipeId, u64>,
}

impl FavoriteSync {
    pub fn new(set: FavoriteSet) -> Self {
        Self {
            set,
            ..Default::default()
        }
    }

    /// Set to render right now, optimistic flips included
    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.set.contains(id)
    }

    pub fn is_pending(&self, id: RecipeId) -> bool {
        self.pending.contains(&id)
    }

    /// Settle counter; capture it when issuing a read and pass it to [`replace`].
    ///
    /// [`replace`]: FavoriteSync::replace
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Replace the set with a backend read issued at epoch `issued_at`.
    ///
    /// Ids still pending, or settled after the read was issued, keep their
    /// local membership; the read cannot have seen those mutations.
    pub fn replace(&mut self, set: FavoriteSet, issued_at: u64) {
        let mut set = set;
        let newer = self
            .settled_at
            .iter()
            .filter(|&(_, &at)| at > issued_at)
            .map(|(&id, _)| id);
        for id in self.pending.iter().copied().chain(newer) {
            set.set_membership(id, self.set.contains(id));
        }
        self.set = set;
    }

    /// Flip `id` locally and lock it until the ticket is settled.
    pub fn begin(&mut self, id: RecipeId) -> Result<PendingToggle, SyncError> {
        if self.pending.contains(&id) {
            log::warn!("[FAV] Ignoring toggle for recipe {}: one is already in flight", id);
            return Err(SyncError::AlreadyPending(id));
        }
        let was_favorite = self.set.contains(id);
        self.set = optimistic_toggle(id, &self.set);
        self.pending.insert(id);
        log::debug!(
            "[FAV] Recipe {} optimistically {}",
            id,
            if was_favorite { "unfavorited" } else { "favorited" }
        );
        Ok(PendingToggle { id, was_favorite })
    }

    /// Resolve a ticket with the remote result.
    ///
    /// Failure restores only the membership of the ticket's id, so toggles
    /// of other ids that settled in between are kept.
    pub fn settle(
        &mut self,
        ticket: PendingToggle,
        outcome: Result<(), ToggleFailure>,
    ) -> Settlement {
        let PendingToggle { id, was_favorite } = ticket;
        self.pending.remove(&id);
        self.epoch += 1;
        self.settled_at.insert(id, self.epoch);
        match outcome {
            Ok(()) => {
                log::debug!("[FAV] Toggle for recipe {} committed", id);
                self.set.set_membership(id, !was_favorite);
                Settlement::Committed {
                    id,
                    favorite: !was_favorite,
                }
            }
            Err(failure) => {
                log::warn!("[FAV] Toggle for recipe {} reverted: {}", id, failure);
                self.set.set_membership(id, was_favorite);
                Settlement::Reverted { id, failure }
            }
        }
    }
}

impl From<FavoriteSet> for FavoriteSync {
    fn from(set: FavoriteSet) -> Self {
        Self::new(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_of(ids: &[RecipeId]) -> FavoriteSync {
        ids.iter().copied().collect::<FavoriteSet>().into()
    }

    fn set_of(ids: &[RecipeId]) -> FavoriteSet {
        ids.iter().copied().collect()
    }

    fn server_error(message: &str) -> ToggleFailure {
        ToggleFailure::RejectedByServer {
            status: 500,
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_unfavorite_commits() {
        let mut sync = sync_of(&[3, 7]);
        let ticket = sync.begin(7).unwrap();
        assert_eq!(sync.set(), &set_of(&[3]));
        assert!(sync.is_pending(7));

        let settlement = sync.settle(ticket, Ok(()));
        assert_eq!(settlement, Settlement::Committed { id: 7, favorite: false });
        assert_eq!(settlement.unfavorited(), Some(7));
        assert_eq!(sync.set(), &set_of(&[3]));
        assert!(!sync.is_pending(7));
    }

    #[test]
    fn test_failed_favorite_reverts_with_server_message() {
        let mut sync = sync_of(&[3]);
        let ticket = sync.begin(9).unwrap();
        assert_eq!(sync.set(), &set_of(&[3, 9]));

        let settlement = sync.settle(ticket, Err(server_error("db error")));
        assert_eq!(sync.set(), &set_of(&[3]));
        let failure = settlement.failure().unwrap();
        assert_eq!(failure.user_message("Failed to favorite recipe"), "db error");
    }

    #[test]
    fn test_network_failure_uses_fallback_message() {
        let failure = ToggleFailure::NetworkFailure("Failed to fetch".to_string());
        assert_eq!(failure.user_message("Failed to favorite recipe"), "Failed to favorite recipe");

        let silent = ToggleFailure::RejectedByServer { status: 502, message: None };
        assert_eq!(silent.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_revert_keeps_other_settled_toggles() {
        let mut sync = sync_of(&[1]);
        let failing = sync.begin(2).unwrap();

        // Unrelated toggles start and commit while 2 is in flight
        let other = sync.begin(1).unwrap();
        sync.settle(other, Ok(()));
        let another = sync.begin(5).unwrap();
        sync.settle(another, Ok(()));

        sync.settle(failing, Err(ToggleFailure::NetworkFailure("offline".into())));
        assert!(!sync.is_favorite(2));
        assert_eq!(sync.set(), &set_of(&[5]));
    }

    #[test]
    fn test_double_toggle_is_rejected_while_pending() {
        let mut sync = sync_of(&[4]);
        let ticket = sync.begin(4).unwrap();
        assert_eq!(sync.begin(4), Err(SyncError::AlreadyPending(4)));
        // Second attempt did not flip anything
        assert!(!sync.is_favorite(4));

        sync.settle(ticket, Ok(()));
        assert!(sync.begin(4).is_ok());
        assert!(sync.is_favorite(4));
    }

    #[test]
    fn test_revert_releases_pending_marker() {
        let mut sync = sync_of(&[]);
        let ticket = sync.begin(6).unwrap();
        sync.settle(ticket, Err(server_error("nope")));
        assert!(!sync.is_pending(6));
        assert!(!sync.is_favorite(6));

        // The id can be toggled again and ends up present exactly once
        let retry = sync.begin(6).unwrap();
        sync.settle(retry, Ok(()));
        assert_eq!(sync.set(), &set_of(&[6]));
        assert_eq!(sync.set().len(), 1);
    }

    #[test]
    fn test_replace_keeps_pending_lock() {
        let mut sync = sync_of(&[1]);
        let ticket = sync.begin(2).unwrap();
        sync.replace(set_of(&[1, 2, 3]), sync.epoch());
        assert!(sync.is_pending(2));
        assert_eq!(ticket.id(), 2);
        assert!(!ticket.was_favorite());
        sync.settle(ticket, Ok(()));
        assert_eq!(sync.set(), &set_of(&[1, 2, 3]));
    }

    #[test]
    fn test_stale_read_does_not_undo_optimistic_flip() {
        let mut sync = sync_of(&[8]);
        let ticket = sync.begin(8).unwrap();
        // Listing fetched before the unfavorite reached the server
        let issued_at = sync.epoch();
        sync.replace(set_of(&[8, 9]), issued_at);
        assert!(!sync.is_favorite(8));
        assert!(sync.is_favorite(9));

        sync.settle(ticket, Ok(()));
        assert_eq!(sync.set(), &set_of(&[9]));
    }

    #[test]
    fn test_read_issued_before_commit_does_not_undo_it() {
        let mut sync = sync_of(&[7]);
        let first = sync.begin(7).unwrap();
        sync.settle(first, Ok(()));

        // Favorites read goes out while 7 is unfavorited
        let issued_at = sync.epoch();
        let stale = set_of(&[]);

        let second = sync.begin(7).unwrap();
        sync.settle(second, Ok(()));
        assert!(sync.is_favorite(7));

        sync.replace(stale, issued_at);
        assert!(sync.is_favorite(7));
    }

    #[test]
    fn test_read_issued_after_commit_is_applied() {
        let mut sync = sync_of(&[1]);
        let ticket = sync.begin(1).unwrap();
        sync.settle(ticket, Ok(()));

        let issued_at = sync.epoch();
        // Another tab favorited 1 and 4 since
        sync.replace(set_of(&[1, 4]), issued_at);
        assert_eq!(sync.set(), &set_of(&[1, 4]));
    }
}
