//! The slice of a game document the access core reads.
//!
//! Only `id`, `status`, and the membership-determining fields are modeled;
//! everything else on the stored record is invisible to access decisions.

use serde::{Deserialize, Serialize};

use crate::domain::status::GameStatus;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::security;

/// Store-issued document id of a user profile.
pub type UserId = String;
/// Store-issued document id of a game.
pub type GameId = String;

/// A seat at the table. Guests are tracked by display name only and carry no
/// auth uid; they never satisfy a membership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    #[serde(default, rename = "authUid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub name: String,
}

/// Access-relevant projection of a game document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// Missing or unrecognized stored status lands on `Unknown`.
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default, rename = "creatorId", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub players: Vec<PlayerRef>,
}

impl GameRecord {
    /// Is `user_id` associated with this game (creator or seated player)?
    pub fn is_member(&self, user_id: &str) -> bool {
        if user_id.is_empty() {
            return false;
        }
        self.created_by.as_deref() == Some(user_id)
            || self
                .players
                .iter()
                .any(|p| p.user_id.as_deref() == Some(user_id))
    }

    /// Advance the lifecycle status by one forward step.
    ///
    /// Backward moves are conflicts (`StatusRegression`); skipped steps and
    /// anything touching `Unknown` are validation errors. The record is left
    /// untouched on error.
    pub fn apply_transition(&mut self, next: GameStatus) -> Result<(), DomainError> {
        if self.status.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        if self.status.is_regression_to(next) {
            security::status_regression_blocked(&self.id, self.status, next);
            return Err(DomainError::conflict(
                ConflictKind::StatusRegression,
                format!("cannot move game back from {} to {}", self.status, next),
            ));
        }

        Err(DomainError::validation(format!(
            "no transition from {} to {}",
            self.status, next
        )))
    }
}
