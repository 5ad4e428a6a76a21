use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game record.
///
/// The chain is forward-only: `Setup → Active → Completed`. A completed game
/// is immutable history and never re-enters play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Being configured; not yet started.
    Setup,
    /// In progress, accepting actions.
    Active,
    /// Finished; viewable history only.
    Completed,
    /// Any stored value this version does not recognize. Grants nothing and
    /// participates in no transition.
    Unknown,
}

impl GameStatus {
    /// Parse a stored status string. Anything unrecognized lands on
    /// `Unknown` — never guessed as active.
    pub fn parse_lossy(value: &str) -> GameStatus {
        match value {
            "setup" => GameStatus::Setup,
            "active" => GameStatus::Active,
            "completed" => GameStatus::Completed,
            _ => GameStatus::Unknown,
        }
    }
    /// Position in the forward-only chain; `None` for `Unknown`.
    fn rank(self) -> Option<u8> {
        match self {
            GameStatus::Setup => Some(0),
            GameStatus::Active => Some(1),
            GameStatus::Completed => Some(2),
            GameStatus::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Setup => "setup",
            GameStatus::Active => "active",
            GameStatus::Completed => "completed",
            GameStatus::Unknown => "unknown",
        }
    }

    pub fn is_completed(self) -> bool {
        self == GameStatus::Completed
    }

    /// True when `next` is the immediate forward step in the chain.
    /// `Unknown` can neither be left nor entered.
    pub fn can_transition_to(self, next: GameStatus) -> bool {
        match (self.rank(), next.rank()) {
            (Some(from), Some(to)) => to == from + 1,
            _ => false,
        }
    }

    /// True when `next` would move backwards in the chain. Distinguished from
    /// merely invalid moves so callers can spot resume-a-finished-game bugs.
    pub fn is_regression_to(self, next: GameStatus) -> bool {
        match (self.rank(), next.rank()) {
            (Some(from), Some(to)) => to < from,
            _ => false,
        }
    }
}

impl Default for GameStatus {
    /// A record with a missing or unreadable status grants nothing.
    fn default() -> Self {
        GameStatus::Unknown
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Serialize for GameStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(GameStatus::parse_lossy(&value))
    }
}

/// Edge-triggered lifecycle events, derived by diffing two observed statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// Game moved from Setup into play.
    GameStarted,
    /// Game reached Completed.
    GameEnded,
}

/// Derive lifecycle events from a before/after pair of observed statuses.
///
/// Observational only: the inputs are two store snapshots, which may have
/// skipped intermediate states between reads.
pub fn derive_status_transitions(
    before: GameStatus,
    after: GameStatus,
) -> Vec<StatusTransition> {
    let mut transitions = Vec::new();

    if before == GameStatus::Setup && after == GameStatus::Active {
        transitions.push(StatusTransition::GameStarted);
    }

    if before != GameStatus::Completed && after == GameStatus::Completed {
        transitions.push(StatusTransition::GameEnded);
    }

    transitions
}
