//! Game lifecycle resolver: which screen, if any, a caller lands on for a
//! given game.

use crate::access::capabilities::Capabilities;
use crate::domain::game::{GameId, GameRecord};
use crate::domain::session::Session;
use crate::domain::status::GameStatus;

/// Screen granted as the outcome of an access decision. The navigation
/// layer turns the concrete variants into redirects via [`route`].
///
/// [`route`]: NavigationTarget::route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Read-only summary/history of a finished game.
    GameSummary(GameId),
    /// Full-interaction screen of a game in progress.
    ActiveGame(GameId),
    /// Read-only live view of a game in progress.
    SpectateGame(GameId),
    /// No access; the UI renders a blocked state instead of navigating.
    Denied,
}

impl NavigationTarget {
    /// Route path for the navigation layer; `None` for a denial.
    pub fn route(&self) -> Option<String> {
        match self {
            NavigationTarget::GameSummary(id) => Some(format!("/games/{id}/summary")),
            NavigationTarget::ActiveGame(id) => Some(format!("/games/{id}")),
            NavigationTarget::SpectateGame(id) => Some(format!("/games/{id}/spectate")),
            NavigationTarget::Denied => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, NavigationTarget::Denied)
    }
}

/// Resolve the screen for a game given its status and the caller's derived
/// capabilities. Precedence, first match wins:
///
/// 1. Completed games always resolve to the summary view, whatever the
///    capability flags claim — completeness is a terminal fact, and a stale
///    continue flag must not re-enter finished play.
/// 2. A continue grant wins over view-only (the stronger capability).
/// 3. View-only falls back to the spectate screen.
/// 4. Otherwise the caller is denied.
///
/// An unrecognized status grants nothing, regardless of flags.
pub fn determine_game_screen(
    status: GameStatus,
    capabilities: Capabilities,
    game_id: &GameId,
) -> NavigationTarget {
    match status {
        GameStatus::Completed => NavigationTarget::GameSummary(game_id.clone()),
        GameStatus::Unknown => NavigationTarget::Denied,
        GameStatus::Setup | GameStatus::Active => {
            if capabilities.can_continue {
                NavigationTarget::ActiveGame(game_id.clone())
            } else if capabilities.can_view_only {
                NavigationTarget::SpectateGame(game_id.clone())
            } else {
                NavigationTarget::Denied
            }
        }
    }
}

/// Derive the caller's capabilities for `game` and resolve in one call.
/// This is the entry point route guards use.
pub fn resolve_game_screen(session: &Session, game: &GameRecord) -> NavigationTarget {
    determine_game_screen(game.status, Capabilities::for_game(session, game), &game.id)
}
