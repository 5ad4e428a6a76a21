//! Route-guard surface: the decisions protected routes and permission
//! guards act on. The guard never navigates itself; it tells the caller
//! to render, redirect, or block.

use crate::access::resolver::{resolve_game_screen, NavigationTarget};
use crate::domain::game::GameRecord;
use crate::domain::role::Role;
use crate::domain::session::Session;
use crate::logging::security;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested screen.
    Allow,
    /// Send the caller to the screen they are actually granted.
    Redirect(NavigationTarget),
    /// Render the unauthorized/blocked state.
    Block,
}

/// The game screen a deep link or banner asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedGameScreen {
    ActiveGame,
    Spectate,
    Summary,
}

/// Gate for routes that merely require a signed-in caller.
pub fn require_authenticated(session: &Session) -> GuardDecision {
    if session.authenticated {
        GuardDecision::Allow
    } else {
        security::unauthenticated_blocked();
        GuardDecision::Block
    }
}

/// Gate for routes behind a minimum role.
pub fn require_minimum_role(session: &Session, minimum: Role) -> GuardDecision {
    if !session.authenticated {
        security::unauthenticated_blocked();
        return GuardDecision::Block;
    }
    if session.role.has_minimum(minimum) {
        GuardDecision::Allow
    } else {
        security::role_check_failed(&session.user_id, minimum, session.role);
        GuardDecision::Block
    }
}

/// Gate for game deep links: compare the requested screen against what the
/// resolver grants. An exact match renders; a different grant redirects
/// there; no grant blocks.
pub fn guard_game_route(
    session: &Session,
    game: &GameRecord,
    requested: RequestedGameScreen,
) -> GuardDecision {
    let granted = resolve_game_screen(session, game);

    if granted.is_denied() {
        security::game_access_denied(&session.user_id, &game.id);
        return GuardDecision::Block;
    }

    if requested_matches(requested, &granted) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(granted)
    }
}

fn requested_matches(requested: RequestedGameScreen, granted: &NavigationTarget) -> bool {
    matches!(
        (requested, granted),
        (RequestedGameScreen::ActiveGame, NavigationTarget::ActiveGame(_))
            | (RequestedGameScreen::Spectate, NavigationTarget::SpectateGame(_))
            | (RequestedGameScreen::Summary, NavigationTarget::GameSummary(_))
    )
}
