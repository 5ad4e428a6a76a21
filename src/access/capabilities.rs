//! Capability predicates: per-(caller, game) booleans derived from role and
//! membership at check time. Nothing here is persisted; every navigation
//! decision recomputes from scratch.

use crate::domain::game::GameRecord;
use crate::domain::role::Role;
use crate::domain::session::Session;
use crate::domain::status::GameStatus;

/// The derived capability triple the resolver consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_continue: bool,
    pub can_view_only: bool,
    pub can_manage: bool,
}

impl Capabilities {
    pub fn for_game(session: &Session, game: &GameRecord) -> Self {
        Self {
            can_continue: can_continue_game(session, game),
            can_view_only: can_view_game_read_only(session),
            can_manage: can_manage_game(session, game),
        }
    }
}

/// Game is still playable (setup or active).
fn game_in_play(game: &GameRecord) -> bool {
    matches!(game.status, GameStatus::Setup | GameStatus::Active)
}

/// May the caller act in this game?
///
/// Admins may continue any game still in play. Below that, the caller must
/// clear `Super` and be associated with the game (creator or seated player).
/// Completed and unknown-status games are never continuable.
pub fn can_continue_game(session: &Session, game: &GameRecord) -> bool {
    if !game_in_play(game) {
        return false;
    }
    if session.has_minimum_role(Role::Admin) {
        return true;
    }
    session.has_minimum_role(Role::Super) && game.is_member(&session.user_id)
}

/// May the caller watch a game read-only? Any signed-in user may; this is
/// the permissive fallback for games the caller cannot act in.
pub fn can_view_game_read_only(session: &Session) -> bool {
    session.has_minimum_role(Role::Regular)
}

/// May the caller manage (rename, reorder, correct) this game?
pub fn can_manage_game(session: &Session, game: &GameRecord) -> bool {
    session.has_minimum_role(Role::Admin)
        || (session.has_minimum_role(Role::Super) && game.is_member(&session.user_id))
}

/// Deleting a game that is still in play destroys live state; admin only.
pub fn can_delete_active_game(session: &Session) -> bool {
    session.has_minimum_role(Role::Admin)
}

/// Deleting finished history; admin only.
pub fn can_delete_completed_game(session: &Session) -> bool {
    session.has_minimum_role(Role::Admin)
}

/// Seating another player, only while the game can still take one.
pub fn can_add_player_to_game(session: &Session, game: &GameRecord) -> bool {
    game_in_play(game) && can_manage_game(session, game)
}

/// Deleting users, groups, or other top-level entities; admin only.
pub fn can_delete_entity(session: &Session) -> bool {
    session.has_minimum_role(Role::Admin)
}

pub fn can_start_new_game(session: &Session) -> bool {
    session.has_minimum_role(Role::Super)
}

pub fn can_access_dashboard(session: &Session) -> bool {
    session.has_minimum_role(Role::Admin)
}
