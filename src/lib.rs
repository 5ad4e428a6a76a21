#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod access;
pub mod domain;
pub mod errors;
pub mod logging;


// Re-exports for public API
pub use access::capabilities::{
    can_access_dashboard, can_add_player_to_game, can_continue_game, can_delete_active_game,
    can_delete_completed_game, can_delete_entity, can_manage_game, can_start_new_game,
    can_view_game_read_only, Capabilities,
};
pub use access::guard::{
    guard_game_route, require_authenticated, require_minimum_role, GuardDecision,
    RequestedGameScreen,
};
pub use access::resolver::{determine_game_screen, resolve_game_screen, NavigationTarget};
pub use domain::game::{GameId, GameRecord, PlayerRef, UserId};
pub use domain::role::Role;
pub use domain::session::Session;
pub use domain::status::{derive_status_transitions, GameStatus, StatusTransition};
pub use errors::domain::{ConflictKind, DomainError};

// Prelude for test convenience
pub mod prelude {
    pub use super::access::capabilities::*;
    pub use super::access::guard::*;
    pub use super::access::resolver::*;
    pub use super::domain::game::*;
    pub use super::domain::role::Role;
    pub use super::domain::session::Session;
    pub use super::domain::status::*;
    pub use super::errors::domain::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
