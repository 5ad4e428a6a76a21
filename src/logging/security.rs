//! Security-relevant structured log events.
//!
//! Ids only; never log emails or display names.

use tracing::warn;

use crate::domain::role::Role;
use crate::domain::status::GameStatus;

/// Log a blocked unauthenticated caller.
pub fn unauthenticated_blocked() {
    warn!(
        event = "SECURITY_UNAUTHENTICATED_BLOCKED",
        "Unauthenticated caller blocked"
    );
}

/// Log a caller falling short of a required minimum role.
pub fn role_check_failed(user_id: &str, required: Role, actual: Role) {
    warn!(
        event = "SECURITY_ROLE_CHECK_FAILED",
        user_id,
        required = %required,
        actual = %actual,
        "Role below required minimum"
    );
}

/// Log a game route request for which no screen could be granted.
pub fn game_access_denied(user_id: &str, game_id: &str) {
    warn!(
        event = "SECURITY_GAME_ACCESS_DENIED",
        user_id,
        game_id,
        "No screen granted for game"
    );
}

/// Log a rejected backward lifecycle transition.
pub fn status_regression_blocked(game_id: &str, from: GameStatus, to: GameStatus) {
    warn!(
        event = "SECURITY_STATUS_REGRESSION_BLOCKED",
        game_id,
        from = %from,
        to = %to,
        "Backward lifecycle transition rejected"
    );
}
