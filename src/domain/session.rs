//! Explicit caller identity.
//!
//! Built once by the (external) auth layer and passed by value into every
//! predicate, so decisions stay testable without ambient application state.

use crate::domain::game::UserId;
use crate::domain::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub role: Role,
    pub authenticated: bool,
}

impl Session {
    /// Session for a signed-in user.
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            authenticated: true,
        }
    }

    /// Session for a caller that is not signed in. Lowest tier, denied
    /// everything that requires authentication.
    pub fn anonymous() -> Self {
        Self {
            user_id: UserId::new(),
            role: Role::Regular,
            authenticated: false,
        }
    }

    /// Role check that also requires the session to be authenticated.
    /// Unauthenticated callers clear no minimum, `Regular` included.
    pub fn has_minimum_role(&self, minimum: Role) -> bool {
        self.authenticated && self.role.has_minimum(minimum)
    }
}
