use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A user's privilege tier.
///
/// Declaration order defines the hierarchy (`Regular < Super < Admin`), so
/// the derived `Ord` is the single source of truth for every minimum-role
/// check. Assigned by admin tooling at the user profile; never self-mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Baseline tier every signed-in user holds.
    Regular,
    /// May start games and act in games they belong to.
    Super,
    /// Full administrative access, including the dashboard.
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Regular, Role::Super, Role::Admin];

    /// Canonical lowercase string stored on the user profile document.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Super => "super",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored role string, degrading to `Regular` for anything
    /// unrecognized. Profiles written by older clients or hand-edited in the
    /// store must never gain privilege from a typo.
    pub fn parse_lossy(value: &str) -> Role {
        match value {
            "regular" => Role::Regular,
            "super" => Role::Super,
            "admin" => Role::Admin,
            _ => Role::Regular,
        }
    }

    /// Does this role meet `minimum`?
    ///
    /// `minimum == Regular` is met by every role; `minimum == Admin` only by
    /// `Admin`.
    pub fn has_minimum(self, minimum: Role) -> bool {
        self >= minimum
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Regular
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse_lossy(&value))
    }
}
