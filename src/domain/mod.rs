//! Domain layer: pure types the access decisions are computed over.

pub mod game;
pub mod role;
pub mod session;
pub mod status;


// Re-exports for ergonomics
pub use game::{GameId, GameRecord, PlayerRef, UserId};
pub use role::Role;
pub use session::Session;
pub use status::{derive_status_transitions, GameStatus, StatusTransition};
