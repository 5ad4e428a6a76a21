//! Access layer: capability predicates, the game-screen resolver, and the
//! route-guard surface the navigation layer consults.
//!
//! Everything here is pure, synchronous, and total. Denial is a return
//! value, never an error, and every under-specified input fails closed.

pub mod capabilities;
pub mod guard;
pub mod resolver;

#[cfg(test)]
mod tests_capabilities;

// Re-exports for ergonomics
pub use capabilities::{can_continue_game, can_view_game_read_only, Capabilities};
pub use guard::{guard_game_route, GuardDecision, RequestedGameScreen};
pub use resolver::{determine_game_screen, resolve_game_screen, NavigationTarget};
