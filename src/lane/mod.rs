//! Lane battle - two bases, one lane, units walking at each other
//!
//! Friendly units are bought by the player; hostile units arrive on a timer.
//! Units that meet fight a duel to the finish, units that reach the far base
//! damage it, and the match ends when a base falls.

pub mod base;
pub mod bounds;
pub mod constants;
pub mod events;
pub mod execution;
pub mod projectile;
pub mod resolution;
pub mod units;

// Re-exports for convenient access
pub use base::Base;
pub use bounds::{check_bound, BoundCheck};
pub use constants::*;
pub use events::{MatchEvent, MatchEventKind, MatchEventLog};
pub use execution::{MatchOutcome, MatchPhase, MatchState, MatchStats};
pub use projectile::Projectile;
pub use resolution::{resolve_duel, DuelResult};
pub use units::Unit;
