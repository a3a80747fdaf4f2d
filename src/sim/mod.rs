//! Simulation module
//!
//! All gameplay logic lives here, with no rendering or platform
//! dependencies: the host feeds in elapsed time and input flags each
//! frame and reads entity geometry back out.

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use state::{Ball, Block, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};
