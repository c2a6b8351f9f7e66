//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Scaled-integer arithmetic only
//! - Randomness only through the injected `RandomSource`
//! - No rendering code

pub mod collision;
pub mod fixed;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Collision, Hitbox, actor_hitbox, detect};
pub use fixed::Fixed;
pub use obstacles::{OBSTACLE_COUNT, Obstacle, ObstacleField, scroll_speed};
pub use physics::integrate;
pub use state::{Actor, GameState, GameWorld, Run};
pub use tick::{TickInput, tick, update};
