//! Flappy Core - fixed-tick Flappy Bird simulation for small monochrome displays
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, state machine)
//! - `highscores`: Volatile top-5 ranking
//! - `renderer`: Display seam (scaled units -> pixels) and a 1-bpp framebuffer
//! - `platform`: Clock, input and random-source collaborators
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (language)

pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::Error;
pub use highscores::HighScores;
pub use settings::{Language, Settings};
pub use tuning::Tuning;

use platform::{ActivationInput, Clock, RandomSource};
use renderer::Display;
use sim::GameWorld;

/// Game configuration constants
///
/// Lengths are given in pixels and converted to scaled units by `Tuning::default`.
/// Velocities and accelerations are already in scaled units per tick.
pub mod consts {
    /// Scale factor between scaled units and pixels
    pub const SCALE: i32 = 10;

    /// Fixed logical tick period (~33 Hz)
    pub const TICK_MS: u64 = 30;

    /// Display dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Actor sprite placement (pixels)
    pub const ACTOR_X: i32 = 20;
    pub const ACTOR_SIZE: i32 = 8;

    /// Physics (scaled units per tick)
    pub const GRAVITY: i32 = 5;
    pub const JUMP_VELOCITY: i32 = -30;
    /// Symmetric velocity clamp
    pub const MAX_SPEED: i32 = 50;

    /// Obstacle geometry (pixels)
    pub const OBSTACLE_WIDTH: i32 = 10;
    pub const GAP_SIZE: i32 = 24;
    pub const GAP_MARGIN: i32 = 6;
    pub const OBSTACLE_SPACING: i32 = 50;
    pub const OBSTACLE_JITTER: i32 = 5;
    /// Scroll speed at score 0 (scaled units per tick)
    pub const BASE_SPEED: i32 = 10;

    /// Hitbox inset (scaled units)
    pub const FORGIVENESS_MARGIN: i32 = 2;

    /// Restart input is ignored this long after a collision
    pub const GAME_OVER_COOLDOWN_MS: u64 = 500;
    /// Idle time after a collision before the highscore screen appears
    pub const GAME_OVER_TIMEOUT_MS: u64 = 3_000;
    /// Highscore screen returns to the start screen after this long
    pub const HIGHSCORE_TIMEOUT_MS: u64 = 5_000;
    /// Blink half-period of the newest highscore entry
    pub const BLINK_MS: u64 = 250;

    /// Table shown before anyone has played
    pub const DEFAULT_HIGHSCORES: [u32; 5] = [5, 4, 3, 2, 1];
}

/// Poll the collaborators once and, if a tick was due, redraw the display.
///
/// Returns `Ok(true)` when a tick ran. Cheap to call in a tight loop.
pub fn poll_frame<R, C, I, D>(
    world: &mut GameWorld<R>,
    settings: &Settings,
    clock: &C,
    input: &mut I,
    display: &mut D,
) -> Result<bool, Error>
where
    R: RandomSource,
    C: Clock,
    I: ActivationInput,
    D: Display,
{
    let now = clock.now_ms();
    let level = input.is_asserted();
    if !sim::update(world, now, level) {
        return Ok(false);
    }
    renderer::draw_world(world, settings, display)?;
    Ok(true)
}
