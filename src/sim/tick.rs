//! Fixed timestep simulation tick
//!
//! `update` is the non-blocking poll the outer loop calls as often as it
//! likes; it runs at most one `tick` per call and only once a full tick
//! period has elapsed.

use super::collision;
use super::physics;
use super::state::{GameState, GameWorld};
use crate::platform::{Millis, RandomSource};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Button went down since the previous tick
    pub pressed: bool,
}

/// Run one tick if one is due. Returns whether it ran.
pub fn update<R: RandomSource>(world: &mut GameWorld<R>, now: Millis, level: bool) -> bool {
    if let Some(last) = world.last_tick {
        if now.saturating_sub(last) < world.tuning.tick_ms {
            return false;
        }
    }
    world.last_tick = Some(now);

    let input = TickInput {
        pressed: world.button.sample(level),
    };
    tick(world, &input, now);
    true
}

/// Advance the game by one fixed tick
pub fn tick<R: RandomSource>(world: &mut GameWorld<R>, input: &TickInput, now: Millis) {
    world.ticks += 1;

    match world.state {
        GameState::StartScreen => {
            if input.pressed {
                world.start_run(now);
            }
        }

        GameState::Playing => match world.run.over_at {
            Some(over_at) => {
                let since = now.saturating_sub(over_at);
                if input.pressed && since >= world.tuning.game_over_cooldown_ms {
                    world.start_run(now);
                } else if since >= world.tuning.game_over_timeout_ms {
                    world.enter(GameState::Highscore, now);
                }
            }
            None => play(world, input, now),
        },

        GameState::Highscore => {
            if now.saturating_sub(world.blink_toggled_at) >= world.tuning.blink_ms {
                world.blink_visible = !world.blink_visible;
                world.blink_toggled_at = now;
            }
            if input.pressed || world.time_in_state(now) >= world.tuning.highscore_timeout_ms {
                world.enter(GameState::StartScreen, now);
            }
        }
    }
}

fn play<R: RandomSource>(world: &mut GameWorld<R>, input: &TickInput, now: Millis) {
    world.actor = physics::integrate(world.actor, input.pressed, &world.tuning);

    let recycled = world
        .field
        .advance(world.run.score, &world.tuning, &mut world.rng);
    world.run.score += recycled;

    log::trace!(
        "tick {} y={} vel={} score={}",
        world.ticks,
        world.actor.y,
        world.actor.vel,
        world.run.score
    );

    if let Some(hit) = collision::detect(&world.actor, &world.field, &world.tuning) {
        log::debug!("Collision: {:?}", hit);
        world.end_run(now);
    }
}
