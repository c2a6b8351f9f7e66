//! Vertical motion of the actor in scaled units

use super::fixed::Fixed;
use super::state::Actor;
use crate::tuning::Tuning;

/// Advance the actor by one tick
///
/// A jump replaces the velocity before gravity is applied. Velocity is
/// clamped to `±max_speed`. The position stops at the top edge but not at
/// the bottom; falling out is a collision.
pub fn integrate(actor: Actor, jump: bool, tuning: &Tuning) -> Actor {
    let mut vel = if jump { tuning.jump_velocity } else { actor.vel };
    vel += tuning.gravity;
    let vel = vel.clamp(-tuning.max_speed, tuning.max_speed);

    let y = (actor.y + vel).max(Fixed::ZERO);
    Actor { y, vel }
}
