//! Collision detection between the actor, the pipes and the screen bottom
//!
//! The actor's hitbox is its sprite box shrunk by the forgiveness margin on
//! every side, so grazing a pipe corner is not fatal.

use super::fixed::Fixed;
use super::obstacles::{Obstacle, ObstacleField};
use super::state::Actor;
use crate::tuning::Tuning;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Hit the pipe in this slot
    Obstacle(usize),
    /// Fell past the bottom edge
    OutOfBounds,
}

/// Axis-aligned box in scaled units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub left: Fixed,
    pub right: Fixed,
    pub top: Fixed,
    pub bottom: Fixed,
}

/// The actor's forgiving hitbox
pub fn actor_hitbox(actor: &Actor, tuning: &Tuning) -> Hitbox {
    let inset = tuning.forgiveness_margin;
    Hitbox {
        left: tuning.actor_x + inset,
        right: tuning.actor_x + tuning.actor_size - inset,
        top: actor.y + inset,
        bottom: actor.y + tuning.actor_size - inset,
    }
}

/// Does the hitbox touch either segment of this pipe?
///
/// Only a horizontal overlap can collide; then the hitbox must lie entirely
/// within the gap (edges inclusive).
pub fn hits_obstacle(hitbox: &Hitbox, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let overlaps_x = obstacle.x < hitbox.right && obstacle.right_edge(tuning) > hitbox.left;
    if !overlaps_x {
        return false;
    }
    hitbox.top < obstacle.gap_start || hitbox.bottom > obstacle.gap_end(tuning)
}

/// Fell off the bottom of the screen
pub fn out_of_bounds(actor: &Actor, tuning: &Tuning) -> bool {
    actor.y >= tuning.screen_height
}

/// First collision this tick, if any. Pipes are checked in slot order.
pub fn detect(actor: &Actor, field: &ObstacleField, tuning: &Tuning) -> Option<Collision> {
    if out_of_bounds(actor, tuning) {
        return Some(Collision::OutOfBounds);
    }
    let hitbox = actor_hitbox(actor, tuning);
    field
        .obstacles()
        .iter()
        .position(|o| hits_obstacle(&hitbox, o, tuning))
        .map(Collision::Obstacle)
}
