//! Chase/retreat AI
//!
//! A reactive classifier: every tick the behavior is recomputed from the
//! bot's health and its distance to the target. Nothing is latched.
//!
//! - Hurt and cornered (`health < RETREAT_HEALTH_THRESHOLD` and closer than
//!   `RETREAT_DISTANCE`): back away.
//! - Otherwise chase, but only close in while farther than
//!   `CHASE_MIN_DISTANCE`; inside that range hold position.
//! - Fire whenever the target is within `FIRE_DISTANCE`.

use crate::angle_between;
use crate::consts::*;

use super::combatant::{AiBehavior, Combatant};
use super::controller::{Aim, Decision, TargetView};

/// Classify the bot against a target at `distance`
pub fn classify(health: i32, distance: f32) -> AiBehavior {
    if health < RETREAT_HEALTH_THRESHOLD && distance < RETREAT_DISTANCE {
        AiBehavior::Retreat
    } else {
        AiBehavior::Chase
    }
}

/// Decide this tick's action for an AI bot.
///
/// A dead target freezes the bot: no movement, no facing change, no shot.
pub fn decide(me: &Combatant, target: &TargetView) -> Decision {
    if !target.alive {
        return Decision::idle();
    }

    let to_target = target.pos - me.pos;
    let distance = to_target.length();
    let dir = to_target.normalize_or_zero();
    let behavior = classify(me.health, distance);

    let movement = match behavior {
        AiBehavior::Retreat => -dir * me.speed,
        AiBehavior::Chase if distance > CHASE_MIN_DISTANCE => dir * me.speed,
        AiBehavior::Chase => glam::Vec2::ZERO,
    };

    Decision {
        movement,
        aim: Aim::Angle(angle_between(me.pos, target.pos)),
        fire: distance < FIRE_DISTANCE,
        behavior: Some(behavior),
    }
}
