//! Player input mapping
//!
//! Direction flags translate the bot axis by axis; the pointer sets facing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::controller::{Aim, Decision};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Fire button or key held
    pub fire: bool,
}

impl PlayerIntent {
    /// Stand still, aim at `pointer`
    pub fn aim_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }
}

/// Map an intent onto a decision for the player's combatant.
///
/// Each active flag contributes a full `speed` step on its axis, so diagonal
/// movement is faster than axial movement.
pub fn decide(me: &Combatant, intent: &PlayerIntent) -> Decision {
    let mut movement = Vec2::ZERO;
    if intent.up {
        movement.y -= me.speed;
    }
    if intent.down {
        movement.y += me.speed;
    }
    if intent.left {
        movement.x -= me.speed;
    }
    if intent.right {
        movement.x += me.speed;
    }

    Decision {
        movement,
        aim: Aim::Toward(intent.pointer),
        fire: intent.fire,
        behavior: None,
    }
}
