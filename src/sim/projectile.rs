//! Straight-line projectiles
//!
//! A projectile moves a fixed distance along its heading every tick and dies
//! the moment it leaves the arena or hits a combatant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{heading_vec, in_arena};

use super::combatant::CombatantId;

/// A projectile fired by a combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Heading (radians)
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    /// Combatant that fired it
    pub owner: CombatantId,
    /// Cleared exactly once: on leaving the arena or on impact
    pub active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32, owner: CombatantId) -> Self {
        Self {
            pos,
            angle,
            speed: PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
            owner,
            active: true,
        }
    }

    /// Move one tick along the heading, deactivating once outside the arena
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.pos += heading_vec(self.angle) * self.speed;
        if !in_arena(self.pos) {
            self.active = false;
        }
    }

    /// Mark as spent (impact)
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
