//! Combatants: the player bot and the AI bots
//!
//! A single data type serves both sides. Which controller drives it is
//! recorded in [`Role`]; the combatant itself never decides what to do.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{clamp_to_arena, heading_vec};

use super::controller::{Aim, Decision};
use super::projectile::Projectile;

/// Stable identity of a combatant within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

/// AI movement classification, re-evaluated every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiBehavior {
    #[default]
    Chase,
    Retreat,
}

/// Which side a combatant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    /// AI bot with its last behavior classification
    Ai(AiBehavior),
}

/// A bot in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub role: Role,
    pub pos: Vec2,
    /// Facing angle (radians)
    pub angle: f32,
    /// Body diameter
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    /// Movement per tick
    pub speed: f32,
    /// Clock value of the last successful shot (0 at spawn)
    pub last_fire_at: u64,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
}

impl Combatant {
    fn new(id: CombatantId, role: Role, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            role,
            pos: clamp_to_arena(pos, COMBATANT_SIZE),
            angle: 0.0,
            size: COMBATANT_SIZE,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            speed,
            last_fire_at: 0,
            projectiles: Vec::new(),
        }
    }

    pub fn player(id: CombatantId, pos: Vec2) -> Self {
        Self::new(id, Role::Player, pos, PLAYER_SPEED)
    }

    pub fn ai(id: CombatantId, pos: Vec2) -> Self {
        Self::new(id, Role::Ai(AiBehavior::default()), pos, AI_SPEED)
    }

    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    /// Current AI classification (None for the player)
    pub fn behavior(&self) -> Option<AiBehavior> {
        match self.role {
            Role::Ai(behavior) => Some(behavior),
            Role::Player => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract health, never going below zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Whether the fire cooldown has elapsed at `now`
    pub fn can_fire(&self, now: u64) -> bool {
        now.saturating_sub(self.last_fire_at) >= FIRE_COOLDOWN
    }

    /// Fire a projectile from the body edge along the facing angle.
    ///
    /// Returns false (and does nothing) while the cooldown is running.
    pub fn try_fire(&mut self, now: u64) -> bool {
        if !self.can_fire(now) {
            return false;
        }
        let muzzle = self.pos + heading_vec(self.angle) * (self.size / 2.0);
        self.projectiles.push(Projectile::new(muzzle, self.angle, self.id));
        self.last_fire_at = now;
        true
    }

    /// Advance owned projectiles and drop the ones that went inactive
    pub fn advance_projectiles(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.projectiles.retain(|p| p.active);
    }

    /// Translate, then re-clamp into the arena
    pub fn move_by(&mut self, delta: Vec2) {
        self.pos = clamp_to_arena(self.pos + delta, self.size);
    }

    /// Apply a controller decision for this tick.
    ///
    /// Movement and clamping happen first, then facing, then the shot, so a
    /// point aim is measured from the post-move position.
    /// Returns true if a projectile was fired.
    pub fn apply(&mut self, decision: &Decision, now: u64) -> bool {
        if let Some(behavior) = decision.behavior {
            if let Role::Ai(current) = &mut self.role {
                *current = behavior;
            }
        }
        self.move_by(decision.movement);
        match decision.aim {
            Aim::Hold => {}
            Aim::Angle(angle) => self.angle = angle,
            Aim::Toward(point) => self.angle = crate::angle_between(self.pos, point),
        }
        decision.fire && self.try_fire(now)
    }
}
