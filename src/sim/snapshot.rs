//! Read-only view of the arena for presentation
//!
//! Everything a renderer or HUD needs, detached from the live state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combatant::{AiBehavior, Combatant, CombatantId};
use super::state::{Arena, MatchOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: CombatantId,
    pub is_player: bool,
    pub pos: Vec2,
    pub angle: f32,
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    /// None for the player
    pub behavior: Option<AiBehavior>,
    pub projectiles: Vec<Vec2>,
}

impl From<&Combatant> for CombatantView {
    fn from(c: &Combatant) -> Self {
        Self {
            id: c.id,
            is_player: c.is_player(),
            pos: c.pos,
            angle: c.angle,
            size: c.size,
            health: c.health,
            max_health: c.max_health,
            alive: c.is_alive(),
            behavior: c.behavior(),
            projectiles: c.projectiles.iter().map(|p| p.pos).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub match_number: u32,
    pub tick: u64,
    pub outcome: MatchOutcome,
    /// Player first, then AI bots
    pub combatants: Vec<CombatantView>,
    pub player_health: i32,
    pub enemies_alive: usize,
    pub enemies_total: usize,
}

impl Arena {
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            match_number: self.matches,
            tick: self.time_ticks,
            outcome: self.outcome,
            combatants: self.combatants.iter().map(CombatantView::from).collect(),
            player_health: self.player().health,
            enemies_alive: self.enemies_alive(),
            enemies_total: self.enemies().len(),
        }
    }
}
