//! Arena combat simulation
//!
//! All gameplay logic lives here. This module has no rendering, input or
//! timing dependencies:
//! - One call to `tick` per fixed step
//! - The clock value is supplied by the caller
//! - Seeded RNG only (spawn positions)
//! - Stable iteration order (player first, then AI bots by spawn order)

pub mod ai;
pub mod autopilot;
pub mod collision;
pub mod combatant;
pub mod controller;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use combatant::{AiBehavior, Combatant, CombatantId, Role};
pub use controller::{Aim, Controller, Decision, TargetView};
pub use player::PlayerIntent;
pub use projectile::Projectile;
pub use snapshot::{ArenaSnapshot, CombatantView};
pub use state::{Arena, Command, CommandResult, GameEvent, MatchOutcome};
pub use tick::tick;
