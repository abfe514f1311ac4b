//! Controller decisions
//!
//! Each tick a controller looks at the world and produces a [`Decision`] for
//! the combatant it drives. There are two controllers: the player mapping
//! (`sim::player`) and the chase/retreat AI (`sim::ai`).

use glam::Vec2;

use super::ai;
use super::combatant::{AiBehavior, Combatant};
use super::player::{self, PlayerIntent};

/// How the facing angle changes this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// Keep the current facing
    Hold,
    /// Face a fixed angle (radians)
    Angle(f32),
    /// Face a point, measured from the position after movement
    Toward(Vec2),
}

/// One tick's worth of action for a combatant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Translation applied before clamping
    pub movement: Vec2,
    pub aim: Aim,
    /// Attempt to fire (subject to cooldown)
    pub fire: bool,
    /// New AI classification, if the controller produced one
    pub behavior: Option<AiBehavior>,
}

impl Decision {
    /// Do nothing this tick
    pub fn idle() -> Self {
        Self {
            movement: Vec2::ZERO,
            aim: Aim::Hold,
            fire: false,
            behavior: None,
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::idle()
    }
}

/// What a target looks like to the AI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub pos: Vec2,
    pub alive: bool,
}

impl From<&Combatant> for TargetView {
    fn from(c: &Combatant) -> Self {
        Self {
            pos: c.pos,
            alive: c.is_alive(),
        }
    }
}

/// The two ways a combatant can be driven
#[derive(Debug, Clone, Copy)]
pub enum Controller<'a> {
    Player(&'a PlayerIntent),
    Ai(TargetView),
}

impl Controller<'_> {
    pub fn decide(&self, me: &Combatant) -> Decision {
        match self {
            Controller::Player(intent) => player::decide(me, intent),
            Controller::Ai(target) => ai::decide(me, target),
        }
    }
}
