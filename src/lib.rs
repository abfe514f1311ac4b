//! Battle Bots - A 2D arena combat simulation
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (combatants, projectiles, AI, collisions, match state)
//! - `settings`: Headless driver configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frames per second the driver paces ticks at
    pub const FPS: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Movement per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const AI_SPEED: f32 = 3.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Minimum clock units (ms) between two shots of the same combatant
    pub const FIRE_COOLDOWN: u64 = 500;

    /// Combatant body diameter
    pub const COMBATANT_SIZE: f32 = 40.0;
    pub const MAX_HEALTH: i32 = 100;
    pub const BULLET_DAMAGE: i32 = 20;

    /// AI thresholds
    pub const RETREAT_HEALTH_THRESHOLD: i32 = 30;
    pub const RETREAT_DISTANCE: f32 = 150.0;
    pub const CHASE_MIN_DISTANCE: f32 = 200.0;
    pub const FIRE_DISTANCE: f32 = 300.0;

    /// Number of AI combatants spawned per match
    pub const AI_COUNT: usize = 3;

    /// AI spawn band: distance from an edge, inclusive
    pub const SPAWN_MARGIN_NEAR: i32 = 50;
    pub const SPAWN_MARGIN_FAR: i32 = 200;
}

/// Arena center point
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(consts::ARENA_WIDTH / 2.0, consts::ARENA_HEIGHT / 2.0)
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of the vector from `from` to `to` (0 when the points coincide)
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Keep a body of the given diameter fully inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: f32) -> Vec2 {
    let half = size / 2.0;
    Vec2::new(
        pos.x.clamp(half, consts::ARENA_WIDTH - half),
        pos.y.clamp(half, consts::ARENA_HEIGHT - half),
    )
}

/// Strict rectangle test against the arena bounds (edges count as inside)
#[inline]
pub fn in_arena(pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= consts::ARENA_WIDTH && pos.y >= 0.0 && pos.y <= consts::ARENA_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_arena() {
        let p = clamp_to_arena(Vec2::new(-50.0, 900.0), 40.0);
        assert_eq!(p, Vec2::new(20.0, consts::ARENA_HEIGHT - 20.0));

        let inside = Vec2::new(300.0, 300.0);
        assert_eq!(clamp_to_arena(inside, 40.0), inside);
    }

    #[test]
    fn test_angle_between_coincident_points() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(angle_between(p, p), 0.0);
    }

    #[test]
    fn test_in_arena_edges() {
        assert!(in_arena(Vec2::new(0.0, 0.0)));
        assert!(in_arena(Vec2::new(consts::ARENA_WIDTH, consts::ARENA_HEIGHT)));
        assert!(!in_arena(Vec2::new(consts::ARENA_WIDTH + 0.1, 10.0)));
        assert!(!in_arena(Vec2::new(10.0, -0.1)));
    }
}
