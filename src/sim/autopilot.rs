//! Autopilot for the player bot (demo / headless mode)
//!
//! Picks the nearest living AI bot, keeps it at a comfortable range and
//! fires continuously. Movement goes through the same direction flags a
//! human would press.

use glam::Vec2;

use super::player::PlayerIntent;
use super::state::Arena;

/// Closer than this: back off
const KEEP_AWAY: f32 = 180.0;
/// Farther than this: close in
const CLOSE_IN: f32 = 260.0;
/// Ignore axis components smaller than this when mapping to flags
const DEADZONE: f32 = 0.3;

/// Build this tick's intent from the arena state
pub fn intent(arena: &Arena) -> PlayerIntent {
    let me = arena.player();
    let Some(target) = arena
        .enemies()
        .iter()
        .filter(|c| c.is_alive())
        .min_by(|a, b| {
            a.pos
                .distance_squared(me.pos)
                .partial_cmp(&b.pos.distance_squared(me.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return PlayerIntent::aim_at(me.pos);
    };

    let offset = target.pos - me.pos;
    let distance = offset.length();
    let toward = offset.normalize_or_zero();

    // Strafe around the target, switching direction every couple of seconds
    let time_factor = arena.time_ticks as f32 * 0.02;
    let strafe = toward.perp() * time_factor.sin().signum();

    let mut wish = strafe;
    if distance < KEEP_AWAY {
        wish -= toward;
    } else if distance > CLOSE_IN {
        wish += toward;
    }

    let mut intent = flags_for(wish);
    intent.pointer = target.pos;
    intent.fire = true;
    intent
}

/// Map a desired direction onto the four movement flags
fn flags_for(wish: Vec2) -> PlayerIntent {
    let wish = wish.normalize_or_zero();
    PlayerIntent {
        up: wish.y < -DEADZONE,
        down: wish.y > DEADZONE,
        left: wish.x < -DEADZONE,
        right: wish.x > DEADZONE,
        ..Default::default()
    }
}
