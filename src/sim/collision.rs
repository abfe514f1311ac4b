//! Projectile vs combatant collision resolution
//!
//! Every ordered pair of distinct living combatants is checked: the owner's
//! projectiles against the other's body circle. A projectile that connects is
//! consumed on the spot, so it can never damage two bots in one tick. After a
//! hit the scan for that pair stops; the owner's remaining projectiles are
//! tested against the next combatant.
//!
//! There is no notion of teams. AI projectiles damage other AI bots.

use crate::consts::BULLET_DAMAGE;

use super::combatant::{Combatant, CombatantId};

/// A projectile impact produced by [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shooter: CombatantId,
    pub target: CombatantId,
    pub damage: i32,
    /// Target health reached zero on this hit
    pub fatal: bool,
}

/// Resolve all projectile impacts for this tick
pub fn resolve(combatants: &mut [Combatant]) -> Vec<Hit> {
    let mut hits = Vec::new();

    for owner in 0..combatants.len() {
        if !combatants[owner].is_alive() {
            continue;
        }
        for other in 0..combatants.len() {
            if owner == other || !combatants[other].is_alive() {
                continue;
            }
            if let Some(hit) = resolve_pair(combatants, owner, other) {
                hits.push(hit);
            }
        }
    }

    hits
}

/// Find the first of `owner`'s projectiles inside `other`, apply it, remove it
fn resolve_pair(combatants: &mut [Combatant], owner: usize, other: usize) -> Option<Hit> {
    let (center, radius) = (combatants[other].pos, combatants[other].size / 2.0);
    let index = combatants[owner]
        .projectiles
        .iter()
        .position(|p| p.active && p.pos.distance(center) < radius)?;

    let mut projectile = combatants[owner].projectiles.remove(index);
    projectile.deactivate();

    combatants[other].apply_damage(BULLET_DAMAGE);
    Some(Hit {
        shooter: combatants[owner].id,
        target: combatants[other].id,
        damage: BULLET_DAMAGE,
        fatal: !combatants[other].is_alive(),
    })
}
