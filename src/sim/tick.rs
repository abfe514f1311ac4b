//! Fixed-step simulation tick
//!
//! Order within a tick: player, AI bots, projectiles, collisions, outcome.

use super::collision;
use super::controller::{Controller, TargetView};
use super::player::PlayerIntent;
use super::state::{Arena, GameEvent, MatchOutcome};

/// Advance the arena by one tick.
///
/// `now` is the clock value used for fire cooldowns. Every bot spawns with
/// its last shot at clock 0, so nothing fires before `FIRE_COOLDOWN`. Does
/// nothing once the match is decided.
///
/// Events are appended to `arena.events` and kept until
/// [`Arena::drain_events`] is called; callers must drain them regularly.
pub fn tick(arena: &mut Arena, now: u64, intent: &PlayerIntent) {
    if arena.outcome.is_over() {
        return;
    }
    arena.time_ticks += 1;

    // Player
    let player = arena.player_mut();
    let decision = Controller::Player(intent).decide(player);
    if player.apply(&decision, now) {
        let shooter = player.id;
        arena.events.push(GameEvent::Fired { shooter });
    }

    // AI bots, each against the player as they are after the player's move
    let target = TargetView::from(arena.player());
    for enemy in arena.combatants.iter_mut().skip(1) {
        if !enemy.is_alive() {
            continue;
        }
        let previous = enemy.behavior();
        let decision = Controller::Ai(target).decide(enemy);
        if enemy.apply(&decision, now) {
            arena.events.push(GameEvent::Fired { shooter: enemy.id });
        }
        if enemy.behavior() != previous {
            log::trace!("Bot {:?}: {:?} -> {:?}", enemy.id, previous, enemy.behavior());
        }
    }

    for combatant in &mut arena.combatants {
        combatant.advance_projectiles();
    }

    for hit in collision::resolve(&mut arena.combatants) {
        arena.events.push(GameEvent::Hit {
            shooter: hit.shooter,
            target: hit.target,
            damage: hit.damage,
        });
        if hit.fatal {
            log::debug!("Bot {:?} destroyed by {:?}", hit.target, hit.shooter);
            arena.events.push(GameEvent::Destroyed { target: hit.target });
        }
    }

    let outcome = arena.evaluate_outcome();
    if outcome != MatchOutcome::Ongoing {
        log::info!(
            "Match {} over after {} ticks: {}",
            arena.matches,
            arena.time_ticks,
            outcome.as_str()
        );
        arena.outcome = outcome;
        arena.events.push(GameEvent::OutcomeChanged(outcome));
    }
}

impl Arena {
    /// Advance one tick (see [`tick`]). Drain events afterwards.
    pub fn tick(&mut self, now: u64, intent: &PlayerIntent) {
        tick(self, now, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::combatant::AiBehavior;
    use crate::sim::projectile::Projectile;
    use glam::Vec2;

    /// Park the AI bots far from the player and from each other
    fn quiet_arena() -> Arena {
        let mut arena = Arena::new(99);
        let spots = [
            Vec2::new(60.0, 60.0),
            Vec2::new(740.0, 60.0),
            Vec2::new(60.0, 540.0),
        ];
        for (enemy, spot) in arena.combatants[1..].iter_mut().zip(spots) {
            enemy.pos = spot;
        }
        arena.drain_events();
        arena
    }

    #[test]
    fn test_player_defeat() {
        let mut arena = quiet_arena();
        arena.player_mut().health = BULLET_DAMAGE;
        let player_pos = arena.player().pos;
        let shooter = arena.combatants[1].id;
        arena.combatants[1]
            .projectiles
            .push(Projectile::new(player_pos - Vec2::new(15.0, 0.0), 0.0, shooter));

        arena.tick(1000, &PlayerIntent::default());

        assert!(!arena.player().is_alive());
        assert_eq!(arena.outcome, MatchOutcome::Defeat);
        assert!(arena.enemies().iter().all(|c| c.is_alive()));
        let events = arena.drain_events();
        assert!(events.contains(&GameEvent::OutcomeChanged(MatchOutcome::Defeat)));
    }

    #[test]
    fn test_player_victory() {
        let mut arena = quiet_arena();
        for enemy in &mut arena.combatants[2..] {
            enemy.health = 0;
        }
        arena.combatants[1].health = BULLET_DAMAGE;
        let target = arena.combatants[1].pos;
        let id = arena.player().id;
        arena
            .player_mut()
            .projectiles
            .push(Projectile::new(target - Vec2::new(12.0, 0.0), 0.0, id));

        arena.tick(1000, &PlayerIntent::aim_at(target));

        assert_eq!(arena.outcome, MatchOutcome::Victory);
        assert!(arena.player().is_alive());
    }

    #[test]
    fn test_decided_match_is_frozen() {
        let mut arena = quiet_arena();
        arena.player_mut().health = 0;
        arena.tick(0, &PlayerIntent::default());
        assert_eq!(arena.outcome, MatchOutcome::Defeat);

        let before: Vec<_> = arena.combatants.iter().map(|c| c.pos).collect();
        let ticks = arena.time_ticks;
        let intent = PlayerIntent {
            right: true,
            fire: true,
            ..Default::default()
        };
        arena.tick(5000, &intent);
        let after: Vec<_> = arena.combatants.iter().map(|c| c.pos).collect();
        assert_eq!(before, after);
        assert_eq!(arena.time_ticks, ticks);
    }

    #[test]
    fn test_restart_after_outcome() {
        let mut arena = quiet_arena();
        arena.player_mut().health = 0;
        arena.tick(0, &PlayerIntent::default());
        assert!(arena.outcome.is_over());

        arena.restart();
        assert_eq!(arena.outcome, MatchOutcome::Ongoing);
        assert_eq!(arena.player().pos, crate::arena_center());
        assert_eq!(arena.enemies().len(), 3);
        assert!(arena.enemies().iter().all(|c| c.health == MAX_HEALTH));
        assert!(arena.combatants.iter().all(|c| c.projectiles.is_empty()));
    }

    #[test]
    fn test_player_fire_produces_event() {
        let mut arena = quiet_arena();
        let intent = PlayerIntent {
            fire: true,
            pointer: Vec2::new(800.0, 300.0),
            ..Default::default()
        };
        arena.tick(FIRE_COOLDOWN, &intent);
        let id = arena.player().id;
        assert!(arena.drain_events().contains(&GameEvent::Fired { shooter: id }));
        assert_eq!(arena.player().projectiles.len(), 1);

        // Cooldown still running
        arena.tick(FIRE_COOLDOWN + 16, &intent);
        assert_eq!(arena.player().projectiles.len(), 1);
    }

    #[test]
    fn test_no_shots_before_first_cooldown() {
        let mut arena = Arena::new(99);
        // Put one bot well inside fire range of the player
        let player_pos = arena.player().pos;
        arena.combatants[1].pos = player_pos - Vec2::new(120.0, 0.0);
        arena.drain_events();

        let intent = PlayerIntent {
            fire: true,
            pointer: Vec2::new(800.0, 300.0),
            ..Default::default()
        };
        let mut now = 0;
        while now < FIRE_COOLDOWN {
            arena.tick(now, &intent);
            now += 16;
        }
        let fired = arena
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Fired { .. }))
            .count();
        assert_eq!(fired, 0);
        assert!(arena.combatants.iter().all(|c| c.projectiles.is_empty()));

        arena.tick(now, &intent);
        let events = arena.drain_events();
        assert!(events.contains(&GameEvent::Fired { shooter: arena.player().id }));
        assert!(events.contains(&GameEvent::Fired { shooter: arena.combatants[1].id }));
    }

    #[test]
    fn test_events_accumulate_until_drained() {
        let mut arena = quiet_arena();
        let intent = PlayerIntent {
            fire: true,
            pointer: Vec2::new(800.0, 300.0),
            ..Default::default()
        };
        arena.tick(FIRE_COOLDOWN, &intent);
        arena.tick(2 * FIRE_COOLDOWN, &intent);
        let id = arena.player().id;
        assert_eq!(
            arena.drain_events(),
            vec![GameEvent::Fired { shooter: id }, GameEvent::Fired { shooter: id }]
        );
        assert!(arena.events.is_empty());
    }

    #[test]
    fn test_ai_approaches_distant_player() {
        let mut arena = quiet_arena();
        let before = arena.combatants[1].pos.distance(arena.player().pos);
        arena.tick(0, &PlayerIntent::default());
        let after = arena.combatants[1].pos.distance(arena.player().pos);
        assert!((before - after - AI_SPEED).abs() < 1e-3);
        assert_eq!(arena.combatants[1].behavior(), Some(AiBehavior::Chase));
    }

    #[test]
    fn test_ai_retreats_when_hurt_and_close() {
        let mut arena = quiet_arena();
        let player_pos = arena.player().pos;
        arena.combatants[1].pos = player_pos - Vec2::new(100.0, 0.0);
        arena.combatants[1].health = 25;

        arena.tick(0, &PlayerIntent::default());

        assert_eq!(arena.combatants[1].behavior(), Some(AiBehavior::Retreat));
        assert!(arena.combatants[1].pos.distance(player_pos) > 100.0);
    }

    #[test]
    fn test_dead_ai_is_skipped() {
        let mut arena = quiet_arena();
        arena.combatants[1].health = 0;
        let pos = arena.combatants[1].pos;
        arena.tick(0, &PlayerIntent::default());
        assert_eq!(arena.combatants[1].pos, pos);
    }

    #[test]
    fn test_projectile_removed_after_leaving() {
        let mut arena = quiet_arena();
        let intent = PlayerIntent {
            fire: true,
            pointer: Vec2::new(800.0, 300.0),
            ..Default::default()
        };
        arena.tick(FIRE_COOLDOWN, &intent);
        let idle = PlayerIntent::aim_at(Vec2::new(800.0, 300.0));
        // Muzzle at x=420; gone once past x=800
        for t in 1..60 {
            arena.tick(FIRE_COOLDOWN + t * 16, &idle);
        }
        assert!(arena.player().projectiles.is_empty());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        fn intent_strategy() -> impl Strategy<Value = PlayerIntent> {
            (any::<[bool; 5]>(), 0.0f32..800.0, 0.0f32..600.0).prop_map(|(f, x, y)| PlayerIntent {
                up: f[0],
                down: f[1],
                left: f[2],
                right: f[3],
                fire: f[4],
                pointer: Vec2::new(x, y),
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn test_invariants_hold(seed in any::<u64>(), intents in prop::collection::vec(intent_strategy(), 1..400)) {
                let mut arena = Arena::new(seed);
                let mut last_shot: HashMap<_, u64> = HashMap::new();

                for (i, intent) in intents.iter().enumerate() {
                    let now = i as u64 * 16;
                    arena.tick(now, intent);

                    for c in &arena.combatants {
                        let half = c.size / 2.0;
                        prop_assert!(c.pos.x >= half && c.pos.x <= ARENA_WIDTH - half);
                        prop_assert!(c.pos.y >= half && c.pos.y <= ARENA_HEIGHT - half);
                        prop_assert!(c.health >= 0 && c.health <= c.max_health);
                        prop_assert_eq!(c.is_alive(), c.health > 0);
                        prop_assert!(c.projectiles.iter().all(|p| p.active && crate::in_arena(p.pos)));
                    }

                    for event in arena.drain_events() {
                        if let GameEvent::Fired { shooter } = event {
                            prop_assert!(now >= FIRE_COOLDOWN);
                            if let Some(prev) = last_shot.insert(shooter, now) {
                                prop_assert!(now - prev >= FIRE_COOLDOWN);
                            }
                        }
                    }
                }
            }
        }
    }
}
