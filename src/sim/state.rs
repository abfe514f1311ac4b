//! Arena state and match setup
//!
//! The arena owns every combatant. The player is always at index 0 of
//! `combatants`, followed by the AI bots in spawn order.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, CombatantId};
use crate::arena_center;
use crate::consts::*;

/// Tri-state match result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Fight in progress
    #[default]
    Ongoing,
    /// Every AI bot destroyed
    Victory,
    /// Player destroyed
    Defeat,
}

impl MatchOutcome {
    pub fn is_over(&self) -> bool {
        *self != MatchOutcome::Ongoing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Ongoing => "Ongoing",
            MatchOutcome::Victory => "Victory",
            MatchOutcome::Defeat => "Defeat",
        }
    }
}

/// Notifications for presentation layers (audio, particles, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { shooter: CombatantId },
    Hit { shooter: CombatantId, target: CombatantId, damage: i32 },
    Destroyed { target: CombatantId },
    OutcomeChanged(MatchOutcome),
    Restarted,
}

/// External session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a new match (only once the current one is decided)
    Restart,
    /// Stop the session
    Quit,
}

/// What [`Arena::handle_command`] did with a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// A new match was started
    Restarted,
    /// Restart requested while the match is still in progress
    Ignored,
    /// The caller should stop the session
    Quit,
}

/// RNG seed plus a stream counter, advanced once per match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next match
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// The whole simulation: one player, N AI bots, and the match outcome
#[derive(Debug, Clone)]
pub struct Arena {
    pub rng_state: RngState,
    /// Player first, then AI bots
    pub combatants: Vec<Combatant>,
    pub outcome: MatchOutcome,
    /// Ticks simulated in the current match
    pub time_ticks: u64,
    /// Matches started so far (including the current one)
    pub matches: u32,
    /// Events since the last drain. Grows every tick until
    /// [`Arena::drain_events`] is called.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Arena {
    /// Create an arena and start the first match
    pub fn new(seed: u64) -> Self {
        let mut arena = Self {
            rng_state: RngState::new(seed),
            combatants: Vec::new(),
            outcome: MatchOutcome::Ongoing,
            time_ticks: 0,
            matches: 0,
            events: Vec::new(),
            next_id: 1,
        };
        arena.restart();
        arena
    }

    fn next_entity_id(&mut self) -> CombatantId {
        let id = self.next_id;
        self.next_id += 1;
        CombatantId(id)
    }

    /// Discard every combatant and start a fresh match.
    ///
    /// The player spawns at the arena center; the AI bots spawn in the corner
    /// regions, each coordinate drawn from the near or far edge band.
    pub fn restart(&mut self) {
        let mut rng = self.rng_state.next_rng();

        self.combatants.clear();
        self.next_id = 1;
        let player_id = self.next_entity_id();
        self.combatants.push(Combatant::player(player_id, arena_center()));

        for _ in 0..AI_COUNT {
            let id = self.next_entity_id();
            let pos = corner_spawn(&mut rng);
            self.combatants.push(Combatant::ai(id, pos));
        }

        self.outcome = MatchOutcome::Ongoing;
        self.time_ticks = 0;
        self.matches += 1;
        self.events.push(GameEvent::Restarted);
        log::info!(
            "Match {} started: {} AI bots (seed {}, stream {})",
            self.matches,
            AI_COUNT,
            self.rng_state.seed,
            self.rng_state.stream - 1
        );
    }

    /// Apply a session command.
    ///
    /// `Restart` is honored only after the match is decided.
    pub fn handle_command(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Restart if self.outcome.is_over() => {
                self.restart();
                CommandResult::Restarted
            }
            Command::Restart => {
                log::debug!("Restart ignored: match still in progress");
                CommandResult::Ignored
            }
            Command::Quit => {
                log::info!("Quit after {} matches", self.matches);
                CommandResult::Quit
            }
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.combatants[0]
    }

    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.combatants[0]
    }

    /// AI bots in spawn order
    pub fn enemies(&self) -> &[Combatant] {
        &self.combatants[1..]
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies().iter().filter(|c| c.is_alive()).count()
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    /// Take all events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Outcome implied by the current health of the cast
    pub fn evaluate_outcome(&self) -> MatchOutcome {
        if !self.player().is_alive() {
            MatchOutcome::Defeat
        } else if self.enemies().iter().all(|c| !c.is_alive()) {
            MatchOutcome::Victory
        } else {
            MatchOutcome::Ongoing
        }
    }
}

/// One coordinate in the near band `[50, 200]` or the far band
/// `[extent - 200, extent - 50]`, chosen with equal odds
fn edge_band(rng: &mut Pcg32, extent: f32) -> f32 {
    let extent = extent as i32;
    let near = rng.random_range(SPAWN_MARGIN_NEAR..=SPAWN_MARGIN_FAR);
    let far = rng.random_range(extent - SPAWN_MARGIN_FAR..=extent - SPAWN_MARGIN_NEAR);
    if rng.random_bool(0.5) { near as f32 } else { far as f32 }
}

fn corner_spawn(rng: &mut Pcg32) -> Vec2 {
    let x = edge_band(rng, ARENA_WIDTH);
    let y = edge_band(rng, ARENA_HEIGHT);
    Vec2::new(x, y)
}
