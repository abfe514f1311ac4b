//! Battle Bots headless driver
//!
//! Runs matches on a simulated clock with the autopilot at the controls,
//! restarting after each decided match until the match count or tick budget
//! is reached.
//!
//! Usage: `battle-bots [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use battle_bots::Settings;
    use battle_bots::sim::{
        Arena, Command, CommandResult, GameEvent, MatchOutcome, PlayerIntent, autopilot,
    };

    env_logger::init();
    log::info!("Battle Bots (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    settings.apply_env();
    log::info!(
        "seed={} matches={} max_ticks={} frame_ms={} autopilot={}",
        settings.seed,
        settings.matches,
        settings.max_ticks,
        settings.effective_frame_ms(),
        settings.autopilot
    );

    let mut arena = Arena::new(settings.seed);
    let mut total_ticks: u64 = 0;
    let (mut victories, mut defeats) = (0u32, 0u32);

    loop {
        if settings.ticks_exhausted(total_ticks) {
            log::warn!("Tick budget exhausted during match {}", arena.matches);
            if arena.handle_command(Command::Quit) == CommandResult::Quit {
                break;
            }
        }

        let now = total_ticks * settings.effective_frame_ms();
        let intent = if settings.autopilot {
            autopilot::intent(&arena)
        } else {
            PlayerIntent::aim_at(arena.player().pos)
        };
        arena.tick(now, &intent);
        total_ticks += 1;

        for event in arena.drain_events() {
            if let GameEvent::Destroyed { target } = event {
                let side = match arena.get(target) {
                    Some(c) if c.is_player() => "Player",
                    _ => "AI",
                };
                log::debug!("{} bot {:?} destroyed at tick {}", side, target, arena.time_ticks);
            }
        }

        if !arena.outcome.is_over() {
            continue;
        }

        match arena.outcome {
            MatchOutcome::Victory => victories += 1,
            MatchOutcome::Defeat => defeats += 1,
            MatchOutcome::Ongoing => {}
        }
        println!(
            "Match {}: {} after {} ticks (health {}, enemies {}/{})",
            arena.matches,
            arena.outcome.as_str(),
            arena.time_ticks,
            arena.player().health,
            arena.enemies_alive(),
            arena.enemies().len()
        );
        if settings.dump_snapshot {
            match serde_json::to_string(&arena.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
        }

        let command = if victories + defeats >= settings.matches {
            Command::Quit
        } else {
            Command::Restart
        };
        match arena.handle_command(command) {
            CommandResult::Quit => break,
            CommandResult::Restarted => {}
            CommandResult::Ignored => log::warn!("Restart ignored after a decided match"),
        }
    }

    println!("Victories: {victories}  Defeats: {defeats}  Ticks: {total_ticks}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web target
}
