//! Roguelite-lite - headless native driver
//!
//! Runs one round with a scripted autopilot on a manual clock. Game events
//! are mirrored to the log by the simulation itself. Usage:
//!
//! ```text
//! RUST_LOG=info roguelite-lite [--seed N] [tuning.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use glam::Vec2;
    use roguelite_lite::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_MS};
    use roguelite_lite::platform::{Clock, FixedStep, Key, KeyState, ManualClock};
    use roguelite_lite::sim::{GameEvent, GamePhase, GameState, tick};
    use roguelite_lite::ui::Hud;
    use roguelite_lite::Tuning;

    /// Frame length of the simulated display (ms); just over one tick so
    /// every frame runs at least one tick and no key edge is dropped
    const FRAME_MS: u64 = 17;
    /// Enemies closer than this trigger a melee swing
    const SWING_RANGE: f32 = 100.0;
    /// Safety cap so a misconfigured round cannot run forever
    const MAX_FRAMES: u64 = 5_000_000;

    struct Options {
        seed: u64,
        tuning: Tuning,
    }

    fn parse_args() -> Result<Options, Box<dyn Error>> {
        let mut seed = 0x5EED;
        let mut tuning = Tuning::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            if arg == "--seed" {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = value.parse()?;
            } else {
                let json = std::fs::read_to_string(&arg)?;
                tuning = Tuning::from_json(&json)?;
                log::info!("Loaded tuning from {}", arg);
            }
        }
        Ok(Options { seed, tuning })
    }

    /// Kite away from the nearest enemy and swing when it gets close
    fn autopilot(state: &GameState, keys: &mut KeyState, frame: u64) {
        for key in [Key::Up, Key::Down, Key::Left, Key::Right, Key::Attack, Key::Confirm, Key::Quit] {
            keys.set(key, false);
        }

        match state.phase {
            GamePhase::Menu => keys.set(Key::Confirm, true),
            GamePhase::Lose | GamePhase::Win => keys.set(Key::Quit, true),
            GamePhase::Quit => {}
            GamePhase::Play => {
                let me = state.player.center();
                let nearest = state
                    .enemies
                    .iter()
                    .map(|e| e.pos)
                    .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)));
                let Some(threat) = nearest else {
                    return;
                };
                let away = (me - threat).normalize_or_zero();
                // Drift back toward the middle so we don't get pinned on an edge
                let home = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32) / 2.0 - me;
                let dir = away + home * 0.002;
                keys.set(Key::Left, dir.x < -0.3);
                keys.set(Key::Right, dir.x > 0.3);
                keys.set(Key::Up, dir.y < -0.3);
                keys.set(Key::Down, dir.y > 0.3);
                if me.distance(threat) < SWING_RANGE && frame % 2 == 0 {
                    keys.set(Key::Attack, true);
                }
            }
        }
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let opts = parse_args()?;
        opts.tuning.validate()?;
        log::info!("Roguelite-lite (headless) starting with seed {}", opts.seed);

        let mut state = GameState::new(opts.seed, opts.tuning);
        let mut clock = ManualClock::default();
        let mut pacing = FixedStep::new();
        let mut keys = KeyState::new();
        let mut outcome = None;

        pacing.advance(clock.now_ms());
        for frame in 0..MAX_FRAMES {
            clock.advance(FRAME_MS);
            autopilot(&state, &mut keys, frame);

            // Edges belong to the first tick of the frame only
            let mut input = keys.tick_input(clock.now_ms());
            for _ in 0..pacing.advance(clock.now_ms()) {
                tick(&mut state, &input);
                input.attack = false;
                input.confirm = false;
                input.quit = false;
                input.now_ms += TICK_MS as u64;
            }
            keys.end_frame();

            for event in state.drain_events() {
                if let GameEvent::PhaseChanged {
                    to: to @ (GamePhase::Win | GamePhase::Lose),
                    ..
                } = event
                {
                    outcome = Some((to, Hud::from_state(&state)));
                }
            }

            if state.phase == GamePhase::Quit {
                break;
            }
        }

        match outcome {
            Some((phase, hud)) => println!(
                "{:?} at level {} with score {} ({} left, abilities: {})",
                phase,
                hud.level,
                hud.score,
                hud.time_left,
                if hud.abilities.is_empty() {
                    "none".to_string()
                } else {
                    hud.abilities.join(", ")
                }
            ),
            None => log::warn!("Round did not finish within {} frames", MAX_FRAMES),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(err) = headless::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host; the library is driven by the embedding page
}
