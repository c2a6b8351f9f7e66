//! Flappy Core entry point
//!
//! Headless host runner: drives the simulation with a virtual clock and an
//! autopilot button, then prints the last frame.

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use flappy_core::platform::{Clock, ManualClock, seeded_rng};
#[cfg(not(target_arch = "wasm32"))]
use flappy_core::renderer::{Display, FrameBuffer};
#[cfg(not(target_arch = "wasm32"))]
use flappy_core::sim::{Fixed, GameState, GameWorld};
#[cfg(not(target_arch = "wasm32"))]
use flappy_core::{Error, Settings, Tuning, poll_frame};

/// Roughly two minutes of play at the default tick rate
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 4_000;

/// Press when the actor has sunk below the middle of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot<R>(world: &GameWorld<R>) -> bool {
    let tuning = &world.tuning;
    match world.state {
        GameState::StartScreen => true,
        GameState::Highscore => false,
        GameState::Playing if world.run.is_over() => false,
        GameState::Playing => {
            let target = world
                .field
                .next_ahead(tuning.actor_x, tuning)
                .map(|o| o.gap_start + Fixed::from_raw(tuning.gap_size.raw() / 2))
                .unwrap_or(Fixed::from_raw(tuning.screen_height.raw() / 2));
            let centre = world.actor.y + Fixed::from_raw(tuning.actor_size.raw() / 2);
            centre > target && world.actor.vel >= Fixed::ZERO
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> Result<Tuning, Error> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| Error::TuningFile(format!("{}: {}", path, e)))?;
            log::info!("Loaded tuning from {}", path);
            Tuning::from_json(&json)
        }
        None => Ok(Tuning::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Error> {
    let tuning = load_tuning()?;
    let settings = Settings::default();

    let mut display = FrameBuffer::new(
        tuning.screen_width.to_pixels(),
        tuning.screen_height.to_pixels(),
    )?;

    let seed: u64 = rand::random();
    let tick_ms = tuning.tick_ms;
    let mut world = GameWorld::new(tuning, seeded_rng(seed))?;
    log::info!("Game initialized with seed: {}", seed);

    let clock = ManualClock::new(0);
    let mut runs = 0u32;
    let mut ticks = 0u64;

    while ticks < MAX_TICKS {
        let was_over = world.run.is_over();
        let level = autopilot(&world);
        let mut input = || level;
        if poll_frame(&mut world, &settings, &clock, &mut input, &mut display)? {
            ticks += 1;
        }
        if world.run.is_over() && !was_over {
            runs += 1;
        }
        clock.advance(tick_ms);
    }

    log::info!(
        "Finished after {} ticks ({} ms), {} runs",
        ticks,
        clock.now_ms(),
        runs
    );
    log::info!("Highscores: {:?}", world.highscores.entries());

    println!("{}", display.to_ascii());
    println!("size {:?}, {} frames", display.size(), display.frames_presented());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy Core (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::DisplayInit(_)) => {
            log::error!("{} - halting", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner in the browser; embed the library instead
}
