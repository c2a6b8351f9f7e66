//! Game state and core simulation types
//!
//! `GameWorld` owns everything the update path mutates. Nothing here is
//! process-global.

use serde::{Deserialize, Serialize};

use super::fixed::Fixed;
use super::obstacles::ObstacleField;
use crate::Error;
use crate::highscores::HighScores;
use crate::platform::{ButtonEdge, Millis, RandomSource};
use crate::tuning::Tuning;

/// Which screen is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for a press
    #[default]
    StartScreen,
    /// A run is in progress or has just ended
    Playing,
    /// Ranked list after a run
    Highscore,
}

/// The player's bird. Horizontal position is `Tuning::actor_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Top edge, origin at the top of the screen
    pub y: Fixed,
    /// Positive is downward
    pub vel: Fixed,
}

impl Actor {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            y: tuning.actor_spawn_y(),
            vel: Fixed::ZERO,
        }
    }
}

/// One attempt, from start press to collision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Obstacles passed
    pub score: u32,
    /// When the run ended
    pub over_at: Option<Millis>,
}

impl Run {
    pub fn is_over(&self) -> bool {
        self.over_at.is_some()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameWorld<R> {
    pub tuning: Tuning,
    pub state: GameState,
    /// When `state` was entered
    pub state_since: Millis,
    pub actor: Actor,
    pub field: ObstacleField,
    pub run: Run,
    pub highscores: HighScores,
    /// Blink phase of the newest highscore entry
    pub blink_visible: bool,
    pub blink_toggled_at: Millis,
    /// Time of the last executed tick, None before the first
    pub last_tick: Option<Millis>,
    /// Simulation tick counter
    pub ticks: u64,
    pub(crate) button: ButtonEdge,
    pub(crate) rng: R,
}

impl<R: RandomSource> GameWorld<R> {
    /// Create a world on the start screen
    pub fn new(tuning: Tuning, mut rng: R) -> Result<Self, Error> {
        tuning.validate()?;
        let field = ObstacleField::new(&tuning, &mut rng);
        let world = Self {
            actor: Actor::spawn(&tuning),
            highscores: HighScores::new(tuning.default_highscores),
            tuning,
            state: GameState::StartScreen,
            state_since: 0,
            field,
            run: Run::default(),
            blink_visible: true,
            blink_toggled_at: 0,
            last_tick: None,
            ticks: 0,
            button: ButtonEdge::default(),
            rng,
        };
        log::info!("Game world created");
        Ok(world)
    }

    /// Switch screens, stamping the transition time
    pub fn enter(&mut self, state: GameState, now: Millis) {
        if self.state != state {
            log::info!("State {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.state_since = now;
        if state == GameState::Highscore {
            self.blink_visible = true;
            self.blink_toggled_at = now;
        }
    }

    /// Reset actor, obstacles and score and begin playing
    pub fn start_run(&mut self, now: Millis) {
        self.actor = Actor::spawn(&self.tuning);
        self.field = ObstacleField::new(&self.tuning, &mut self.rng);
        self.run = Run::default();
        self.enter(GameState::Playing, now);
        log::info!("Run started");
    }

    /// Mark the run over and rank its score. Later calls for the same run do nothing.
    pub fn end_run(&mut self, now: Millis) {
        if self.run.is_over() {
            return;
        }
        self.run.over_at = Some(now);
        let rank = self.highscores.submit(self.run.score);
        log::info!(
            "Run over: score {} (rank {})",
            self.run.score,
            rank.map_or_else(|| "-".to_string(), |r| (r + 1).to_string())
        );
    }

    /// Milliseconds spent in the current screen
    pub fn time_in_state(&self, now: Millis) -> Millis {
        now.saturating_sub(self.state_since)
    }
}
