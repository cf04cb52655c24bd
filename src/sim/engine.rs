//! Simulation engine
//!
//! Owns one [`GameState`] plus the random source used for obstacle sizes.
//! Hosts construct one per session; instances share nothing.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameState, Obstacle, Player};
use super::tick::{Intents, StepResult, tick};
use crate::tuning::{Tuning, TuningError, Viewport};

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub speed: f32,
    pub distance: f32,
    pub score: u64,
    pub ground_y: f32,
    pub viewport: Vec2,
    pub phase: GamePhase,
}

/// The game core: state plus an injectable random source
#[derive(Debug, Clone)]
pub struct SimulationEngine<R = Pcg32> {
    state: GameState,
    rng: R,
}

impl SimulationEngine<Pcg32> {
    /// Engine with a seeded PCG random source
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, viewport, Pcg32::seed_from_u64(seed))
    }

    /// Engine with default tuning
    pub fn with_defaults(viewport: Viewport, seed: u64) -> Self {
        Self {
            state: GameState::new(Tuning::default(), viewport),
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Engine drawing obstacle sizes from `rng`
    pub fn with_rng(tuning: Tuning, viewport: Viewport, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(tuning, viewport),
            rng,
        })
    }

    /// Start a fresh run, whatever the current phase
    pub fn reset(&mut self) {
        self.state.start_run();
        log::info!("Run {} started", self.state.runs);
    }

    /// Start a fresh run only if the previous one has ended.
    ///
    /// Returns whether a new run started.
    pub fn restart(&mut self) -> bool {
        if self.state.phase == GamePhase::Running {
            return false;
        }
        self.reset();
        true
    }

    /// Advance the simulation by `dt` seconds
    pub fn advance(&mut self, dt: f32, intents: &Intents) -> StepResult {
        tick(&mut self.state, intents, dt, &mut self.rng)
    }

    /// Follow a resize of the visible world
    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        self.state.resize(viewport);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    pub fn score(&self) -> u64 {
        self.state.score()
    }

    /// Current score and phase without stepping
    pub fn status(&self) -> StepResult {
        StepResult::of(&self.state)
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let state = &self.state;
        RenderSnapshot {
            player: &state.player,
            obstacles: &state.obstacles,
            speed: state.speed,
            distance: state.distance,
            score: state.score(),
            ground_y: state.ground_y(),
            viewport: Vec2::new(state.viewport.width, state.viewport.height),
            phase: state.phase,
        }
    }
}
