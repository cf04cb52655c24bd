//! Host-owned frame loop
//!
//! The host samples a clock, clamps the elapsed time, steps the engine once
//! and hands the result to a renderer. Pause and restart are decided here;
//! the engine never sees wall-clock time.

use rand::Rng;
use rand_pcg::Pcg32;

use super::input::InputAdapter;
use crate::renderer::Renderer;
use crate::sim::{SimulationEngine, StepResult};
use crate::tuning::Viewport;
use crate::ui::Banner;

/// One play session: engine, input and pacing state
#[derive(Debug)]
pub struct GameLoop<R = Pcg32> {
    engine: SimulationEngine<R>,
    input: InputAdapter,
    /// Clock reading of the previous frame (seconds)
    last_time: Option<f64>,
    paused: bool,
    max_step: f32,
    banner: Banner,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(engine: SimulationEngine<R>) -> Self {
        let tuning = &engine.state().tuning;
        let input = InputAdapter::new(tuning.touch_hold);
        let max_step = tuning.max_step;
        let banner = Banner::for_state(engine.state(), false);
        Self {
            engine,
            input,
            last_time: None,
            paused: false,
            max_step,
            banner,
        }
    }

    pub fn engine(&self) -> &SimulationEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine<R> {
        &mut self.engine
    }

    pub fn input_mut(&mut self) -> &mut InputAdapter {
        &mut self.input
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Status line for the current frame
    pub fn banner(&self) -> Banner {
        self.banner
    }

    /// Screen tap at `x` (screen units)
    pub fn touch(&mut self, x: f32) {
        let width = self.engine.state().viewport.width;
        self.input.touch_start(x, width);
    }

    /// Window resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(Viewport::new(width, height));
    }

    /// Focus lost: release held keys and pause a running game
    pub fn blur(&mut self) {
        self.input.clear();
        if self.engine.is_running() && !self.paused {
            self.paused = true;
            log::info!("Auto-paused (focus lost)");
        }
    }

    /// Run one frame at clock reading `now` (seconds)
    pub fn frame(&mut self, now: f64, renderer: &mut impl Renderer) -> StepResult {
        let elapsed = match self.last_time {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);
        let dt = elapsed.min(self.max_step);

        let intents = self.input.take_intents();
        self.input.elapse(elapsed);

        let result = if intents.restart && self.engine.restart() {
            // Fresh run: show it before the first step
            self.paused = false;
            self.engine.status()
        } else {
            if intents.pause && self.engine.is_running() {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            if self.paused {
                self.engine.status()
            } else {
                self.engine.advance(dt, &intents)
            }
        };

        renderer.render(&self.engine.snapshot());
        self.banner = Banner::for_state(self.engine.state(), self.paused);
        result
    }
}
