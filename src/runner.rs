//! Fixed timestep driver
//!
//! Every tuned constant in the games assumes one tick per logical frame, so
//! the host hands over wall-clock time and the runner turns it into whole ticks.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::TickInput;

/// Accumulates host frame time and releases it as fixed-size ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStepRunner {
    accumulator: f32,
    dt: f32,
    max_substeps: u32,
}

impl Default for FixedStepRunner {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepRunner {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            dt,
            max_substeps: max_substeps.max(1),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.timestep(), settings.max_substeps)
    }

    pub fn timestep(&self) -> f32 {
        self.dt
    }

    pub fn max_substeps(&self) -> u32 {
        self.max_substeps
    }

    /// Unconsumed time carried to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }

    /// Feed `elapsed` seconds of host time and run as many ticks as fit.
    ///
    /// The first tick sees `input` as given; later ticks in the same frame see
    /// it settled so key edges fire once. Backlog beyond `max_substeps` is
    /// dropped. Returns the number of ticks run.
    pub fn advance<F>(&mut self, elapsed: f32, input: &TickInput, mut tick: F) -> u32
    where
        F: FnMut(&TickInput),
    {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let settled = input.settled();
        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            tick(if substeps == 0 { input } else { &settled });
            self.accumulator -= self.dt;
            substeps += 1;
        }

        if self.accumulator >= self.dt {
            log::debug!(
                "runner: dropping {:.3}s of backlog after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator %= self.dt;
        }

        substeps
    }
}
