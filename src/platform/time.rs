//! Fixed timestep clock
//!
//! Turns variable frame deltas into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and hands out fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    dt: f32,
    max_substeps: u32,
    /// Longest frame delta accepted; never shorter than one tick
    max_frame_dt: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            dt,
            max_substeps,
            max_frame_dt: MAX_FRAME_DT.max(dt),
        }
    }

    /// Feed a frame delta (seconds); returns how many ticks to run now
    ///
    /// Deltas above [`MAX_FRAME_DT`] (or one tick, if longer) are capped. If
    /// more than `max_substeps` ticks are owed, the excess is dropped instead
    /// of carried over.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, self.max_frame_dt);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Dropping {:.4}s of simulation time", self.accumulator);
            self.accumulator %= self.dt;
        }
        ticks
    }
}
