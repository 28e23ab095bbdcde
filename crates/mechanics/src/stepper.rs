use simcore::{Model, MotionModel, Sample, SimConfig, SimContext};

use crate::kinematics::Trajectory;

/// Simulated clock advanced one tick at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    t: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn is_at_start(&self) -> bool {
        self.t <= 0.0
    }
}

impl Model for SimClock {
    fn reset(&mut self) {
        self.t = 0.0;
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Sample taken at the time the tick started
    pub sample: Sample,
    /// Clock value after the tick
    pub next_t: f64,
    /// The clock has moved past the end of the run
    pub finished: bool,
}

/// Fixed-step sampler of a [`Trajectory`].
///
/// Each tick samples the trajectory at the current clock value, then moves
/// the clock forward by `time_step`, rounded to `time_decimals` places so the
/// accumulated value stays on the step grid. The run is over once the clock
/// exceeds `duration + end_epsilon`, so the last sample is never later than
/// `duration + end_epsilon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    time_step: f64,
    end_epsilon: f64,
    time_decimals: u32,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl Stepper {
    pub fn new(time_step: f64) -> Self {
        Self {
            time_step,
            ..Self::default()
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            time_step: config.time_step,
            end_epsilon: config.end_epsilon,
            time_decimals: config.time_decimals,
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Context describing the tick that would start at `clock`.
    pub fn context(&self, clock: &SimClock) -> SimContext {
        SimContext {
            dt: self.time_step,
            t: clock.t,
        }
    }

    pub fn step(&self, trajectory: &Trajectory, clock: &mut SimClock) -> StepOutcome {
        let ctx = self.context(clock);
        let sample = trajectory.sample(ctx.t);
        clock.t = round_to(ctx.t + ctx.dt, self.time_decimals);
        StepOutcome {
            sample,
            next_t: clock.t,
            finished: self.is_past_end(trajectory, clock),
        }
    }

    pub fn is_past_end(&self, trajectory: &Trajectory, clock: &SimClock) -> bool {
        clock.t > trajectory.duration() + self.end_epsilon
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
