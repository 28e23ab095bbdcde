//! Closed-form one-dimensional kinematics
//!
//! Uniform motion (MRU):
//! - x(t) = x0 + v0·t
//! - v(t) = v0
//! - a(t) = 0
//!
//! Uniformly accelerated motion (MRUA):
//! - x(t) = x0 + v0·t + ½·a·t²
//! - v(t) = v0 + a·t
//! - a(t) = a
//!
//! Values are always evaluated analytically at `t`, never integrated, so the
//! stepped samples carry no accumulated error.

use serde::{Deserialize, Serialize};
use simcore::{MotionModel, MotionParams};

/// Motion of a single body along the track, starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    params: MotionParams,
    /// Start position (m)
    origin: f64,
}

impl Trajectory {
    pub fn new(params: MotionParams) -> Self {
        Self { params, origin: 0.0 }
    }

    /// Set the start position
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn duration(&self) -> f64 {
        self.params.duration
    }

    /// Displacement from the origin at `t`.
    pub fn displacement_at(&self, t: f64) -> f64 {
        self.position_at(t) - self.origin
    }

    /// Displacement at the end of the configured duration.
    pub fn final_displacement(&self) -> f64 {
        self.displacement_at(self.params.duration)
    }

    pub fn final_velocity(&self) -> f64 {
        self.velocity_at(self.params.duration)
    }
}

impl MotionModel for Trajectory {
    fn acceleration_at(&self, _t: f64) -> f64 {
        self.params.effective_acceleration()
    }

    fn velocity_at(&self, t: f64) -> f64 {
        let v0 = self.params.initial_velocity;
        if self.params.motion_type.is_uniform() {
            v0
        } else {
            v0 + self.params.acceleration * t
        }
    }

    fn position_at(&self, t: f64) -> f64 {
        let v0 = self.params.initial_velocity;
        if self.params.motion_type.is_uniform() {
            self.origin + v0 * t
        } else {
            self.origin + v0 * t + 0.5 * self.params.acceleration * t * t
        }
    }
}
