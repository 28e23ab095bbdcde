//! Parameter Reader
//!
//! Turns the raw text of the control surface into validated
//! [`MotionParams`]. Reading never fails: anything that does not parse to a
//! finite number is replaced by a fallback value.

use serde::{Deserialize, Serialize};
use simcore::{MotionParams, MotionType, SimConfig};

/// Numeric controls that can be edited or nudged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    InitialVelocity,
    Acceleration,
    Duration,
}

/// Raw values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub motion_type: String,
    pub initial_velocity: String,
    pub acceleration: String,
    pub duration: String,
}

impl RawInputs {
    pub fn from_params(params: &MotionParams) -> Self {
        Self {
            motion_type: params.motion_type.code().to_string(),
            initial_velocity: format_number(params.initial_velocity),
            acceleration: format_number(params.acceleration),
            duration: format_number(params.duration),
        }
    }

    pub fn field(&self, field: NumericField) -> &str {
        match field {
            NumericField::InitialVelocity => &self.initial_velocity,
            NumericField::Acceleration => &self.acceleration,
            NumericField::Duration => &self.duration,
        }
    }

    pub fn field_mut(&mut self, field: NumericField) -> &mut String {
        match field {
            NumericField::InitialVelocity => &mut self.initial_velocity,
            NumericField::Acceleration => &mut self.acceleration,
            NumericField::Duration => &mut self.duration,
        }
    }

    /// Add `delta` to a numeric field, snapping the result to 6 decimals.
    pub fn nudge(&mut self, field: NumericField, delta: f64) {
        let current = parse_number(self.field(field), 0.0);
        let next = ((current + delta) * 1e6).round() / 1e6;
        *self.field_mut(field) = format_number(next);
    }

    /// Mirror the motion type that was actually read onto the acceleration
    /// control. Uniform motion pins the acceleration text to `0`. Returns
    /// whether acceleration is editable.
    pub fn reflect_motion_type(&mut self, motion_type: MotionType) -> bool {
        if motion_type.is_uniform() {
            self.acceleration = "0".to_string();
            false
        } else {
            true
        }
    }
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::from_params(&MotionParams::default())
    }
}

/// Parse a number written with a decimal point or a decimal comma.
///
/// Surrounding whitespace is ignored and an empty string reads as 0.
/// Non-finite or unparsable input yields `fallback`.
pub fn parse_number(text: &str, fallback: f64) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.replacen(',', ".", 1).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

pub fn parse_motion_type(text: &str, fallback: MotionType) -> MotionType {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "mru" | "uniform" => MotionType::Uniform,
        "2" | "mrua" | "accelerated" | "uniformly_accelerated" => MotionType::UniformlyAccelerated,
        _ => fallback,
    }
}

fn format_number(value: f64) -> String {
    // Avoid a "-0" in the control
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterReader {
    fallbacks: MotionParams,
    min_duration: f64,
}

impl Default for ParameterReader {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl ParameterReader {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            fallbacks: config.fallbacks,
            min_duration: config.min_duration,
        }
    }

    pub fn read(&self, raw: &RawInputs) -> MotionParams {
        MotionParams {
            motion_type: parse_motion_type(&raw.motion_type, self.fallbacks.motion_type),
            initial_velocity: parse_number(&raw.initial_velocity, self.fallbacks.initial_velocity),
            acceleration: parse_number(&raw.acceleration, self.fallbacks.acceleration),
            duration: parse_number(&raw.duration, self.fallbacks.duration),
        }
        .constrain(self.min_duration)
    }
}
