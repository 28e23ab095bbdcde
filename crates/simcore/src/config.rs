//! Simulation configuration
//!
//! Every tunable constant of the simulator lives here. All fields have
//! defaults, so a JSON config only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::{MotionParams, MotionType};

/// Increment applied by the +/- nudge buttons of each numeric control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeSteps {
    /// m/s
    pub velocity: f64,
    /// m/s^2
    pub acceleration: f64,
    /// s
    pub duration: f64,
}

impl Default for NudgeSteps {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            acceleration: 0.5,
            duration: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated seconds per tick, also the wall-clock tick period
    pub time_step: f64,
    /// Tolerance used when comparing the clock against the duration
    pub end_epsilon: f64,
    /// Decimal places the clock is rounded to after each tick
    pub time_decimals: u32,
    /// Left margin of the marker on the track (px)
    pub marker_margin_px: f64,
    /// Track width not usable for scaling (px)
    pub scale_inset_px: f64,
    /// Track width not usable by the mini-track indicator (px)
    pub indicator_inset_px: f64,
    /// Lower bound of the pixels-per-meter factor
    pub min_px_per_meter: f64,
    /// Smallest span of track (m) the scale is fitted to
    pub min_span_m: f64,
    /// Extra track (m) kept visible around the predicted path
    pub span_margin_m: f64,
    /// Duration floor (s)
    pub min_duration: f64,
    /// Parameters at startup
    pub defaults: MotionParams,
    /// Values substituted for unparsable inputs
    pub fallbacks: MotionParams,
    pub nudge: NudgeSteps,
    /// Longest wall-clock gap (s) converted into ticks in one advance
    pub max_catch_up: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step: 0.05,
            end_epsilon: 1e-9,
            time_decimals: 6,
            marker_margin_px: 20.0,
            scale_inset_px: 60.0,
            indicator_inset_px: 80.0,
            min_px_per_meter: 2.0,
            min_span_m: 5.0,
            span_margin_m: 2.0,
            min_duration: 0.2,
            defaults: MotionParams::default(),
            fallbacks: MotionParams {
                motion_type: MotionType::UniformlyAccelerated,
                initial_velocity: 0.0,
                acceleration: 0.0,
                duration: 6.6,
            },
            nudge: NudgeSteps::default(),
            max_catch_up: 0.25,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("time_step", self.time_step)?;
        positive("end_epsilon", self.end_epsilon)?;
        positive("min_duration", self.min_duration)?;
        positive("min_px_per_meter", self.min_px_per_meter)?;
        positive("min_span_m", self.min_span_m)?;
        positive("max_catch_up", self.max_catch_up)?;
        non_negative("marker_margin_px", self.marker_margin_px)?;
        non_negative("scale_inset_px", self.scale_inset_px)?;
        non_negative("indicator_inset_px", self.indicator_inset_px)?;
        non_negative("span_margin_m", self.span_margin_m)?;
        if self.time_decimals > 12 {
            return Err(SimError::InvalidConfig {
                field: "time_decimals",
                reason: format!("must be at most 12, got {}", self.time_decimals),
            });
        }
        // The clock is rounded after every tick; a step below half a unit
        // of the last decimal would never move it.
        let factor = 10f64.powi(self.time_decimals as i32);
        if (self.time_step * factor).round() < 1.0 {
            return Err(SimError::InvalidConfig {
                field: "time_step",
                reason: format!(
                    "{} vanishes when the clock is rounded to {} decimals",
                    self.time_step, self.time_decimals
                ),
            });
        }
        Ok(())
    }

    /// Set the tick length. Checked by [`SimConfig::validate`].
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the startup parameters
    pub fn with_defaults(mut self, defaults: MotionParams) -> Self {
        self.defaults = defaults;
        self
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            field,
            reason: format!("must be positive and finite, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            field,
            reason: format!("must be non-negative and finite, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "time_step": 0.1, "nudge": { "duration": 0.5 } }"#)
            .unwrap();
        assert!((config.time_step - 0.1).abs() < 1e-12);
        assert!((config.nudge.duration - 0.5).abs() < 1e-12);
        assert!((config.nudge.velocity - 1.0).abs() < 1e-12);
        assert!((config.min_duration - 0.2).abs() < 1e-12);
        assert_eq!(config.defaults, MotionParams::default());
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let err = SimConfig::from_json_str(r#"{ "time_step": 0.0 }"#).unwrap_err();
        match err {
            SimError::InvalidConfig { field, .. } => assert_eq!(field, "time_step"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_time_step_below_clock_resolution() {
        let config = SimConfig::default().with_time_step(4e-7);
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig { field: "time_step", .. })
        ));
        assert!(SimConfig::default().with_time_step(1e-6).validate().is_ok());

        let mut coarse = SimConfig::default().with_time_step(0.01);
        coarse.time_decimals = 1;
        assert!(coarse.validate().is_err());
    }

    #[test]
    fn test_builder_values_are_validated() {
        assert!(SimConfig::default().with_time_step(-0.05).validate().is_err());
        assert!(SimConfig::default().with_time_step(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json_str("{ time_step: ").unwrap_err();
        assert!(matches!(err, SimError::Parse(_)));
    }

    #[test]
    fn test_motion_type_round_trips_by_name() {
        let config = SimConfig::from_json_str(
            r#"{ "defaults": { "motion_type": "Uniform", "initial_velocity": 10.0, "acceleration": 0.0, "duration": 5.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.defaults.motion_type, MotionType::Uniform);
        assert!((config.defaults.initial_velocity - 10.0).abs() < 1e-12);
    }
}
