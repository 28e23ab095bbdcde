//! Shared state, collaborator traits and configuration for the kinematics
//! simulator.

pub mod config;
pub mod error;
pub mod traits;

pub use config::{NudgeSteps, SimConfig};
pub use error::SimError;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_uniform_constraint_zeroes_acceleration() {
        let params = MotionParams {
            motion_type: MotionType::Uniform,
            initial_velocity: 4.0,
            acceleration: 9.0,
            duration: 3.0,
        }
        .constrain(0.2);
        assert_abs_diff_eq!(params.acceleration, 0.0);
        assert_abs_diff_eq!(params.effective_acceleration(), 0.0);
    }

    #[test]
    fn test_duration_floor() {
        let params = MotionParams {
            duration: 0.01,
            ..MotionParams::default()
        }
        .constrain(0.2);
        assert_abs_diff_eq!(params.duration, 0.2);

        let nan = MotionParams {
            duration: f64::NAN,
            ..MotionParams::default()
        }
        .constrain(0.2);
        assert_abs_diff_eq!(nan.duration, 0.2);
    }

    #[test]
    fn test_series_clear() {
        let mut series = SampleSeries::new();
        series.push(Sample::default());
        series.push(Sample { t: 0.05, ..Sample::default() });
        assert_eq!(series.len(), 2);
        assert_abs_diff_eq!(series.last().unwrap().t, 0.05);
        series.clear();
        assert!(series.is_empty());
    }
}
