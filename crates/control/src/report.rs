//! Results Summarizer
//!
//! The end-of-run figures are computed from the parameters alone, not from
//! the stepped samples.

use mechanics::Trajectory;
use serde::Serialize;
use simcore::MotionParams;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    rows: Vec<ReportRow>,
    final_velocity: f64,
    final_distance: f64,
}

impl ResultsReport {
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }

    /// m/s at the end of the run
    pub fn final_velocity(&self) -> f64 {
        self.final_velocity
    }

    /// m travelled by the end of the run
    pub fn final_distance(&self) -> f64 {
        self.final_distance
    }

    /// One `label<TAB>value` line per row, for clipboard export.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}\t{}", row.label, row.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub const ROW_TYPE: &str = "Type";
pub const ROW_TOTAL_TIME: &str = "Total time (s)";
pub const ROW_INITIAL_VELOCITY: &str = "Initial velocity (m/s)";
pub const ROW_ACCELERATION: &str = "Acceleration (m/s²)";
pub const ROW_FINAL_VELOCITY: &str = "Final velocity (m/s)";
pub const ROW_FINAL_DISTANCE: &str = "Distance travelled (m)";

pub fn summarize(params: &MotionParams) -> ResultsReport {
    let trajectory = Trajectory::new(*params);
    let final_velocity = trajectory.final_velocity();
    let final_distance = trajectory.final_displacement();

    let rows = vec![
        ReportRow {
            label: ROW_TYPE,
            value: params.motion_type.description().to_string(),
        },
        ReportRow {
            label: ROW_TOTAL_TIME,
            value: fixed2(params.duration),
        },
        ReportRow {
            label: ROW_INITIAL_VELOCITY,
            value: fixed2(params.initial_velocity),
        },
        ReportRow {
            label: ROW_ACCELERATION,
            value: fixed2(params.effective_acceleration()),
        },
        ReportRow {
            label: ROW_FINAL_VELOCITY,
            value: fixed2(final_velocity),
        },
        ReportRow {
            label: ROW_FINAL_DISTANCE,
            value: fixed2(final_distance),
        },
    ];

    ResultsReport {
        rows,
        final_velocity,
        final_distance,
    }
}

fn fixed2(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}
