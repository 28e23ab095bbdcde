//! Playback control for the kinematics simulator
//!
//! This crate provides:
//! - Parameter reading from raw control text
//! - A tick scheduler with cancellable repeating tasks
//! - The playback state machine driving the stepper
//! - The end-of-run results report

pub mod params;
pub mod playback;
pub mod report;
pub mod scheduler;

pub use params::*;
pub use playback::*;
pub use report::{summarize, ReportRow, ResultsReport};
pub use scheduler::*;
