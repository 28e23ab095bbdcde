pub mod kinematics;
pub mod scale;
pub mod stepper;

pub use kinematics::Trajectory;
pub use scale::{MarkerLayout, TrackScale};
pub use stepper::{SimClock, StepOutcome, Stepper};
