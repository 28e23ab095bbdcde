use serde::{Deserialize, Serialize};

// Motion state

/// Kind of rectilinear motion being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionType {
    /// Constant velocity, zero acceleration (MRU)
    Uniform,
    /// Constant acceleration (MRUA)
    #[default]
    UniformlyAccelerated,
}

impl MotionType {
    pub fn is_uniform(self) -> bool {
        matches!(self, MotionType::Uniform)
    }

    /// Numeric code used by selection controls (1 = uniform, 2 = accelerated).
    pub fn code(self) -> u8 {
        match self {
            MotionType::Uniform => 1,
            MotionType::UniformlyAccelerated => 2,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            MotionType::Uniform => "MRU",
            MotionType::UniformlyAccelerated => "MRUA",
        }
    }

    /// Human readable description for reports.
    pub fn description(self) -> &'static str {
        match self {
            MotionType::Uniform => "MRU (a = 0)",
            MotionType::UniformlyAccelerated => "MRUA (constant a)",
        }
    }
}

/// Validated motion parameters, SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionParams {
    pub motion_type: MotionType,
    /// m/s
    pub initial_velocity: f64,
    /// m/s^2, always 0 for uniform motion once constrained
    pub acceleration: f64,
    /// s
    pub duration: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        MotionParams {
            motion_type: MotionType::UniformlyAccelerated,
            initial_velocity: 0.0,
            acceleration: 3.0,
            duration: 6.6,
        }
    }
}

impl MotionParams {
    /// Acceleration actually acting on the body.
    pub fn effective_acceleration(&self) -> f64 {
        if self.motion_type.is_uniform() {
            0.0
        } else {
            self.acceleration
        }
    }

    /// Force the data constraints: zero acceleration for uniform motion and a
    /// duration floor.
    pub fn constrain(mut self, min_duration: f64) -> Self {
        if self.motion_type.is_uniform() {
            self.acceleration = 0.0;
        }
        if self.duration.is_nan() || self.duration < min_duration {
            self.duration = min_duration;
        }
        self
    }
}

/// One stepped observation of the moving body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub acceleration: f64,
    pub velocity: f64,
    pub position: f64,
}

/// Samples accumulated since the last reset, in time order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub dt: f64,
    pub t: f64,
}

// Model traits

pub trait Model {
    fn reset(&mut self);
}

/// Closed-form description of a body's motion over time.
pub trait MotionModel {
    fn acceleration_at(&self, t: f64) -> f64;
    fn velocity_at(&self, t: f64) -> f64;
    fn position_at(&self, t: f64) -> f64;

    fn sample(&self, t: f64) -> Sample {
        Sample {
            t,
            acceleration: self.acceleration_at(t),
            velocity: self.velocity_at(t),
            position: self.position_at(t),
        }
    }
}

// Collaborator traits

/// Where the moving body is drawn.
pub trait RenderSurface {
    /// Full width of the track in pixels.
    fn track_width(&self) -> f64;
    /// Horizontal pixel offset of the main marker.
    fn place_marker(&mut self, offset_px: f64);
    /// Position of the secondary indicator in [0, 1].
    fn place_indicator(&mut self, fraction: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesChannel {
    Acceleration,
    Velocity,
    Distance,
}

impl SeriesChannel {
    pub const ALL: [SeriesChannel; 3] = [
        SeriesChannel::Acceleration,
        SeriesChannel::Velocity,
        SeriesChannel::Distance,
    ];

    /// Axis title including units.
    pub fn axis_label(self) -> &'static str {
        match self {
            SeriesChannel::Acceleration => "acceleration [m/s²]",
            SeriesChannel::Velocity => "velocity [m/s]",
            SeriesChannel::Distance => "distance [m]",
        }
    }
}

/// Charting backend fed one point per channel on every tick.
pub trait SeriesSink {
    fn append(&mut self, channel: SeriesChannel, t: f64, label: &str, value: f64);
    fn redraw(&mut self);
    fn clear(&mut self);
}
