//! Track scale and marker placement
//!
//! The scale is fitted so the predicted end of the run, plus a margin of
//! visible track, spans the usable track width.

use simcore::{MotionParams, SimConfig};

use crate::kinematics::Trajectory;

/// Converts meters on the track into pixels on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackScale {
    /// Lower bound of the factor (px/m)
    pub min_px_per_meter: f64,
    /// Smallest span fitted to the track (m)
    pub min_span_m: f64,
    /// Track kept visible beyond the predicted displacement (m)
    pub span_margin_m: f64,
    /// Track width not available for scaling (px)
    pub inset_px: f64,
}

impl Default for TrackScale {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl TrackScale {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            min_px_per_meter: config.min_px_per_meter,
            min_span_m: config.min_span_m,
            span_margin_m: config.span_margin_m,
            inset_px: config.scale_inset_px,
        }
    }

    /// Usable width for a track of `track_width` pixels. Non-finite widths
    /// count as zero.
    pub fn available_width(&self, track_width: f64) -> f64 {
        if track_width.is_finite() {
            track_width - self.inset_px
        } else {
            0.0
        }
    }

    /// Pixels per meter for `params` on `available_width` pixels of track.
    ///
    /// `max(min_px, w / max(min_span, |xT| + margin))`, so the result is never
    /// below `min_px_per_meter` whatever the sign of the displacement.
    pub fn px_per_meter(&self, available_width: f64, params: &MotionParams) -> f64 {
        let x_end = Trajectory::new(*params).final_displacement();
        let span = self.min_span_m.max(x_end.abs() + self.span_margin_m);
        let width = if available_width.is_finite() { available_width } else { 0.0 };
        let fitted = width / span;
        // f64::max ignores a NaN operand
        self.min_px_per_meter.max(fitted)
    }
}

/// Pixel layout of the marker and the mini-track indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLayout {
    pub margin_px: f64,
    pub indicator_inset_px: f64,
    /// Reference position for displayed distance (m)
    pub origin: f64,
}

impl Default for MarkerLayout {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl MarkerLayout {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            margin_px: config.marker_margin_px,
            indicator_inset_px: config.indicator_inset_px,
            origin: 0.0,
        }
    }

    /// Horizontal offset of the marker for a body at `position`.
    pub fn offset_px(&self, position: f64, px_per_meter: f64) -> f64 {
        self.margin_px + (position - self.origin) * px_per_meter
    }

    /// Offset of the marker before the run starts.
    pub fn start_px(&self) -> f64 {
        self.margin_px
    }

    /// Fraction of the mini-track covered by a marker at `offset_px`.
    pub fn indicator_fraction(&self, offset_px: f64, track_width: f64) -> f64 {
        let usable = track_width - self.indicator_inset_px;
        if usable.is_nan() || usable <= 0.0 || !offset_px.is_finite() {
            return 0.0;
        }
        (offset_px / usable).clamp(0.0, 1.0)
    }
}
