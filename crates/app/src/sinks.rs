//! Collaborators backing the controller in the dashboard and headless runs.

use egui_plot::PlotPoints;
use simcore::{RenderSurface, SeriesChannel, SeriesSink};

/// Track drawn by the dashboard. The width is refreshed from the layout
/// every frame.
#[derive(Debug, Clone, Default)]
pub struct TrackView {
    pub width: f64,
    pub marker_px: f64,
    pub indicator: f64,
}

impl TrackView {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl RenderSurface for TrackView {
    fn track_width(&self) -> f64 {
        self.width
    }

    fn place_marker(&mut self, offset_px: f64) {
        self.marker_px = offset_px;
    }

    fn place_indicator(&mut self, fraction: f64) {
        self.indicator = fraction;
    }
}

#[derive(Debug, Clone, Default)]
struct Channel {
    points: Vec<[f64; 2]>,
    labels: Vec<String>,
}

/// Plot data for the acceleration, velocity and distance charts.
#[derive(Debug, Clone, Default)]
pub struct PlotSeries {
    channels: [Channel; 3],
    revision: u64,
}

fn index(channel: SeriesChannel) -> usize {
    match channel {
        SeriesChannel::Acceleration => 0,
        SeriesChannel::Velocity => 1,
        SeriesChannel::Distance => 2,
    }
}

impl PlotSeries {
    pub fn points(&self, channel: SeriesChannel) -> &[[f64; 2]] {
        &self.channels[index(channel)].points
    }

    pub fn labels(&self, channel: SeriesChannel) -> &[String] {
        &self.channels[index(channel)].labels
    }

    pub fn plot_points(&self, channel: SeriesChannel) -> PlotPoints<'_> {
        PlotPoints::from_iter(self.points(channel).iter().copied())
    }

    /// Bumped on every redraw request
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl SeriesSink for PlotSeries {
    fn append(&mut self, channel: SeriesChannel, t: f64, label: &str, value: f64) {
        let channel = &mut self.channels[index(channel)];
        channel.points.push([t, value]);
        channel.labels.push(label.to_string());
    }

    fn redraw(&mut self) {
        self.revision += 1;
    }

    fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.points.clear();
            channel.labels.clear();
        }
    }
}
