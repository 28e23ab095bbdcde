//! Headless runs: the dashboard's controller driven by a virtual clock.

use std::io::Write;
use std::time::Duration;

use control::{PlaybackController, PlaybackState, RawInputs, ResultsReport};
use simcore::SimConfig;

use crate::sinks::{PlotSeries, TrackView};

/// Track width used when there is no window to measure
pub const HEADLESS_TRACK_WIDTH: f64 = 960.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
}

/// Run to completion and write the sample CSV followed by the report.
pub fn run(
    config: SimConfig,
    inputs: RawInputs,
    with_charts: bool,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<ResultsReport, Box<dyn std::error::Error>> {
    let mut controller: PlaybackController<TrackView, PlotSeries> =
        PlaybackController::new(config, TrackView::new(HEADLESS_TRACK_WIDTH))?;
    if with_charts {
        controller.attach_charts(PlotSeries::default());
    }
    controller.set_inputs(inputs);
    controller.play();

    let tick = Duration::from_secs_f64(controller.config().time_step);
    let max_ticks = max_ticks(controller.params().duration, controller.config().time_step);
    let mut ticks = 0;
    while controller.state() == PlaybackState::Running && ticks <= max_ticks {
        ticks += controller.advance(tick);
    }
    log::info!(
        "headless {} run done: {} samples, scale {:.3} px/m",
        controller.params().motion_type.short_name(),
        controller.series().len(),
        controller.px_per_meter()
    );

    // The track origin is at 0 m, so position is the distance travelled
    writeln!(out, "t,acceleration,velocity,distance")?;
    for sample in controller.series().iter() {
        writeln!(
            out,
            "{:.6},{:.6},{:.6},{:.6}",
            sample.t, sample.acceleration, sample.velocity, sample.position
        )?;
    }

    let report = controller.results()?;
    writeln!(out)?;
    match format {
        ReportFormat::Table => writeln!(out, "{}", report.to_text())?,
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(report)
}

fn max_ticks(duration: f64, time_step: f64) -> usize {
    (duration / time_step).ceil() as usize + 2
}
