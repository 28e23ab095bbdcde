//! Playback Controller
//!
//! Owns the simulation state and drives the stepper from a repeating tick.
//!
//! ```text
//!            play()              pause()
//! Stopped ───────────▶ Running ───────────▶ Paused
//!    ▲                  │   ▲                 │
//!    │                  │   └──── play() ─────┘
//!    │      end reached │
//!    │                  ▼
//!    └──── reset() ── Finished
//! ```
//!
//! `reset()` is accepted in every state, and any parameter change performs
//! one. Every transition out of `Running` cancels the tick task first.

use std::fmt;
use std::time::Duration;

use mechanics::{MarkerLayout, SimClock, StepOutcome, Stepper, TrackScale, Trajectory};
use simcore::{
    Model, MotionParams, MotionType, RenderSurface, SampleSeries, SeriesChannel, SeriesSink,
    SimConfig, SimError,
};
use thiserror::Error;

use crate::params::{NumericField, ParameterReader, RawInputs};
use crate::report::{summarize, ResultsReport};
use crate::scheduler::{IntervalScheduler, TaskHandle, TickScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Running,
    Paused,
    Finished,
}

impl PlaybackState {
    /// Run-state label shown next to the controls
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Running => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Finished => "Finished",
        }
    }

    /// Caption of the play/pause toggle
    pub fn toggle_label(self) -> &'static str {
        match self {
            PlaybackState::Stopped => "Start",
            PlaybackState::Running => "Pause",
            PlaybackState::Paused => "Continue",
            PlaybackState::Finished => "Restart",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("results are only available after the run has finished (state: {0})")]
    ResultsUnavailable(PlaybackState),
}

pub const CHARTS_MISSING_NOTICE: &str =
    "Charts are unavailable; the animation runs without plots.";

pub struct PlaybackController<R, C, S = IntervalScheduler>
where
    R: RenderSurface,
    C: SeriesSink,
    S: TickScheduler,
{
    config: SimConfig,
    reader: ParameterReader,
    scale: TrackScale,
    layout: MarkerLayout,
    stepper: Stepper,

    inputs: RawInputs,
    acceleration_editable: bool,
    params: MotionParams,
    trajectory: Trajectory,
    clock: SimClock,
    px_per_meter: f64,
    marker_px: f64,
    series: SampleSeries,

    state: PlaybackState,
    scheduler: S,
    task: Option<TaskHandle>,

    surface: R,
    charts: Option<C>,
    notice: Option<&'static str>,
}

impl<R, C> PlaybackController<R, C, IntervalScheduler>
where
    R: RenderSurface,
    C: SeriesSink,
{
    pub fn new(config: SimConfig, surface: R) -> Result<Self, SimError> {
        Self::with_scheduler(config, surface, IntervalScheduler::new())
    }
}

impl<R, C, S> PlaybackController<R, C, S>
where
    R: RenderSurface,
    C: SeriesSink,
    S: TickScheduler,
{
    /// Create a stopped controller showing the configured default parameters.
    /// Fails if `config` does not validate.
    pub fn with_scheduler(config: SimConfig, surface: R, scheduler: S) -> Result<Self, SimError> {
        config.validate()?;
        let reader = ParameterReader::from_config(&config);
        let inputs = RawInputs::from_params(&config.defaults);
        let params = reader.read(&inputs);
        let layout = MarkerLayout::from_config(&config);
        let mut controller = Self {
            reader,
            scale: TrackScale::from_config(&config),
            layout,
            stepper: Stepper::from_config(&config),
            inputs,
            acceleration_editable: true,
            params,
            trajectory: Trajectory::new(params).with_origin(layout.origin),
            clock: SimClock::new(),
            px_per_meter: config.min_px_per_meter,
            marker_px: layout.start_px(),
            series: SampleSeries::new(),
            state: PlaybackState::Stopped,
            scheduler,
            task: None,
            surface,
            charts: None,
            notice: None,
            config,
        };
        controller.reset();
        Ok(controller)
    }

    /// Hand over the charting collaborator. Samples recorded so far are
    /// replayed into it.
    pub fn attach_charts(&mut self, mut charts: C) {
        charts.clear();
        for sample in self.series.iter() {
            push_sample(&mut charts, sample.t, sample.acceleration, sample.velocity, sample.position - self.layout.origin);
        }
        charts.redraw();
        self.charts = Some(charts);
        self.notice = None;
        log::info!("charts attached ({} samples replayed)", self.series.len());
    }

    // Transitions

    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Running => {
                log::debug!("play ignored: already running");
                return;
            }
            PlaybackState::Finished => {
                log::debug!("play ignored: run finished, reset first");
                return;
            }
            PlaybackState::Stopped | PlaybackState::Paused => {}
        }

        if self.charts.is_none() && self.notice.is_none() {
            log::warn!("no chart collaborator attached; plots are disabled");
            self.notice = Some(CHARTS_MISSING_NOTICE);
        }

        self.read_inputs();
        self.compute_scale();

        if self.clock.is_at_start() {
            self.clear_series();
            self.place_marker(self.layout.start_px());
        }

        let period = Duration::from_secs_f64(self.stepper.time_step());
        self.task = Some(self.scheduler.schedule_repeating(period));
        self.transition(PlaybackState::Running);
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Running {
            log::debug!("pause ignored in state {}", self.state);
            return;
        }
        self.cancel_task();
        self.transition(PlaybackState::Paused);
    }

    /// Single play/pause button. A finished run restarts from zero.
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Running => self.pause(),
            PlaybackState::Finished => {
                self.reset();
                self.play();
            }
            PlaybackState::Stopped | PlaybackState::Paused => self.play(),
        }
    }

    pub fn reset(&mut self) {
        self.cancel_task();
        self.clock.reset();
        self.read_inputs();
        self.compute_scale();
        self.clear_series();
        self.place_marker(self.layout.start_px());
        self.transition(PlaybackState::Stopped);
    }

    // Control surface

    /// Replace all raw inputs; always resets the run.
    pub fn set_inputs(&mut self, inputs: RawInputs) {
        self.inputs = inputs;
        self.reset();
    }

    pub fn set_motion_type(&mut self, motion_type: MotionType) {
        self.inputs.motion_type = motion_type.code().to_string();
        self.reset();
    }

    pub fn set_field(&mut self, field: NumericField, text: impl Into<String>) {
        *self.inputs.field_mut(field) = text.into();
        self.reset();
    }

    /// +/- buttons next to a numeric control.
    pub fn nudge(&mut self, field: NumericField, up: bool) {
        let step = match field {
            NumericField::InitialVelocity => self.config.nudge.velocity,
            NumericField::Acceleration => self.config.nudge.acceleration,
            NumericField::Duration => self.config.nudge.duration,
        };
        self.inputs.nudge(field, if up { step } else { -step });
        self.reset();
    }

    /// The track changed size; refit the scale without touching the run.
    pub fn on_resize(&mut self) {
        self.compute_scale();
        let offset = match self.series.last() {
            Some(sample) => self.layout.offset_px(sample.position, self.px_per_meter),
            None => self.layout.start_px(),
        };
        self.place_marker(offset);
    }

    // Clock

    /// Let `elapsed` wall-clock time pass and run the ticks that came due.
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed = elapsed.min(Duration::from_secs_f64(self.config.max_catch_up));
        let fired = self.scheduler.advance(elapsed);
        let mut ticks = 0;
        for handle in fired {
            if self.state != PlaybackState::Running || self.task != Some(handle) {
                continue;
            }
            self.tick();
            ticks += 1;
        }
        ticks
    }

    fn tick(&mut self) {
        let StepOutcome { sample, finished, .. } = self.stepper.step(&self.trajectory, &mut self.clock);
        self.series.push(sample);

        let distance = sample.position - self.layout.origin;
        if let Some(charts) = self.charts.as_mut() {
            push_sample(charts, sample.t, sample.acceleration, sample.velocity, distance);
            charts.redraw();
        }

        self.place_marker(self.layout.offset_px(sample.position, self.px_per_meter));

        if finished {
            self.cancel_task();
            self.transition(PlaybackState::Finished);
        }
    }

    // Results

    pub fn results(&self) -> Result<ResultsReport, PlaybackError> {
        if self.state != PlaybackState::Finished {
            return Err(PlaybackError::ResultsUnavailable(self.state));
        }
        Ok(summarize(&self.params))
    }

    // Accessors

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn status_label(&self) -> &'static str {
        self.state.label()
    }

    pub fn toggle_label(&self) -> &'static str {
        self.state.toggle_label()
    }

    pub fn results_available(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn acceleration_editable(&self) -> bool {
        self.acceleration_editable
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn px_per_meter(&self) -> f64 {
        self.px_per_meter
    }

    pub fn marker_px(&self) -> f64 {
        self.marker_px
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Pending notice for the user, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn charts(&self) -> Option<&C> {
        self.charts.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // Internals

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            log::info!("playback {} -> {} at t = {:.2} s", self.state, next, self.clock.time());
        }
        self.state = next;
    }

    fn cancel_task(&mut self) {
        if let Some(handle) = self.task.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn read_inputs(&mut self) {
        self.params = self.reader.read(&self.inputs);
        self.acceleration_editable = self.inputs.reflect_motion_type(self.params.motion_type);
        self.trajectory = Trajectory::new(self.params).with_origin(self.layout.origin);
    }

    fn compute_scale(&mut self) {
        let available = self.scale.available_width(self.surface.track_width());
        self.px_per_meter = self.scale.px_per_meter(available, &self.params);
        log::debug!(
            "scale {:.3} px/m for {:.1} px of track ({:?})",
            self.px_per_meter,
            available,
            self.params
        );
    }

    fn clear_series(&mut self) {
        self.series.clear();
        if let Some(charts) = self.charts.as_mut() {
            charts.clear();
            charts.redraw();
        }
    }

    fn place_marker(&mut self, offset_px: f64) {
        self.marker_px = offset_px;
        self.surface.place_marker(offset_px);
        let fraction = self.layout.indicator_fraction(offset_px, self.surface.track_width());
        self.surface.place_indicator(fraction);
    }
}

fn push_sample<C: SeriesSink>(charts: &mut C, t: f64, acceleration: f64, velocity: f64, distance: f64) {
    let label = format!("{t:.2}");
    charts.append(SeriesChannel::Acceleration, t, &label, acceleration);
    charts.append(SeriesChannel::Velocity, t, &label, velocity);
    charts.append(SeriesChannel::Distance, t, &label, distance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::report::{ROW_FINAL_DISTANCE, ROW_FINAL_VELOCITY};

    #[derive(Debug, Default)]
    struct TestSurface {
        width: f64,
        markers: Vec<f64>,
        indicator: f64,
    }

    impl RenderSurface for TestSurface {
        fn track_width(&self) -> f64 {
            self.width
        }

        fn place_marker(&mut self, offset_px: f64) {
            self.markers.push(offset_px);
        }

        fn place_indicator(&mut self, fraction: f64) {
            self.indicator = fraction;
        }
    }

    #[derive(Debug, Default)]
    struct TestCharts {
        points: Vec<(SeriesChannel, f64, String, f64)>,
        redraws: usize,
        clears: usize,
    }

    impl SeriesSink for TestCharts {
        fn append(&mut self, channel: SeriesChannel, t: f64, label: &str, value: f64) {
            self.points.push((channel, t, label.to_string(), value));
        }

        fn redraw(&mut self) {
            self.redraws += 1;
        }

        fn clear(&mut self) {
            self.points.clear();
            self.clears += 1;
        }
    }

    type TestController = PlaybackController<TestSurface, TestCharts>;

    const TICK: Duration = Duration::from_millis(50);

    fn controller() -> TestController {
        let surface = TestSurface {
            width: 733.4,
            ..TestSurface::default()
        };
        let mut ctrl = TestController::new(SimConfig::default(), surface).unwrap();
        ctrl.attach_charts(TestCharts::default());
        ctrl
    }

    fn inputs(motion_type: &str, v0: &str, a: &str, duration: &str) -> RawInputs {
        RawInputs {
            motion_type: motion_type.to_string(),
            initial_velocity: v0.to_string(),
            acceleration: a.to_string(),
            duration: duration.to_string(),
        }
    }

    fn run_to_end(ctrl: &mut TestController) {
        ctrl.play();
        for _ in 0..100_000 {
            if ctrl.state() == PlaybackState::Finished {
                return;
            }
            ctrl.advance(TICK);
        }
        panic!("run never finished");
    }

    #[test]
    fn test_starts_stopped_with_defaults() {
        let ctrl = controller();
        assert_eq!(ctrl.state(), PlaybackState::Stopped);
        assert_eq!(ctrl.status_label(), "Stopped");
        assert_eq!(ctrl.toggle_label(), "Start");
        assert_eq!(*ctrl.params(), MotionParams::default());
        assert_relative_eq!(ctrl.marker_px(), 20.0);
        // (733.4 - 60) / (65.34 + 2)
        assert_relative_eq!(ctrl.px_per_meter(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ticks_follow_wall_clock() {
        let mut ctrl = controller();
        ctrl.play();
        assert_eq!(ctrl.state(), PlaybackState::Running);
        assert_eq!(ctrl.advance(Duration::from_millis(20)), 0);
        assert_eq!(ctrl.advance(Duration::from_millis(30)), 1);
        assert_eq!(ctrl.advance(Duration::from_millis(100)), 2);
        assert_eq!(ctrl.series().len(), 3);
        assert_relative_eq!(ctrl.time(), 0.15, epsilon = 1e-9);
    }

    #[test]
    fn test_double_play_keeps_one_timer() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.play();
        assert_eq!(ctrl.scheduler().active_tasks(), 1);
        ctrl.advance(TICK);
        assert_eq!(ctrl.series().len(), 1);
        assert_relative_eq!(ctrl.time(), 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_pause_and_resume_keeps_series() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.advance(TICK * 4);
        ctrl.pause();
        assert_eq!(ctrl.state(), PlaybackState::Paused);
        assert_eq!(ctrl.toggle_label(), "Continue");
        assert_eq!(ctrl.scheduler().active_tasks(), 0);

        assert_eq!(ctrl.advance(TICK * 4), 0);
        assert_eq!(ctrl.series().len(), 4);

        ctrl.play();
        ctrl.advance(TICK);
        assert_eq!(ctrl.series().len(), 5);
        assert_relative_eq!(ctrl.series().last().unwrap().t, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_run_finishes_and_reports() {
        let mut ctrl = controller();
        assert!(matches!(
            ctrl.results(),
            Err(PlaybackError::ResultsUnavailable(PlaybackState::Stopped))
        ));

        run_to_end(&mut ctrl);
        assert!(ctrl.results_available());
        assert_eq!(ctrl.scheduler().active_tasks(), 0);
        assert_eq!(ctrl.toggle_label(), "Restart");

        let last = ctrl.series().last().unwrap();
        assert!(last.t <= ctrl.params().duration + ctrl.config().time_step);

        let report = ctrl.results().unwrap();
        assert_eq!(report.value(ROW_FINAL_VELOCITY), Some("19.80"));
        assert_eq!(report.value(ROW_FINAL_DISTANCE), Some("65.34"));

        // The end sample lands on the right edge of the fitted scale
        assert_relative_eq!(ctrl.marker_px(), 20.0 + 65.34 * 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_finished_ignores_play_and_extra_time() {
        let mut ctrl = controller();
        run_to_end(&mut ctrl);
        let samples = ctrl.series().len();
        ctrl.play();
        assert_eq!(ctrl.state(), PlaybackState::Finished);
        assert_eq!(ctrl.advance(TICK * 10), 0);
        assert_eq!(ctrl.series().len(), samples);
    }

    #[test]
    fn test_toggle_restarts_finished_run() {
        let mut ctrl = controller();
        run_to_end(&mut ctrl);
        ctrl.toggle_play();
        assert_eq!(ctrl.state(), PlaybackState::Running);
        assert!(ctrl.series().is_empty());
        assert_relative_eq!(ctrl.time(), 0.0);
        ctrl.toggle_play();
        assert_eq!(ctrl.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.advance(TICK * 3);
        ctrl.reset();
        assert_eq!(ctrl.state(), PlaybackState::Stopped);
        assert_relative_eq!(ctrl.time(), 0.0);
        assert!(ctrl.series().is_empty());
        assert!(ctrl.charts().unwrap().points.is_empty());
        assert_eq!(ctrl.scheduler().active_tasks(), 0);
        assert_relative_eq!(ctrl.marker_px(), 20.0);
        assert_eq!(ctrl.advance(TICK * 3), 0);

        run_to_end(&mut ctrl);
        ctrl.reset();
        assert_eq!(ctrl.state(), PlaybackState::Stopped);
        assert!(!ctrl.results_available());
        assert!(ctrl.series().is_empty());
    }

    #[test]
    fn test_motion_type_change_mid_run_resets() {
        let mut ctrl = controller();
        ctrl.set_inputs(inputs("1", "10", "0", "5"));
        ctrl.play();
        ctrl.advance(TICK * 10);
        assert!(ctrl.time() > 0.0);

        ctrl.set_motion_type(MotionType::UniformlyAccelerated);
        assert_eq!(ctrl.state(), PlaybackState::Stopped);
        assert_relative_eq!(ctrl.time(), 0.0);
        assert!(ctrl.series().is_empty());
        assert_eq!(ctrl.scheduler().active_tasks(), 0);
        assert!(ctrl.acceleration_editable());
    }

    #[test]
    fn test_uniform_run_reports_zero_acceleration() {
        let mut ctrl = controller();
        ctrl.set_inputs(inputs("1", "10", "3", "5"));
        assert!(!ctrl.acceleration_editable());
        assert_eq!(ctrl.inputs().acceleration, "0");

        run_to_end(&mut ctrl);
        assert!(ctrl.series().iter().all(|s| s.acceleration == 0.0));
        let charts = ctrl.charts().unwrap();
        assert!(charts
            .points
            .iter()
            .filter(|(channel, ..)| *channel == SeriesChannel::Acceleration)
            .all(|(_, _, _, value)| *value == 0.0));

        let report = ctrl.results().unwrap();
        assert_eq!(report.value(ROW_FINAL_VELOCITY), Some("10.00"));
        assert_eq!(report.value(ROW_FINAL_DISTANCE), Some("50.00"));
    }

    #[test]
    fn test_chart_points_are_labelled() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.advance(TICK * 3);
        let charts = ctrl.charts().unwrap();
        let labels: Vec<_> = charts
            .points
            .iter()
            .filter(|(channel, ..)| *channel == SeriesChannel::Distance)
            .map(|(_, _, label, _)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["0.00", "0.05", "0.10"]);
        assert!(charts.redraws >= 3);
    }

    #[test]
    fn test_runs_without_charts() {
        let surface = TestSurface {
            width: 600.0,
            ..TestSurface::default()
        };
        let mut ctrl = TestController::new(SimConfig::default(), surface).unwrap();
        assert!(ctrl.notice().is_none());
        ctrl.play();
        assert_eq!(ctrl.notice(), Some(CHARTS_MISSING_NOTICE));
        ctrl.advance(TICK * 5);
        assert_eq!(ctrl.series().len(), 5);
        assert_eq!(ctrl.surface().markers.len(), 1 + 1 + 5);

        ctrl.attach_charts(TestCharts::default());
        assert!(ctrl.notice().is_none());
        assert_eq!(ctrl.charts().unwrap().points.len(), 15);
    }

    #[test]
    fn test_nudge_resets_and_updates_params() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.advance(TICK * 2);
        ctrl.nudge(NumericField::Duration, true);
        assert_eq!(ctrl.state(), PlaybackState::Stopped);
        assert_relative_eq!(ctrl.params().duration, 6.7, epsilon = 1e-9);

        ctrl.set_field(NumericField::Duration, "0,05");
        assert_relative_eq!(ctrl.params().duration, 0.2);
    }

    #[test]
    fn test_nudge_acceleration_stays_zero_for_uniform() {
        let mut ctrl = controller();
        ctrl.set_motion_type(MotionType::Uniform);
        ctrl.nudge(NumericField::Acceleration, true);
        assert_eq!(ctrl.params().acceleration, 0.0);
        assert_eq!(ctrl.inputs().acceleration, "0");
    }

    #[test]
    fn test_resize_refits_scale_without_reset() {
        let mut ctrl = controller();
        ctrl.play();
        ctrl.advance(TICK * 2);
        ctrl.surface_mut().width = 1406.8;
        ctrl.on_resize();
        assert_eq!(ctrl.state(), PlaybackState::Running);
        assert_eq!(ctrl.series().len(), 2);
        assert_relative_eq!(ctrl.px_per_meter(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_indicator_follows_marker() {
        let mut ctrl = controller();
        run_to_end(&mut ctrl);
        // marker at 673.4 px on a 733.4 px track, 80 px indicator inset
        assert_relative_eq!(ctrl.surface().indicator, 1.0);
        ctrl.reset();
        assert_relative_eq!(ctrl.surface().indicator, 20.0 / 653.4, epsilon = 1e-9);
    }

    #[test]
    fn test_large_wall_clock_gap_is_capped() {
        let mut ctrl = controller();
        ctrl.play();
        // 0.25 s cap => 5 ticks
        assert_eq!(ctrl.advance(Duration::from_secs(10)), 5);
    }

    #[test]
    fn test_uniform_fallback_pins_acceleration() {
        let mut config = SimConfig::default();
        config.fallbacks.motion_type = MotionType::Uniform;
        let surface = TestSurface {
            width: 733.4,
            ..TestSurface::default()
        };
        let mut ctrl = TestController::new(config, surface).unwrap();
        ctrl.set_inputs(inputs("x", "10", "4", "5"));
        assert_eq!(ctrl.params().motion_type, MotionType::Uniform);
        assert!(!ctrl.acceleration_editable());
        assert_eq!(ctrl.inputs().acceleration, "0");
        assert_eq!(ctrl.params().acceleration, 0.0);
    }

    #[test]
    fn test_uniform_defaults_start_locked() {
        let config = SimConfig::default().with_defaults(MotionParams {
            motion_type: MotionType::Uniform,
            initial_velocity: 10.0,
            acceleration: 2.0,
            duration: 5.0,
        });
        let ctrl = TestController::new(config, TestSurface::default()).unwrap();
        assert!(!ctrl.acceleration_editable());
        assert_eq!(ctrl.inputs().acceleration, "0");
        assert_eq!(ctrl.params().acceleration, 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        for time_step in [-0.05, f64::NAN, 0.0, 1e-7] {
            let config = SimConfig::default().with_time_step(time_step);
            assert!(matches!(
                TestController::new(config, TestSurface::default()),
                Err(SimError::InvalidConfig { field: "time_step", .. })
            ));
        }

        let mut config = SimConfig::default();
        config.max_catch_up = -1.0;
        assert!(matches!(
            TestController::new(config, TestSurface::default()),
            Err(SimError::InvalidConfig { field: "max_catch_up", .. })
        ));
    }
}
