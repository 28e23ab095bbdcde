use std::time::{Duration, Instant};

use control::{NumericField, PlaybackController, PlaybackState, RawInputs, ResultsReport};
use egui::{Color32, CornerRadius, Sense, Stroke};
use egui_plot::{Line, Plot};
use simcore::{MotionType, SeriesChannel, SimConfig, SimError};

use crate::sinks::{PlotSeries, TrackView};

const TRACK_HEIGHT: f32 = 70.0;
const CAR_WIDTH: f32 = 40.0;
const MINI_TRACK_HEIGHT: f32 = 14.0;
const MINI_DOT_SIZE: f32 = 26.0;
const PLOT_HEIGHT: f32 = 180.0;

const ACC_COLOR: Color32 = Color32::from_rgb(245, 158, 11);
const VEL_COLOR: Color32 = Color32::from_rgb(56, 189, 248);
const DIST_COLOR: Color32 = Color32::from_rgb(52, 211, 153);

pub struct Dashboard {
    controller: PlaybackController<TrackView, PlotSeries>,
    last_frame: Instant,
    results: Option<ResultsReport>,
    show_results: bool,
}

impl Dashboard {
    pub fn new(config: SimConfig, with_charts: bool) -> Result<Self, SimError> {
        let mut controller: PlaybackController<TrackView, PlotSeries> =
            PlaybackController::new(config, TrackView::new(800.0))?;
        if with_charts {
            controller.attach_charts(PlotSeries::default());
        }
        Ok(Self {
            controller,
            last_frame: Instant::now(),
            results: None,
            show_results: false,
        })
    }

    /// Start from inputs given on the command line.
    pub fn apply_inputs(&mut self, inputs: RawInputs) {
        self.controller.set_inputs(inputs);
    }

    fn status_color(state: PlaybackState) -> Color32 {
        match state {
            PlaybackState::Stopped => Color32::from_rgb(55, 65, 81),
            PlaybackState::Running => Color32::from_rgb(0, 187, 85),
            PlaybackState::Paused => Color32::from_rgb(51, 65, 85),
            PlaybackState::Finished => Color32::from_rgb(37, 99, 235),
        }
    }

    fn numeric_control(&mut self, ui: &mut egui::Ui, label: &str, field: NumericField, enabled: bool) {
        ui.label(label);
        let mut text = self.controller.inputs().field(field).to_string();
        let response = ui.add_enabled(enabled, egui::TextEdit::singleline(&mut text).desired_width(60.0));
        if response.changed() {
            self.controller.set_field(field, text);
        }
        if ui.add_enabled(enabled, egui::Button::new("−")).clicked() {
            self.controller.nudge(field, false);
        }
        if ui.add_enabled(enabled, egui::Button::new("+")).clicked() {
            self.controller.nudge(field, true);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let current = self.controller.params().motion_type;
            let mut selected = current;
            egui::ComboBox::from_id_salt("motion_type")
                .selected_text(selected.description())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, MotionType::Uniform, MotionType::Uniform.description());
                    ui.selectable_value(
                        &mut selected,
                        MotionType::UniformlyAccelerated,
                        MotionType::UniformlyAccelerated.description(),
                    );
                });
            if selected != current {
                self.controller.set_motion_type(selected);
            }

            ui.separator();
            self.numeric_control(ui, "v0 [m/s]", NumericField::InitialVelocity, true);
            ui.separator();
            let editable = self.controller.acceleration_editable();
            self.numeric_control(ui, "a [m/s²]", NumericField::Acceleration, editable);
            ui.separator();
            self.numeric_control(ui, "T [s]", NumericField::Duration, true);
        });
        if !self.controller.acceleration_editable() {
            ui.weak("Acceleration is fixed at 0 for uniform motion.");
        }

        ui.horizontal(|ui| {
            if ui.button(self.controller.toggle_label()).clicked() {
                self.controller.toggle_play();
            }
            if ui.button("⟲ Reset").clicked() {
                self.controller.reset();
                self.results = None;
            }
            let results_button = ui.add_enabled(self.controller.results_available(), egui::Button::new("Results"));
            if results_button.clicked() {
                match self.controller.results() {
                    Ok(report) => {
                        self.results = Some(report);
                        self.show_results = true;
                    }
                    Err(err) => log::warn!("{err}"),
                }
            }

            ui.separator();
            let state = self.controller.state();
            egui::Frame::new()
                .fill(Self::status_color(state))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.colored_label(Color32::WHITE, self.controller.status_label());
                });
            ui.label(format!("t = {:.2} s", self.controller.time()));
            ui.label(format!("scale = {:.2} px/m", self.controller.px_per_meter()));
        });
    }

    fn track(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, TRACK_HEIGHT), Sense::hover());

        let track_width = rect.width() as f64;
        if (self.controller.surface().width - track_width).abs() > 0.5 {
            self.controller.surface_mut().width = track_width;
            self.controller.on_resize();
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::same(6), Color32::from_rgb(31, 41, 55));
        let lane_y = rect.center().y;
        painter.hline(rect.x_range(), lane_y, Stroke::new(1.0, Color32::from_gray(110)));

        let car_x = rect.left() + self.controller.surface().marker_px as f32;
        let car = egui::Rect::from_min_size(
            egui::pos2(car_x, lane_y - 12.0),
            egui::vec2(CAR_WIDTH, 24.0),
        );
        painter.rect_filled(car, CornerRadius::same(4), Color32::from_rgb(239, 68, 68));

        let (mini, _) = ui.allocate_exact_size(egui::vec2(width, MINI_TRACK_HEIGHT), Sense::hover());
        let painter = ui.painter_at(mini);
        painter.rect_filled(mini, CornerRadius::same(7), Color32::from_rgb(55, 65, 81));
        let travel = (mini.width() - MINI_DOT_SIZE).max(0.0);
        let dot_x = mini.left() + MINI_DOT_SIZE / 2.0 + self.controller.surface().indicator as f32 * travel;
        painter.circle_filled(egui::pos2(dot_x, mini.center().y), MINI_TRACK_HEIGHT / 2.0, Color32::WHITE);
    }

    fn charts(&self, ui: &mut egui::Ui) {
        let Some(series) = self.controller.charts() else {
            ui.colored_label(Color32::YELLOW, "Charts are disabled.");
            return;
        };
        for (channel, color) in [
            (SeriesChannel::Acceleration, ACC_COLOR),
            (SeriesChannel::Velocity, VEL_COLOR),
            (SeriesChannel::Distance, DIST_COLOR),
        ] {
            Plot::new(channel.axis_label())
                .height(PLOT_HEIGHT)
                .allow_scroll(false)
                .include_x(0.0)
                .include_y(0.0)
                .x_axis_label("time [s]")
                .y_axis_label(channel.axis_label())
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(channel.axis_label(), series.plot_points(channel)).color(color));
                });
        }
    }

    fn results_window(&mut self, ctx: &egui::Context) {
        let Some(report) = self.results.as_ref() else {
            return;
        };
        egui::Window::new("Results")
            .open(&mut self.show_results)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("results_grid").striped(true).show(ui, |ui| {
                    for row in report.rows() {
                        ui.strong(row.label);
                        ui.label(&row.value);
                        ui.end_row();
                    }
                });
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(report.to_text());
                }
            });
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.controller.advance(elapsed);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
            if let Some(notice) = self.controller.notice() {
                ui.colored_label(Color32::YELLOW, notice);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.track(ui);
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| self.charts(ui));
        });

        if !self.controller.results_available() {
            self.show_results = false;
        }
        self.results_window(ctx);

        ctx.request_repaint_after(Duration::from_millis(10));
    }
}
