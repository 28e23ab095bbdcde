mod dashboard;
mod headless;
mod sinks;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use control::RawInputs;
use simcore::SimConfig;
use simplelog::{ColorChoice, Config, LevelFilter, TerminalMode, TermLogger};

use crate::dashboard::Dashboard;
use crate::headless::ReportFormat;

/// Uniform and uniformly accelerated motion simulator
#[derive(Parser, Debug)]
#[command(name = "kinematics-sim")]
struct Cli {
    /// JSON file overriding the default simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Run without plots
    #[arg(long)]
    no_charts: bool,

    /// Run to completion without a window and print the samples and results
    #[arg(long)]
    headless: bool,

    /// Print the headless report as JSON
    #[arg(long, requires = "headless")]
    json: bool,

    /// Motion type: 1 / mru / uniform or 2 / mrua / accelerated
    #[arg(long = "type")]
    motion_type: Option<String>,

    /// Initial velocity (m/s)
    #[arg(long, allow_hyphen_values = true)]
    v0: Option<String>,

    /// Acceleration (m/s²)
    #[arg(long, allow_hyphen_values = true)]
    accel: Option<String>,

    /// Duration (s)
    #[arg(long, allow_hyphen_values = true)]
    duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn raw_inputs(&self, config: &SimConfig) -> RawInputs {
        let defaults = RawInputs::from_params(&config.defaults);
        RawInputs {
            motion_type: self.motion_type.clone().unwrap_or(defaults.motion_type),
            initial_velocity: self.v0.clone().unwrap_or(defaults.initial_velocity),
            acceleration: self.accel.clone().unwrap_or(defaults.acceleration),
            duration: self.duration.clone().unwrap_or(defaults.duration),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    TermLogger::init(cli.log_level.into(), Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let config = match &cli.config {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::default(),
    };
    let inputs = cli.raw_inputs(&config);

    if cli.headless {
        let format = if cli.json { ReportFormat::Json } else { ReportFormat::Table };
        let stdout = std::io::stdout();
        headless::run(config, inputs, !cli.no_charts, format, &mut stdout.lock())?;
        return Ok(());
    }

    let mut dashboard = Dashboard::new(config, !cli.no_charts)?;
    dashboard.apply_inputs(inputs);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_title("Kinematics Simulator (MRU / MRUA)"),
        ..Default::default()
    };
    eframe::run_native(
        "Kinematics Simulator",
        options,
        Box::new(|_cc| Ok(Box::new(dashboard))),
    )?;
    Ok(())
}
