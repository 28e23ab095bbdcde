use mechanics::{SimClock, Stepper, Trajectory};
use plotters::prelude::*;
use simcore::{MotionParams, MotionType, SimConfig};

fn draw_series(
    filename: &str,
    title: &str,
    y_label: &str,
    t: &[f64],
    y: &[f64],
    color: RGBColor,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(filename, (1024, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let t_max = t.iter().cloned().fold(0.0_f64, f64::max);
    let mut y_min = y.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let mut y_max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max).max(0.0);
    // Constant series would give an empty range
    if (y_max - y_min).abs() < 1e-9 {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("Arial", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max.max(0.2), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("time [s]")
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(LineSeries::new(
        t.iter().cloned().zip(y.iter().cloned()),
        &color,
    ))?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimConfig::default();
    let params = MotionParams {
        motion_type: MotionType::UniformlyAccelerated,
        initial_velocity: 2.0,
        acceleration: 1.5,
        duration: 8.0,
    }
    .constrain(config.min_duration);

    let trajectory = Trajectory::new(params);
    let stepper = Stepper::from_config(&config);
    let mut clock = SimClock::new();

    let mut t = Vec::new();
    let mut acc = Vec::new();
    let mut vel = Vec::new();
    let mut dist = Vec::new();
    loop {
        let outcome = stepper.step(&trajectory, &mut clock);
        t.push(outcome.sample.t);
        acc.push(outcome.sample.acceleration);
        vel.push(outcome.sample.velocity);
        dist.push(outcome.sample.position - trajectory.origin());
        if outcome.finished {
            break;
        }
    }

    draw_series("acceleration.png", "Acceleration vs Time", "acceleration [m/s²]", &t, &acc, RGBColor(245, 158, 11))?;
    draw_series("velocity.png", "Velocity vs Time", "velocity [m/s]", &t, &vel, RGBColor(56, 189, 248))?;
    draw_series("distance.png", "Distance vs Time", "distance [m]", &t, &dist, RGBColor(52, 211, 153))?;

    println!("Wrote plots: acceleration.png, velocity.png, distance.png ({} samples)", t.len());
    Ok(())
}
