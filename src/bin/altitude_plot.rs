use std::fs;
use std::ops::Range;

use plotters::prelude::*;
use rust_mission_planner::calculator::compute_orbital_parameters;

const MAX_ALTITUDE: f64 = 40_000.0;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    fs::create_dir_all("plots")?;

    draw_plot(
        "plots/period-vs-altitude.png",
        "Orbital period (min)",
        |altitude| compute_orbital_parameters(altitude, 0.0, 0.0).map(|p| p.period_minutes),
        0.0..1600.0,
        400,
    )?;
    draw_plot(
        "plots/velocity-vs-altitude.png",
        "Orbital velocity (km/h)",
        |altitude| compute_orbital_parameters(altitude, 0.0, 0.0).map(|p| p.velocity_km_per_hour),
        0.0..30_000.0,
        400,
    )?;

    Ok(())
}

fn draw_plot<E>(
    name: &str,
    y_label: &str,
    func: impl Fn(f64) -> Result<f64, E>,
    y_range: Range<f64>,
    n_points: usize,
) -> Result<(), Box<dyn std::error::Error>>
where
    E: std::error::Error + 'static,
{
    let points = (0..=n_points)
        .map(|i| MAX_ALTITUDE * i as f64 / n_points as f64)
        .map(|altitude| func(altitude).map(|value| (altitude, value)))
        .collect::<Result<Vec<_>, E>>()?;

    let root = BitMapBackend::new(name, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..MAX_ALTITUDE, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(LineSeries::new(points, &RED))?;
    root.present()?;

    tracing::info!(path = name, "wrote plot");
    Ok(())
}
