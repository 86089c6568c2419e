use std::path::PathBuf;

use anyhow::{ensure, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_mission_planner::calculator::compute_orbital_parameters;
use rust_mission_planner::planning::{
    generate_launch_windows, read_catalog, Catalog, LaunchVehicle, TrajectoryEstimator,
};

#[derive(Debug, Parser)]
#[command(name = "mission-planner")]
#[command(about = "Orbital parameters, launch estimates, and launch windows")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Orbital parameters for an Earth orbit at a mean altitude
    Orbit {
        /// Altitude above the mean surface, in km
        #[arg(long, default_value_t = 400.0)]
        altitude: f64,
        /// Inclination, in degrees
        #[arg(long, default_value_t = 51.6)]
        inclination: f64,
        #[arg(long, default_value_t = 0.0001)]
        eccentricity: f64,
        #[arg(long)]
        json: bool,
    },
    /// Delta-v and fuel estimate from a launch site to a target orbit
    Trajectory {
        #[arg(long, default_value = "kennedy")]
        site: String,
        #[arg(long, default_value = "leo")]
        target: String,
        /// Payload mass, in kg
        #[arg(long, default_value_t = 1000.0)]
        payload: f64,
        /// Specific impulse, in s
        #[arg(long)]
        isp: Option<f64>,
        /// Catalog file to use instead of the built-in sites and targets
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Simulated launch windows for the week starting at a date
    Windows {
        /// First day, as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Seed for reproducible windows
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Orbital parameters of the reference satellites
    Satellites {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Orbit {
            altitude,
            inclination,
            eccentricity,
            json,
        } => {
            let params = compute_orbital_parameters(altitude, inclination, eccentricity)?;
            if json {
                return print_json(&params);
            }

            println!("Orbital parameters");
            println!("- Semi-major axis: {:.2} km", params.semi_major_axis_km);
            println!("- Orbital period: {:.2} min", params.period_minutes);
            println!("- Orbital velocity: {:.2} km/h", params.velocity_km_per_hour);
            println!("- Apogee: {:.2} km", params.apogee_km);
            println!("- Perigee: {:.2} km", params.perigee_km);
            println!("- Inclination: {:.1} deg", params.inclination_deg);
        }
        Command::Trajectory {
            site,
            target,
            payload,
            isp,
            catalog,
            json,
        } => {
            let catalog = load_catalog(catalog)?;
            let site = catalog.site(&site)?;
            let target = catalog.target(&target)?;

            let mut vehicle = LaunchVehicle::default();
            if let Some(isp) = isp {
                ensure!(isp > 0.0, "specific impulse must be positive, got {}", isp);
                vehicle.specific_impulse = isp;
            }

            let estimate = TrajectoryEstimator::with_vehicle(vehicle).estimate(site, target, payload)?;
            if json {
                return print_json(&estimate);
            }

            println!("{} ({}) to {}", site.name, site.country, target.name);
            println!("- Delta-v: {:.2} km/s", estimate.delta_v_km_per_sec);
            println!("- Fuel mass: {:.0} kg", estimate.fuel_mass_kg);
            println!("- Flight time: {:.1} min", estimate.flight_time_minutes);
            println!("- Efficiency: {:.1}%", estimate.efficiency_percent);
        }
        Command::Windows { date, seed, json } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let windows = generate_launch_windows(&mut rng, date);
            if json {
                return print_json(&windows);
            }

            for window in windows {
                println!(
                    "{} {} - {} min, {}% efficiency, {:?} weather",
                    window.date.format("%a %b %d %Y"),
                    window.time.format("%H:%M"),
                    window.duration_minutes,
                    window.efficiency_percent,
                    window.weather,
                );
            }
        }
        Command::Satellites { catalog } => {
            let catalog = load_catalog(catalog)?;
            for satellite in catalog.satellites() {
                let params =
                    compute_orbital_parameters(satellite.altitude_km, satellite.inclination_deg, 0.0)
                        .with_context(|| format!("bad catalog entry for {}", satellite.name))?;

                println!("{} [{}]", satellite.name, satellite.status);
                println!("- Altitude: {} km", satellite.altitude_km);
                println!("- Inclination: {:.1} deg", params.inclination_deg);
                println!("- Orbital period: {:.2} min", params.period_minutes);
                println!("- Orbital velocity: {:.2} km/h", params.velocity_km_per_hour);
                println!();
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Ok(read_catalog(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
