//! Mission planning: launch sites and targets, delta-v / fuel estimates, and
//! simulated launch windows.

pub mod catalog;
pub mod launch_windows;
pub mod trajectory;

pub use catalog::{read_catalog, Catalog, LaunchSite, Satellite, TargetOrbit};
pub use launch_windows::{generate_launch_windows, LaunchWindow, Weather};
pub use trajectory::{estimate_trajectory, LaunchVehicle, TrajectoryEstimate, TrajectoryEstimator};
