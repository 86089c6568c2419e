pub mod astro;
pub mod calculator;
pub mod consts;
pub mod error;
pub mod math;
pub mod planning;

pub use calculator::{compute_orbital_parameters, OrbitalInputs, OrbitalParameters};
pub use error::{CatalogError, InvalidInputError};
pub use planning::{estimate_trajectory, TrajectoryEstimate};
