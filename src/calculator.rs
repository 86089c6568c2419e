//! Orbital parameter calculator.
//!
//! Turns an altitude / inclination / eccentricity description of an Earth
//! orbit into the quantities shown on the orbital mechanics panel. The
//! altitude is treated as the mean altitude: it fixes the semimajor axis, and
//! the eccentricity then spreads the apses symmetrically around it.
//!
//! Nothing here rounds. Display precision is the caller's business.

use serde::Serialize;

use crate::astro::{CentralBody, Orbit};
use crate::consts::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::InvalidInputError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalInputs {
    /// Height above the mean surface, in km
    pub altitude_km: f64,
    /// Echoed back unvalidated
    pub inclination_deg: f64,
    /// Must be in [0, 1)
    pub eccentricity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalParameters {
    pub semi_major_axis_km: f64,
    pub period_minutes: f64,
    pub velocity_km_per_hour: f64,
    pub apogee_km: f64,
    pub perigee_km: f64,
    pub inclination_deg: f64,
}

impl OrbitalInputs {
    pub fn new(altitude_km: f64, inclination_deg: f64, eccentricity: f64) -> Self {
        Self {
            altitude_km,
            inclination_deg,
            eccentricity,
        }
    }

    /// Checks the inputs and builds the corresponding orbit. The orbit is
    /// placed with its ascending node and periapsis on the x axis.
    pub fn to_orbit(&self, body: &CentralBody) -> Result<Orbit<CentralBody>, InvalidInputError> {
        // Written so that NaN fails both checks
        if !(0.0..1.0).contains(&self.eccentricity) {
            tracing::debug!(eccentricity = self.eccentricity, "rejecting unbound orbit");
            return Err(InvalidInputError::Eccentricity(self.eccentricity));
        }

        let a = body.radius_at_altitude(self.altitude_km);
        if !(a > 0.0 && a.is_finite()) {
            tracing::debug!(semimajor_axis = a, "rejecting orbit below the center");
            return Err(InvalidInputError::OrbitalRadius(a));
        }

        Ok(Orbit::from_kepler(
            *body,
            a,
            self.eccentricity,
            self.inclination_deg.to_radians(),
            0.0,
            0.0,
        ))
    }

    pub fn compute_around(&self, body: &CentralBody) -> Result<OrbitalParameters, InvalidInputError> {
        let orbit = self.to_orbit(body)?;
        let a = orbit.semimajor_axis();

        // Both exist, since to_orbit only builds closed orbits
        let period = orbit
            .period()
            .ok_or(InvalidInputError::Eccentricity(self.eccentricity))?;
        let velocity = orbit
            .circular_velocity()
            .ok_or(InvalidInputError::Eccentricity(self.eccentricity))?;

        // The apses are measured from the surface, with the altitude as the
        // mean of the two.
        let apogee = body.altitude_at_radius(a * (1.0 + self.eccentricity));
        let perigee = body.altitude_at_radius(a * (1.0 - self.eccentricity));

        Ok(OrbitalParameters {
            semi_major_axis_km: a,
            period_minutes: period / SECONDS_PER_MINUTE,
            velocity_km_per_hour: velocity * SECONDS_PER_HOUR,
            apogee_km: apogee,
            perigee_km: perigee,
            inclination_deg: self.inclination_deg,
        })
    }
}

/// Orbital parameters of an Earth orbit at the given mean altitude.
pub fn compute_orbital_parameters(
    altitude_km: f64,
    inclination_deg: f64,
    eccentricity: f64,
) -> Result<OrbitalParameters, InvalidInputError> {
    OrbitalInputs::new(altitude_km, inclination_deg, eccentricity).compute_around(&CentralBody::EARTH)
}
