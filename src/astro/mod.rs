//! A module for computing simple Keplerian orbits around a central body.
//!
//! The important items in this module are:
//! - [Orbit], which represents a two-body orbit around a primary. The primary
//!   is a type parameter, so the same orbit shape can be used with or without
//!   physical information attached.
//! - [CentralBody], which is a primary with a surface, so that distances from
//!   the center can be turned into altitudes.
//! - [track], for sampling positions along an orbit.
//!
//! Unless otherwise noted, distances are in km and times are in seconds.

pub mod orbit;
pub mod track;

use crate::consts::{EARTH_MU, EARTH_RADIUS};

pub use orbit::Orbit;

/// A point mass with no other physical properties.
///
/// Useful for satisfying a [HasMass] trait bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass(f64);

/// A trait indicating this object can be used in physical computations that
/// require a massive body.
pub trait HasMass {
    /// The standard gravitational parameter of this object, in km^3 / s^2
    fn mu(&self) -> f64;
}

impl PointMass {
    /// Constructs a new mass
    pub fn with_mu(mu: f64) -> Self {
        Self(mu)
    }
}

impl HasMass for PointMass {
    fn mu(&self) -> f64 {
        self.0
    }
}

/// A spherical body that things orbit around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    mu: f64,
    radius: f64,
}

impl CentralBody {
    pub const EARTH: CentralBody = CentralBody {
        mu: EARTH_MU,
        radius: EARTH_RADIUS,
    };

    pub fn new(mu: f64, radius: f64) -> Self {
        Self { mu, radius }
    }

    /// Mean radius of the body
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the center of the body to a point at the given altitude.
    pub fn radius_at_altitude(&self, altitude: f64) -> f64 {
        self.radius + altitude
    }

    /// Height above the mean surface of a point at the given distance from
    /// the center.
    pub fn altitude_at_radius(&self, radius: f64) -> f64 {
        radius - self.radius
    }
}

impl HasMass for CentralBody {
    fn mu(&self) -> f64 {
        self.mu
    }
}
