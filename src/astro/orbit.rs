use std::f64::consts::PI;

use nalgebra::{Rotation3, Unit, Vector3};

use super::HasMass;
use crate::math::geometry::directed_angle;

#[derive(Debug, Clone, Copy)]
pub struct Orbit<P> {
    primary: P,
    /// Encodes the orientation of the orbit: it moves the xy plane to the
    /// orbital plane, and x to point towards periapsis.
    rotation: Rotation3<f64>,
    /// (semimajor axis)^-1. It's easier to use this instead of a directly,
    /// because in parabolic orbits, a = infty.
    alpha: f64,
    /// Semi-latus rectum
    slr: f64,
}

impl<P> Orbit<P> {
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Angles are in radians. The caller is responsible for `a` and `ecc`
    /// describing a real conic.
    pub fn from_kepler(primary: P, a: f64, ecc: f64, incl: f64, lan: f64, argp: f64) -> Self {
        Orbit {
            primary,
            rotation: rotation_from_angles(incl, lan, argp),
            alpha: a.recip(),
            slr: a * (1.0 - ecc * ecc),
        }
    }

    // -- Axes and vectors --

    pub fn rotation(&self) -> Rotation3<f64> {
        self.rotation
    }

    pub fn periapse_vector(&self) -> Unit<Vector3<f64>> {
        self.rotation() * Vector3::x_axis()
    }

    pub fn normal_vector(&self) -> Unit<Vector3<f64>> {
        self.rotation() * Vector3::z_axis()
    }

    pub fn asc_node_vector(&self) -> Unit<Vector3<f64>> {
        let v = Vector3::z().cross(&self.normal_vector());
        Unit::try_new(v, 1e-20).unwrap_or_else(|| self.periapse_vector())
    }

    // -- Orbital elements --

    pub fn semimajor_axis(&self) -> f64 {
        self.alpha.recip()
    }

    pub fn eccentricity(&self) -> f64 {
        // l = a(1-e^2), so e^2 = 1 - l/a
        let e_squared = 1.0 - self.slr * self.alpha;

        // Circular orbits can come out just barely below zero
        e_squared.max(0.0).sqrt()
    }

    pub fn inclination(&self) -> f64 {
        // Inclination is the angle the normal makes with z
        self.normal_vector().angle(&Vector3::z())
    }

    pub fn long_asc_node(&self) -> f64 {
        directed_angle(&Vector3::x(), &self.asc_node_vector(), &Vector3::z())
    }

    pub fn arg_periapse(&self) -> f64 {
        directed_angle(
            &self.asc_node_vector(),
            &self.periapse_vector(),
            &self.normal_vector(),
        )
    }

    // -- Other geometric characteristics --

    pub fn is_closed(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn semilatus_rectum(&self) -> f64 {
        self.slr
    }

    pub fn periapsis(&self) -> f64 {
        // the periapsis is a(1-e), but when e = 1 that's got problems
        // a(1-e) = a(1-e^2)/(1+e) = l / (1+e)
        self.slr / (1.0 + self.eccentricity())
    }

    pub fn apoapsis(&self) -> Option<f64> {
        if self.is_closed() {
            Some(2.0 * self.semimajor_axis() - self.periapsis())
        } else {
            None
        }
    }

    pub fn get_position_at_theta(&self, theta: f64) -> Option<Vector3<f64>> {
        if self.semilatus_rectum() == 0.0 {
            // Radial orbits
            return None;
        }

        let denominator = 1.0 + self.eccentricity() * theta.cos();
        if denominator <= 0.0 {
            // Happens when we're hyperbolic/parabolic, and we're larger than max anomaly
            return None;
        }

        let radius = self.semilatus_rectum() / denominator;
        let position = radius * Vector3::new(theta.cos(), theta.sin(), 0.0);

        Some(self.rotation() * position)
    }
}

impl<P: HasMass> Orbit<P> {
    // -- Physical orbital characteristics --

    pub fn energy(&self) -> f64 {
        // -2E = mu / a
        -self.primary.mu() * self.alpha / 2.0
    }

    pub fn angular_momentum(&self) -> f64 {
        // l = h^2/mu
        (self.slr * self.primary.mu()).sqrt()
    }

    pub fn period(&self) -> Option<f64> {
        if self.is_closed() {
            Some(2.0 * PI * (self.semimajor_axis().powi(3) / self.primary.mu()).sqrt())
        } else {
            None
        }
    }

    /// 2pi / period, in rad/s
    pub fn mean_motion(&self) -> Option<f64> {
        self.period().map(|period| 2.0 * PI / period)
    }

    /// Speed of a circular orbit with the same semimajor axis. For closed
    /// orbits this is also the speed at the ends of the minor axis.
    pub fn circular_velocity(&self) -> Option<f64> {
        if self.is_closed() {
            Some((self.primary.mu() * self.alpha).sqrt())
        } else {
            None
        }
    }

    pub fn periapsis_velocity(&self) -> f64 {
        // Since h = r cross v, which are perpendicular at apeses
        self.angular_momentum() / self.periapsis()
    }

    pub fn apoapsis_velocity(&self) -> Option<f64> {
        self.apoapsis().map(|r_a| self.angular_momentum() / r_a)
    }

    pub fn get_state_at_theta(&self, theta: f64) -> Option<(Vector3<f64>, Vector3<f64>)> {
        // Taken from https://www.mathworks.com/matlabcentral/fileexchange/35455-convert-keplerian-orbital-elements-to-a-state-vector
        let p = self.semilatus_rectum();
        let ecc = self.eccentricity();
        let mu = self.primary().mu();

        let position = self.get_position_at_theta(theta)?;
        let velocity =
            self.rotation() * ((mu / p).sqrt() * Vector3::new(-theta.sin(), ecc + theta.cos(), 0.0));

        Some((position, velocity))
    }
}

fn rotation_from_angles(incl: f64, lan: f64, argp: f64) -> Rotation3<f64> {
    // We have an orbit in the xy plane where the periapsis is pointed along the
    // x-axis. So first, we rotate it around z until the periapsis is at argp
    // away from the x-axis (which will now be the ascending node). We then
    // rotate around x to get the inclination, and then one final turn around z
    // to get the correct longitude of the AN.
    Rotation3::from_axis_angle(&Vector3::z_axis(), lan)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argp)
}
