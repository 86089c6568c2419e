//! Rough delta-v and fuel estimates for getting from a launch site into a
//! target orbit.
//!
//! This is not a transfer solver. The delta-v is the circular speed at the
//! target, plus a flat penalty per degree of plane change, minus the boost
//! from the Earth's rotation at the launch latitude. Flight time and
//! efficiency are display heuristics with no physical derivation.

use serde::Serialize;

use super::catalog::{LaunchSite, TargetOrbit};
use crate::astro::{CentralBody, HasMass};
use crate::consts::{
    get_circular_velocity, DEFAULT_SPECIFIC_IMPULSE, EARTH_ROTATION_VELOCITY, STANDARD_GRAVITY,
};
use crate::error::InvalidInputError;

// km/s of delta-v charged per degree between launch latitude and target inclination
const INCLINATION_PENALTY_PER_DEGREE: f64 = 0.1;
// Efficiency points lost per km/s of inclination penalty
const EFFICIENCY_LOSS_PER_PENALTY: f64 = 10.0;
// Altitude (km) covered per minute of flight
const ASCENT_KM_PER_MINUTE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVehicle {
    /// Specific impulse, in s
    pub specific_impulse: f64,
}

impl Default for LaunchVehicle {
    fn default() -> Self {
        Self {
            specific_impulse: DEFAULT_SPECIFIC_IMPULSE,
        }
    }
}

impl LaunchVehicle {
    /// Exhaust velocity, in km/s
    pub fn exhaust_velocity(&self) -> f64 {
        self.specific_impulse * STANDARD_GRAVITY / 1000.0
    }

    /// Propellant mass needed to give `payload_mass` a velocity change of
    /// `delta_v` (km/s), from the rocket equation.
    pub fn fuel_mass(&self, delta_v: f64, payload_mass: f64) -> f64 {
        let mass_ratio = (delta_v / self.exhaust_velocity()).exp();
        payload_mass * (mass_ratio - 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryEstimate {
    pub delta_v_km_per_sec: f64,
    pub fuel_mass_kg: f64,
    pub flight_time_minutes: f64,
    pub efficiency_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryEstimator {
    pub body: CentralBody,
    /// Surface speed of the body's rotation at the equator, in km/s
    pub equatorial_velocity: f64,
    pub vehicle: LaunchVehicle,
}

impl Default for TrajectoryEstimator {
    fn default() -> Self {
        Self {
            body: CentralBody::EARTH,
            equatorial_velocity: EARTH_ROTATION_VELOCITY,
            vehicle: LaunchVehicle::default(),
        }
    }
}

impl TrajectoryEstimator {
    pub fn with_vehicle(vehicle: LaunchVehicle) -> Self {
        Self {
            vehicle,
            ..Self::default()
        }
    }

    pub fn estimate(
        &self,
        site: &LaunchSite,
        target: &TargetOrbit,
        payload_mass_kg: f64,
    ) -> Result<TrajectoryEstimate, InvalidInputError> {
        // Written so that NaN is rejected too
        if !(payload_mass_kg >= 0.0) {
            tracing::debug!(payload_mass_kg, "rejecting negative payload");
            return Err(InvalidInputError::PayloadMass(payload_mass_kg));
        }

        let target_radius = self.body.radius_at_altitude(target.altitude_km);
        if !(target_radius > 0.0) {
            tracing::debug!(target_radius, "rejecting target below the center");
            return Err(InvalidInputError::OrbitalRadius(target_radius));
        }

        let circular_velocity = get_circular_velocity(target_radius, self.body.mu());
        let rotation_boost = self.equatorial_velocity * site.latitude_deg.to_radians().cos();
        let inclination_penalty =
            (target.inclination_deg - site.latitude_deg).abs() * INCLINATION_PENALTY_PER_DEGREE;

        let delta_v = circular_velocity + inclination_penalty - rotation_boost;
        let fuel_mass = self.vehicle.fuel_mass(delta_v, payload_mass_kg);

        Ok(TrajectoryEstimate {
            delta_v_km_per_sec: delta_v,
            fuel_mass_kg: fuel_mass,
            flight_time_minutes: target.altitude_km / ASCENT_KM_PER_MINUTE,
            efficiency_percent: (100.0 - inclination_penalty * EFFICIENCY_LOSS_PER_PENALTY).max(0.0),
        })
    }
}

/// Estimate using the Earth and the default vehicle.
pub fn estimate_trajectory(
    site: &LaunchSite,
    target: &TargetOrbit,
    payload_mass_kg: f64,
) -> Result<TrajectoryEstimate, InvalidInputError> {
    TrajectoryEstimator::default().estimate(site, target, payload_mass_kg)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::planning::catalog::Catalog;

    fn kennedy_to(target: &str, payload: f64) -> Result<TrajectoryEstimate, InvalidInputError> {
        let catalog = Catalog::builtin();
        estimate_trajectory(
            catalog.site("kennedy").unwrap(),
            catalog.target(target).unwrap(),
            payload,
        )
    }

    #[test]
    fn test_kennedy_to_leo() {
        let estimate = kennedy_to("leo", 1000.0).unwrap();

        // 7.67260 + 0.00721 - 0.40846
        assert_abs_diff_eq!(estimate.delta_v_km_per_sec, 7.27135, epsilon = 1e-4);
        // 1000 * (exp(7271.35 / 4414.5) - 1)
        assert_abs_diff_eq!(estimate.fuel_mass_kg, 4192.2, epsilon = 1.0);
        assert_relative_eq!(estimate.flight_time_minutes, 4.0);
        assert_abs_diff_eq!(estimate.efficiency_percent, 99.928, epsilon = 1e-3);
    }

    #[test]
    fn test_large_plane_change_floors_efficiency() {
        // |0 - 28.5721| * 0.1 = 2.857 km/s of penalty, 28.6 points lost
        let estimate = kennedy_to("geo", 1000.0).unwrap();
        assert_abs_diff_eq!(estimate.efficiency_percent, 71.4279, epsilon = 1e-3);

        let equator = LaunchSite::new("eq", "Equator", 0.0, 0.0, "-");
        let retrograde = TargetOrbit::new("retro", "Retrograde", 400.0, 180.0);
        let estimate = estimate_trajectory(&equator, &retrograde, 10.0).unwrap();
        assert_eq!(estimate.efficiency_percent, 0.0);
    }

    #[test]
    fn test_zero_payload_needs_no_fuel() {
        for target in ["leo", "meo", "geo", "polar"] {
            let estimate = kennedy_to(target, 0.0).unwrap();
            assert_eq!(estimate.fuel_mass_kg, 0.0);
            assert!(estimate.delta_v_km_per_sec > 0.0);
        }
    }

    #[test]
    fn test_rejects_negative_payload() {
        assert_eq!(
            kennedy_to("leo", -1.0),
            Err(InvalidInputError::PayloadMass(-1.0))
        );
        assert!(matches!(
            kennedy_to("leo", f64::NAN),
            Err(InvalidInputError::PayloadMass(_))
        ));
    }

    #[test]
    fn test_rejects_target_below_center() {
        let site = LaunchSite::new("eq", "Equator", 0.0, 0.0, "-");
        let target = TargetOrbit::new("deep", "Deep", -7000.0, 0.0);
        assert_eq!(
            estimate_trajectory(&site, &target, 1.0),
            Err(InvalidInputError::OrbitalRadius(-629.0))
        );
    }

    #[test]
    fn test_better_engine_needs_less_fuel() {
        let catalog = Catalog::builtin();
        let site = catalog.site("kourou").unwrap();
        let target = catalog.target("geo").unwrap();

        let hydrolox = TrajectoryEstimator::default()
            .estimate(site, target, 500.0)
            .unwrap();
        let kerosene = TrajectoryEstimator::with_vehicle(LaunchVehicle {
            specific_impulse: 300.0,
        })
        .estimate(site, target, 500.0)
        .unwrap();

        assert_eq!(hydrolox.delta_v_km_per_sec, kerosene.delta_v_km_per_sec);
        assert!(kerosene.fuel_mass_kg > hydrolox.fuel_mass_kg);
    }
}
