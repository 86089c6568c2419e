//! Positions along an orbit, for drawing orbit paths and moving satellites
//! along them.

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::{HasMass, Orbit};
use crate::math::anomaly::mean_to_true;
use crate::math::geometry::normalize_angle;

/// Evenly spaced points (in true anomaly) around a closed orbit, starting at
/// periapsis. Returns an empty path for open orbits.
pub fn sample_orbit_path<P>(orbit: &Orbit<P>, n_points: usize) -> Vec<Vector3<f64>> {
    if !orbit.is_closed() || n_points == 0 {
        return vec![];
    }

    (0..n_points)
        .map(|i| 2.0 * PI * i as f64 / n_points as f64)
        .filter_map(|theta| orbit.get_position_at_theta(theta))
        .collect()
}

/// True anomaly reached `elapsed` seconds after passing periapsis. `None` for
/// open orbits.
pub fn true_anomaly_after<P: HasMass>(orbit: &Orbit<P>, elapsed: f64) -> Option<f64> {
    let mean_motion = orbit.mean_motion()?;
    let mean_anomaly = normalize_angle(mean_motion * elapsed);
    mean_to_true(mean_anomaly, orbit.eccentricity()).map(normalize_angle)
}

/// Position `elapsed` seconds after passing periapsis.
pub fn position_after<P: HasMass>(orbit: &Orbit<P>, elapsed: f64) -> Option<Vector3<f64>> {
    let theta = true_anomaly_after(orbit, elapsed)?;
    orbit.get_position_at_theta(theta)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::astro::CentralBody;

    fn molniya() -> Orbit<CentralBody> {
        Orbit::from_kepler(
            CentralBody::EARTH,
            26_600.0,
            0.74,
            63.4_f64.to_radians(),
            0.0,
            270.0_f64.to_radians(),
        )
    }

    #[test]
    fn test_path_stays_between_apses() {
        let orbit = molniya();
        let path = sample_orbit_path(&orbit, 64);
        assert_eq!(path.len(), 64);

        let periapsis = orbit.periapsis();
        let apoapsis = orbit.apoapsis().unwrap();
        for point in &path {
            let r = point.norm();
            assert!(r >= periapsis * (1.0 - 1e-12), "{} below periapsis", r);
            assert!(r <= apoapsis * (1.0 + 1e-12), "{} above apoapsis", r);
            // Every point lies in the orbital plane
            assert_relative_eq!(point.dot(&orbit.normal_vector().into_inner()), 0.0, epsilon = 1e-6);
        }
        assert_relative_eq!(path[0].norm(), periapsis, max_relative = 1e-12);
        assert_relative_eq!(path[32].norm(), apoapsis, max_relative = 1e-12);
    }

    #[test]
    fn test_open_orbit_has_no_path() {
        let orbit = Orbit::from_kepler(CentralBody::EARTH, -20_000.0, 1.2, 0.0, 0.0, 0.0);
        assert!(sample_orbit_path(&orbit, 16).is_empty());
        assert_eq!(position_after(&orbit, 100.0), None);
    }

    #[test]
    fn test_full_period_returns_to_periapsis() {
        let orbit = molniya();
        let period = orbit.period().unwrap();

        let start = position_after(&orbit, 0.0).unwrap();
        let after_one_orbit = position_after(&orbit, period).unwrap();
        assert_relative_eq!(start.norm(), orbit.periapsis(), max_relative = 1e-9);
        assert_relative_eq!(start, after_one_orbit, epsilon = 1e-6);

        let half = position_after(&orbit, period / 2.0).unwrap();
        assert_relative_eq!(half.norm(), orbit.apoapsis().unwrap(), max_relative = 1e-9);
    }

    #[test]
    fn test_circular_orbit_moves_uniformly() {
        let orbit = Orbit::from_kepler(CentralBody::EARTH, 6771.0, 0.0, 0.0, 0.0, 0.0);
        let quarter = orbit.period().unwrap() / 4.0;
        assert_relative_eq!(
            true_anomaly_after(&orbit, quarter).unwrap(),
            PI / 2.0,
            epsilon = 1e-9
        );
    }
}
