use nalgebra::Vector3;

use std::f64::consts::PI;

pub fn directed_angle(u: &Vector3<f64>, v: &Vector3<f64>, up: &Vector3<f64>) -> f64 {
    // Returns the angle between u and v, measured as a positive angle around 'up'.
    let theta = u.angle(v);
    if u.cross(v).dot(up) >= 0.0 {
        theta
    } else {
        2.0 * PI - theta
    }
}

/// Wraps an angle into [0, 2pi).
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2pi for tiny negative inputs
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_directed_angle() {
        let up = Vector3::z();
        assert_relative_eq!(directed_angle(&Vector3::x(), &Vector3::y(), &up), PI / 2.0);
        assert_relative_eq!(
            directed_angle(&Vector3::y(), &Vector3::x(), &up),
            3.0 * PI / 2.0
        );
        assert_relative_eq!(directed_angle(&Vector3::x(), &-Vector3::x(), &up), PI);
    }

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(3.0 * PI), PI);
        assert_relative_eq!(normalize_angle(-PI / 2.0), 3.0 * PI / 2.0);
        assert!(normalize_angle(-1e-18) < 2.0 * PI);
    }
}
