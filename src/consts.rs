// Mean Earth radius, in km
pub const EARTH_RADIUS: f64 = 6371.0;
// Earth's standard gravitational parameter, in km^3 / s^2
pub const EARTH_MU: f64 = 398_600.4418;
// Surface speed of the Earth's rotation at the equator, in km/s
pub const EARTH_ROTATION_VELOCITY: f64 = 0.4651;

// Standard gravity used by the rocket equation, in m/s^2
pub const STANDARD_GRAVITY: f64 = 9.81;
// A generic high-performance upper stage, in s
pub const DEFAULT_SPECIFIC_IMPULSE: f64 = 450.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}
