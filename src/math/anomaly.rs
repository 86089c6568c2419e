//! Conversions between the anomalies of a closed (elliptic) orbit. All
//! functions here require 0 <= e < 1.

use crate::math::root_finding::{find_root_bracket, newton_plus_bisection};

const NUM_ITERATIONS_KEPLER: usize = 100;

/// Solves Kepler's equation M = E - e sin E for E.
pub fn mean_to_eccentric(mean_anomaly: f64, e: f64) -> Option<f64> {
    // This doesn't have a closed form, so let's do some rootfinding
    let kepler = |x: f64| -> f64 { x - e * x.sin() - mean_anomaly };
    let kepler_der = |x: f64| -> f64 { 1.0 - e * x.cos() };

    let bracket = find_root_bracket(kepler, mean_anomaly, e + 0.1, NUM_ITERATIONS_KEPLER)?;
    newton_plus_bisection(|x| (kepler(x), kepler_der(x)), bracket, NUM_ITERATIONS_KEPLER)
}

pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

#[inline]
fn eccentric_factor(e: f64) -> f64 {
    ((1.0 - e) / (1.0 + e)).sqrt()
}

pub fn eccentric_to_true(eccentric_anomaly: f64, e: f64) -> f64 {
    // We have that tan(E/2) = sqrt((1-e)/(1+e)) * tan(theta/2)
    let tan_half_ecc = (eccentric_anomaly / 2.0).tan();
    let tan_half_theta = tan_half_ecc / eccentric_factor(e);
    2.0 * tan_half_theta.atan()
}

pub fn true_to_eccentric(true_anomaly: f64, e: f64) -> f64 {
    let tan_half_theta = (true_anomaly / 2.0).tan();
    let tan_half_ecc = tan_half_theta * eccentric_factor(e);
    2.0 * tan_half_ecc.atan()
}

pub fn mean_to_true(mean_anomaly: f64, ecc: f64) -> Option<f64> {
    mean_to_eccentric(mean_anomaly, ecc).map(|ecc_anomaly| eccentric_to_true(ecc_anomaly, ecc))
}

pub fn true_to_mean(true_anomaly: f64, ecc: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, ecc), ecc)
}
