//! Simulated launch windows.
//!
//! This is filler for the launch-window table, not a scheduler: every day gets
//! a morning and an evening slot at a random minute, with random duration,
//! efficiency and weather. The randomness comes from the caller so results
//! can be reproduced from a seed.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use serde::Serialize;

/// How many days ahead of the base date get slots
pub const LAUNCH_WINDOW_DAYS: usize = 7;
/// Only the earliest windows are kept
pub const MAX_LAUNCH_WINDOWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weather {
    Good,
    Marginal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchWindow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub efficiency_percent: u32,
    pub weather: Weather,
}

/// One daily slot. Efficiency is drawn from `[min_efficiency, min_efficiency + 20)`,
/// and the weather is good when a uniform draw beats `marginal_odds`.
struct Slot {
    hour: u32,
    min_efficiency: u32,
    marginal_odds: f64,
}

const MORNING: Slot = Slot {
    hour: 6,
    min_efficiency: 80,
    marginal_odds: 0.3,
};

const EVENING: Slot = Slot {
    hour: 18,
    min_efficiency: 75,
    marginal_odds: 0.4,
};

impl Slot {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R, date: NaiveDate, minute: u32) -> Option<LaunchWindow> {
        let duration_minutes = rng.gen_range(15..45);
        let efficiency_percent = rng.gen_range(self.min_efficiency..self.min_efficiency + 20);
        let weather = if rng.gen::<f64>() > self.marginal_odds {
            Weather::Good
        } else {
            Weather::Marginal
        };

        Some(LaunchWindow {
            date,
            time: NaiveTime::from_hms_opt(self.hour, minute, 0)?,
            duration_minutes,
            efficiency_percent,
            weather,
        })
    }
}

/// Launch windows for the week starting at `base_date`, earliest first.
pub fn generate_launch_windows<R: Rng + ?Sized>(
    rng: &mut R,
    base_date: NaiveDate,
) -> Vec<LaunchWindow> {
    let mut windows = Vec::with_capacity(2 * LAUNCH_WINDOW_DAYS);

    for date in base_date.iter_days().take(LAUNCH_WINDOW_DAYS) {
        // Both start minutes are picked before either slot is filled in
        let morning_minute = rng.gen_range(0..60);
        let evening_minute = rng.gen_range(0..60);

        windows.extend(MORNING.draw(rng, date, morning_minute));
        windows.extend(EVENING.draw(rng, date, evening_minute));
    }

    windows.truncate(MAX_LAUNCH_WINDOWS);
    tracing::debug!(%base_date, count = windows.len(), "generated launch windows");
    windows
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use itertools::Itertools;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let windows = generate_launch_windows(&mut rng, base_date());
        assert_eq!(windows.len(), MAX_LAUNCH_WINDOWS);

        // Two per day, morning first, on consecutive days
        for (i, window) in windows.iter().enumerate() {
            let expected_date = base_date().iter_days().nth(i / 2).unwrap();
            assert_eq!(window.date, expected_date);

            let (hour, min_efficiency) = if i % 2 == 0 { (6, 80) } else { (18, 75) };
            assert_eq!(window.time.hour(), hour);
            assert!(window.time.minute() < 60);
            assert_eq!(window.time.second(), 0);
            assert!((15..45).contains(&window.duration_minutes));
            assert!((min_efficiency..min_efficiency + 20).contains(&window.efficiency_percent));
        }

        // Chronological
        for (a, b) in windows.iter().tuple_windows() {
            assert!((a.date, a.time) < (b.date, b.time));
        }
    }

    #[test]
    fn test_same_seed_same_windows() {
        let first = generate_launch_windows(&mut StdRng::seed_from_u64(42), base_date());
        let second = generate_launch_windows(&mut StdRng::seed_from_u64(42), base_date());
        assert_eq!(first, second);
    }

    #[test]
    fn test_weather_follows_draw() {
        // Constant generators: every integer draw is 0 and every uniform draw
        // is the same, so all slots share one outcome.
        let mut rng = StepRng::new(0, 0);
        let windows = generate_launch_windows(&mut rng, base_date());
        assert!(windows.iter().all(|w| w.weather == Weather::Marginal));
        assert!(windows.iter().all(|w| w.duration_minutes == 15));

        // Low 32 bits are zero, the f64 draw comes out at 0.9375
        let mut rng = StepRng::new(0xF000_0000_0000_0000, 0);
        let windows = generate_launch_windows(&mut rng, base_date());
        assert!(windows.iter().all(|w| w.weather == Weather::Good));
        assert!(windows.iter().all(|w| w.time.minute() == 0));
    }
}
