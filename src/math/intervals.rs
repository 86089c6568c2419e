use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Interval {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    fn new_unchecked(lo: f64, hi: f64) -> Interval {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Keeps the part of the interval below `mid`. `mid` must be inside the
    /// interval.
    pub fn split_left(&self, mid: f64) -> Self {
        debug_assert!(self.contains(mid));
        Self::new_unchecked(self.lo, mid)
    }

    /// Keeps the part of the interval above `mid`. `mid` must be inside the
    /// interval.
    pub fn split_right(&self, mid: f64) -> Self {
        debug_assert!(self.contains(mid));
        Self::new_unchecked(mid, self.hi)
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_endpoints() {
        let interval = Interval::new(3.0, -1.0);
        assert_eq!(interval.lo(), -1.0);
        assert_eq!(interval.hi(), 3.0);
        assert_eq!(interval.width(), 4.0);
        assert_eq!(interval.midpoint(), 1.0);
    }

    #[test]
    fn test_split() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.split_left(4.0), Interval::new(0.0, 4.0));
        assert_eq!(interval.split_right(4.0), Interval::new(4.0, 10.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.5));
        assert_eq!(format!("{}", interval), "[0, 10]");
    }
}
