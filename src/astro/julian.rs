//! Julian Day conversion.

use serde::{Deserialize, Serialize};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000: f64 = 2451545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Continuous astronomical day count, including a fractional part for the
/// time of day. Derived from a civil date, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw Julian Day value as f64.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch.
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000
    }

    /// Julian centuries elapsed since the J2000.0 epoch.
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        JulianDay::new(value)
    }
}

/// Julian Day for a Gregorian calendar date plus a UTC hour fraction.
///
/// Uses the Fliegel–Van Flandern integer algorithm for the day number and
/// offsets by `hour / 24 − 0.5` so the result represents the instant, not
/// just the calendar date. Calendar fields are not validated; out-of-range
/// month/day yield a numerically defined but incorrect value.
pub fn julian_day(year: i32, month: i32, day: i32, hour: f64) -> JulianDay {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    JulianDay::new(jdn as f64 - 0.5 + hour / 24.0)
}
