//! Birth chart value types.

use serde::{Deserialize, Serialize};

use super::zodiac::{degree_in_sign, Zodiac};
use crate::astro::JulianDay;

/// Default coordinates (Seoul) and timezone used when the request omits
/// a location, matching the service's historical behavior.
pub const DEFAULT_LATITUDE: f64 = 37.5665;
pub const DEFAULT_LONGITUDE: f64 = 126.978;
pub const DEFAULT_TZ_OFFSET_HOURS: f64 = 9.0;

/// Hour assumed when the birth time is unknown (local noon).
pub const NOON_HOUR: u32 = 12;

/// A civil birth date/time/location. Immutable input value.
///
/// Calendar fields are taken at face value: out-of-range month/day produce
/// a numerically defined but incorrect chart rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Local hour in [0, 24). Defaults to noon when the time is unknown.
    pub hour: u32,
    /// Local minute in [0, 60).
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Offset of local civil time from UTC, in hours (east positive).
    pub tz_offset_hours: f64,
    /// When set, the hour is a placeholder and no ascendant is computed.
    pub time_unknown: bool,
}

impl BirthMoment {
    /// Local time converted to a UTC hour fraction for Julian Day
    /// computation. May be negative or exceed 24; the Julian Day
    /// arithmetic absorbs the day carry.
    pub fn utc_hour_fraction(&self) -> f64 {
        f64::from(self.hour) - self.tz_offset_hours + f64::from(self.minute) / 60.0
    }
}

/// A body's position expressed as (sign, degree within sign).
///
/// `longitude` keeps full precision; rounding for display happens in the
/// HTTP DTO layer so it can never shift the sign derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: Zodiac,
    /// Degrees into the sign, in [0, 30).
    pub degree: f64,
    /// Full-precision ecliptic longitude in [0, 360).
    pub longitude: f64,
}

impl SignPlacement {
    /// Derive the placement for a raw ecliptic longitude (degrees).
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = longitude.rem_euclid(360.0);
        Self {
            sign: Zodiac::from_longitude(normalized),
            degree: degree_in_sign(normalized),
            longitude: normalized,
        }
    }
}

/// The computed chart: Sun and Moon placements, an ascendant when the
/// birth time is known, and the underlying Julian Day. Built once per
/// request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub sun: SignPlacement,
    pub moon: SignPlacement,
    pub rising: Option<SignPlacement>,
    pub julian_day: JulianDay,
}
