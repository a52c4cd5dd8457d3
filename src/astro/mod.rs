//! Approximate natal-chart astronomy.
//!
//! Pure, deterministic routines: civil date/time → Julian Day → ecliptic
//! longitudes for the Sun, Moon and ascendant → sign placements. No I/O
//! and no shared state; every function is safe to call concurrently.
//!
//! Precision is deliberately modest (Sun ~0.01°, Moon ~0.3°): enough to
//! place a body in its 30° sign arc, with no aspiration to ephemeris-grade
//! accuracy.

pub mod ascendant;
pub mod julian;
pub mod moon;
pub mod sun;

pub use ascendant::ascendant;
pub use julian::{julian_day, JulianDay, J2000};
pub use moon::moon_longitude;
pub use sun::sun_longitude;

use crate::models::{BirthChart, BirthMoment, SignPlacement};

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Compute the full birth chart for a moment.
///
/// Local civil time is converted to UTC through the stored offset before
/// the Julian Day conversion. The ascendant is only computed when the
/// birth time is known; with `time_unknown` the noon placeholder is good
/// enough for the slow-moving Sun and Moon but meaningless for the
/// fast-turning horizon.
pub fn compute_birth_chart(moment: &BirthMoment) -> BirthChart {
    let jd = julian_day(
        moment.year,
        moment.month as i32,
        moment.day as i32,
        moment.utc_hour_fraction(),
    );

    let sun = SignPlacement::from_longitude(sun_longitude(jd));
    let moon = SignPlacement::from_longitude(moon_longitude(jd));
    let rising = if moment.time_unknown {
        None
    } else {
        Some(SignPlacement::from_longitude(ascendant(
            jd,
            moment.latitude,
            moment.longitude,
        )))
    };

    BirthChart {
        sun,
        moon,
        rising,
        julian_day: jd,
    }
}
