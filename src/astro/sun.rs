//! Low-order solar position model.

use super::julian::JulianDay;
use super::normalize_degrees;

/// Geometric ecliptic longitude of the Sun in degrees, [0, 360).
///
/// Mean longitude and mean anomaly are linear in days since J2000.0,
/// corrected by a two-term equation of center. Accurate to roughly 0.01°,
/// which is far finer than the 30° sign arcs this service cares about.
pub fn sun_longitude(jd: JulianDay) -> f64 {
    let n = jd.days_since_j2000();

    // Mean longitude and mean anomaly of the Sun.
    let l = normalize_degrees(280.460 + 0.9856474 * n);
    let g = normalize_degrees(357.528 + 0.9856003 * n).to_radians();

    // Equation of center, truncated after the 2g term.
    let lambda = l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin();
    normalize_degrees(lambda)
}
