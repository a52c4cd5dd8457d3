//! Ascendant computation from sidereal time.

use super::julian::JulianDay;
use super::normalize_degrees;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// Quadratic polynomial in Julian centuries since J2000.0; the cubic term
/// is below this service's precision and omitted.
pub fn gmst_degrees(jd: JulianDay) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.centuries_since_j2000();
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t)
}

/// Mean obliquity of the ecliptic in degrees, linear in Julian centuries.
fn obliquity_degrees(jd: JulianDay) -> f64 {
    23.439_291_111 - 0.013_004_167 * jd.centuries_since_j2000()
}

/// Ecliptic longitude of the ascendant in degrees, [0, 360).
///
/// Local sidereal time is GMST plus the geographic longitude (east
/// positive); the standard horizon formula then gives the rising point of
/// the ecliptic. Degenerate at latitude ±90° where `tan` blows up; polar
/// charts are not special-cased.
pub fn ascendant(jd: JulianDay, latitude: f64, longitude: f64) -> f64 {
    let lst = normalize_degrees(gmst_degrees(jd) + longitude).to_radians();
    let eps = obliquity_degrees(jd).to_radians();
    let lat = latitude.to_radians();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + lat.tan() * eps.sin()));
    normalize_degrees(asc.to_degrees())
}
