//! Low-order lunar position model.

use super::julian::JulianDay;
use super::normalize_degrees;

/// Ecliptic longitude of the Moon in degrees, [0, 360).
///
/// Mean longitude plus the ten largest periodic terms of the classical
/// lunar theory, in the four fundamental arguments (Moon's mean anomaly M,
/// Sun's mean anomaly Ms, argument of latitude F, mean elongation D).
/// Accurate to roughly 0.3°; full perturbation series are a non-goal.
pub fn moon_longitude(jd: JulianDay) -> f64 {
    let t = jd.centuries_since_j2000();

    // Fundamental arguments, degrees, linear in Julian centuries.
    let l0 = 218.316_447_7 + 481_267.881_234_21 * t; // mean longitude
    let m = (134.963_396_4 + 477_198.867_505_5 * t).to_radians(); // Moon anomaly
    let ms = (357.529_109_2 + 35_999.050_290_9 * t).to_radians(); // Sun anomaly
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians(); // arg. latitude
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians(); // elongation

    let correction = 6.288774 * m.sin()
        + 1.274027 * (2.0 * d - m).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * m).sin()
        - 0.185116 * ms.sin()
        - 0.114332 * (2.0 * f).sin()
        + 0.058793 * (2.0 * d - 2.0 * m).sin()
        + 0.057066 * (2.0 * d - ms - m).sin()
        + 0.053322 * (2.0 * d + m).sin()
        + 0.045758 * (2.0 * d - ms).sin();

    normalize_degrees(l0 + correction)
}
