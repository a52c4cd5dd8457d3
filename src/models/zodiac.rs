//! Zodiac sign enumeration and the static per-sign attribute table.
//!
//! The twelve signs partition the ecliptic into fixed 30° arcs in the
//! canonical order Aries..Pisces. Sign derivation floors `longitude / 30`
//! after normalizing into [0, 360), so boundary longitudes (0°, 30°, ...)
//! always map to the start of a sign.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The twelve zodiac signs, in canonical ecliptic order (index 0–11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Zodiac {
    /// All signs in canonical order. The index in this array is the index
    /// used for aspect computation.
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    /// Position of this sign in the canonical ordering (0 for Aries).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at the given canonical index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Zodiac {
        Self::ALL[index % 12]
    }

    /// Sign containing the given ecliptic longitude (degrees).
    ///
    /// The longitude is normalized into [0, 360) first, and the arc index
    /// is floored, never rounded, so 29.999° stays in the first sign and
    /// 30.0° starts the next.
    pub fn from_longitude(longitude: f64) -> Zodiac {
        let idx = (longitude.rem_euclid(360.0) / 30.0).floor() as usize;
        Self::ALL[idx.min(11)]
    }

    /// English sign name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }

    /// Static attributes for this sign.
    pub fn attributes(self) -> &'static SignAttributes {
        &ATTRIBUTES[self.index()]
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zodiac {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Error returned when a string is not one of the twelve sign names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign: {0:?}")]
pub struct UnknownSign(pub String);

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    pub fn name(self) -> &'static str {
        match self {
            Quality::Cardinal => "Cardinal",
            Quality::Fixed => "Fixed",
            Quality::Mutable => "Mutable",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang (active) / Yin (receptive) polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn name(self) -> &'static str {
        match self {
            Polarity::Yang => "Yang",
            Polarity::Yin => "Yin",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static knowledge-base entry for one sign.
///
/// This table plays the role dynamic dispatch would in an object-oriented
/// design: a closed enum key into a fixed-shape record, shared read-only
/// across all requests.
#[derive(Debug, Clone, Copy)]
pub struct SignAttributes {
    pub element: Element,
    pub quality: Quality,
    pub ruler: &'static str,
    pub polarity: Polarity,
    pub keywords: [&'static str; 4],
    /// Signs this sign resonates with (trine and sextile partners).
    pub compatible: [Zodiac; 4],
    /// Signs in square relation, the classic friction pairs.
    pub tension: [Zodiac; 2],
}

use Element::{Air, Earth, Fire, Water};
use Polarity::{Yang, Yin};
use Quality::{Cardinal, Fixed, Mutable};
use Zodiac::*;

static ATTRIBUTES: [SignAttributes; 12] = [
    SignAttributes {
        element: Fire,
        quality: Cardinal,
        ruler: "Mars",
        polarity: Yang,
        keywords: ["passion", "pioneering", "impulse", "leadership"],
        compatible: [Leo, Sagittarius, Gemini, Aquarius],
        tension: [Cancer, Capricorn],
    },
    SignAttributes {
        element: Earth,
        quality: Fixed,
        ruler: "Venus",
        polarity: Yin,
        keywords: ["stability", "sensuality", "patience", "pragmatism"],
        compatible: [Virgo, Capricorn, Cancer, Pisces],
        tension: [Leo, Aquarius],
    },
    SignAttributes {
        element: Air,
        quality: Mutable,
        ruler: "Mercury",
        polarity: Yang,
        keywords: ["communication", "knowledge", "versatility", "wit"],
        compatible: [Libra, Aquarius, Aries, Leo],
        tension: [Virgo, Sagittarius],
    },
    SignAttributes {
        element: Water,
        quality: Cardinal,
        ruler: "Moon",
        polarity: Yin,
        keywords: ["emotion", "family", "protection", "intuition"],
        compatible: [Scorpio, Pisces, Taurus, Virgo],
        tension: [Aries, Libra],
    },
    SignAttributes {
        element: Fire,
        quality: Fixed,
        ruler: "Sun",
        polarity: Yang,
        keywords: ["creativity", "expression", "pride", "generosity"],
        compatible: [Aries, Sagittarius, Gemini, Libra],
        tension: [Taurus, Scorpio],
    },
    SignAttributes {
        element: Earth,
        quality: Mutable,
        ruler: "Mercury",
        polarity: Yin,
        keywords: ["analysis", "service", "precision", "health"],
        compatible: [Taurus, Capricorn, Cancer, Scorpio],
        tension: [Gemini, Sagittarius],
    },
    SignAttributes {
        element: Air,
        quality: Cardinal,
        ruler: "Venus",
        polarity: Yang,
        keywords: ["balance", "relationships", "aesthetics", "fairness"],
        compatible: [Gemini, Aquarius, Leo, Sagittarius],
        tension: [Cancer, Capricorn],
    },
    SignAttributes {
        element: Water,
        quality: Fixed,
        ruler: "Pluto",
        polarity: Yin,
        keywords: ["transformation", "depth", "focus", "secrecy"],
        compatible: [Cancer, Pisces, Virgo, Capricorn],
        tension: [Leo, Aquarius],
    },
    SignAttributes {
        element: Fire,
        quality: Mutable,
        ruler: "Jupiter",
        polarity: Yang,
        keywords: ["freedom", "adventure", "philosophy", "optimism"],
        compatible: [Aries, Leo, Libra, Aquarius],
        tension: [Virgo, Gemini],
    },
    SignAttributes {
        element: Earth,
        quality: Cardinal,
        ruler: "Saturn",
        polarity: Yin,
        keywords: ["ambition", "discipline", "responsibility", "realism"],
        compatible: [Taurus, Virgo, Scorpio, Pisces],
        tension: [Aries, Libra],
    },
    SignAttributes {
        element: Air,
        quality: Fixed,
        ruler: "Uranus",
        polarity: Yang,
        keywords: ["innovation", "independence", "humanitarianism", "future"],
        compatible: [Gemini, Libra, Aries, Sagittarius],
        tension: [Taurus, Scorpio],
    },
    SignAttributes {
        element: Water,
        quality: Mutable,
        ruler: "Neptune",
        polarity: Yin,
        keywords: ["spirituality", "empathy", "intuition", "artistry"],
        compatible: [Cancer, Scorpio, Taurus, Capricorn],
        tension: [Gemini, Virgo],
    },
];

/// Degrees into the sign for a raw ecliptic longitude, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    longitude.rem_euclid(30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_round_trips_through_index() {
        for (i, sign) in Zodiac::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Zodiac::from_index(i), *sign);
        }
        assert_eq!(Zodiac::from_index(12), Zodiac::Aries);
    }

    #[test]
    fn sign_boundaries_use_floor() {
        assert_eq!(Zodiac::from_longitude(29.999), Zodiac::Aries);
        assert_eq!(Zodiac::from_longitude(30.001), Zodiac::Taurus);
        for i in 0..12 {
            let start = i as f64 * 30.0;
            assert_eq!(Zodiac::from_longitude(start), Zodiac::ALL[i]);
            assert_eq!(degree_in_sign(start), 0.0);
        }
    }

    #[test]
    fn from_longitude_is_periodic() {
        for k in -3i32..=3 {
            let lon = 123.4 + 360.0 * f64::from(k);
            assert_eq!(Zodiac::from_longitude(lon), Zodiac::Leo);
        }
    }

    #[test]
    fn negative_longitudes_normalize_before_lookup() {
        assert_eq!(Zodiac::from_longitude(-10.0), Zodiac::Pisces);
        assert!(degree_in_sign(-10.0) >= 0.0 && degree_in_sign(-10.0) < 30.0);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Aries".parse::<Zodiac>().unwrap(), Zodiac::Aries);
        assert_eq!("sagittarius".parse::<Zodiac>().unwrap(), Zodiac::Sagittarius);
        assert_eq!(" Libra ".parse::<Zodiac>().unwrap(), Zodiac::Libra);
        assert!("Ophiuchus".parse::<Zodiac>().is_err());
    }

    #[test]
    fn attribute_table_is_consistent() {
        // Every sign has four non-empty keywords and element/quality cycles
        // match the classical layout (elements repeat every four signs,
        // qualities every three).
        for sign in Zodiac::ALL {
            let attrs = sign.attributes();
            assert!(attrs.keywords.iter().all(|k| !k.is_empty()));
            let expected_element = match sign.index() % 4 {
                0 => Element::Fire,
                1 => Element::Earth,
                2 => Element::Air,
                _ => Element::Water,
            };
            assert_eq!(attrs.element, expected_element, "element of {sign}");
            let expected_quality = match sign.index() % 3 {
                0 => Quality::Cardinal,
                1 => Quality::Fixed,
                _ => Quality::Mutable,
            };
            assert_eq!(attrs.quality, expected_quality, "quality of {sign}");
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Zodiac::Scorpio).unwrap();
        assert_eq!(json, "\"Scorpio\"");
        let back: Zodiac = serde_json::from_str("\"Pisces\"").unwrap();
        assert_eq!(back, Zodiac::Pisces);
    }
}
