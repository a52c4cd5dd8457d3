//! Angular aspects and element relationships between signs.
//!
//! Everything here is pure arithmetic over the canonical sign ordering:
//! the circular index distance between two signs is a multiple of 30°,
//! which lands exactly on one of the seven named aspect angles.

use crate::models::{Element, Zodiac};

/// The seven named aspect angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunction,
    SemiSextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

impl Aspect {
    /// The aspect's angle in degrees.
    pub fn angle(self) -> u32 {
        match self {
            Aspect::Conjunction => 0,
            Aspect::SemiSextile => 30,
            Aspect::Sextile => 60,
            Aspect::Square => 90,
            Aspect::Trine => 120,
            Aspect::Quincunx => 150,
            Aspect::Opposition => 180,
        }
    }

    /// Aspect whose angle is nearest to `angle` degrees. Ties keep the
    /// smaller angle, matching a left-to-right nearest scan of the list.
    pub fn from_angle(angle: u32) -> Aspect {
        const ALL: [Aspect; 7] = [
            Aspect::Conjunction,
            Aspect::SemiSextile,
            Aspect::Sextile,
            Aspect::Square,
            Aspect::Trine,
            Aspect::Quincunx,
            Aspect::Opposition,
        ];
        let mut best = Aspect::Conjunction;
        for candidate in ALL {
            let d = candidate.angle().abs_diff(angle);
            if d < best.angle().abs_diff(angle) {
                best = candidate;
            }
        }
        best
    }

    /// Short prompt label describing the aspect's character.
    pub fn label(self) -> &'static str {
        match self {
            Aspect::Conjunction => "conjunction — merged, amplified energy",
            Aspect::SemiSextile => "semi-sextile — a subtle adjustment",
            Aspect::Sextile => "sextile — easy cooperation and opportunity",
            Aspect::Square => "square — tension and challenge, friction that grows",
            Aspect::Trine => "trine — natural flow and innate harmony",
            Aspect::Quincunx => "quincunx — strain that asks for realignment",
            Aspect::Opposition => "opposition — contrast seeking integration",
        }
    }
}

/// Aspect between two signs by circular distance in the canonical order.
///
/// Symmetric, and `aspect_between(s, s)` is always the conjunction.
pub fn aspect_between(a: Zodiac, b: Zodiac) -> Aspect {
    let diff = a.index().abs_diff(b.index());
    let steps = diff.min(12 - diff) as u32;
    Aspect::from_angle(steps * 30)
}

/// How two elements interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    Same,
    Harmonious,
    Tense,
    Neutral,
}

impl ElementRelation {
    pub fn describe(self) -> &'static str {
        match self {
            ElementRelation::Same => "same element — natural resonance",
            ElementRelation::Harmonious => "complementary elements — synergy",
            ElementRelation::Tense => "clashing elements — tension that fuels growth",
            ElementRelation::Neutral => "neutral relation",
        }
    }
}

/// Classify the relation between two elements.
///
/// Fire feeds Air and vice versa; Earth and Water sustain each other.
/// The remaining cross pairs pull against each other.
pub fn element_relation(a: Element, b: Element) -> ElementRelation {
    use Element::*;
    if a == b {
        return ElementRelation::Same;
    }
    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => {
            ElementRelation::Harmonious
        }
        (Fire, Water) | (Water, Fire) | (Fire, Earth) | (Earth, Fire) => ElementRelation::Tense,
        (Air, Earth) | (Earth, Air) | (Air, Water) | (Water, Air) => ElementRelation::Tense,
        _ => ElementRelation::Neutral,
    }
}

/// Compatibility verdict from the per-sign adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compatibility {
    Compatible,
    Tension,
    Neutral,
}

impl Compatibility {
    pub fn describe(self) -> &'static str {
        match self {
            Compatibility::Compatible => "mutually compatible",
            Compatibility::Tension => "a tension pair",
            Compatibility::Neutral => "neutral",
        }
    }
}

/// Look up `b` in `a`'s compatible/tension lists.
pub fn compatibility(a: Zodiac, b: Zodiac) -> Compatibility {
    let attrs = a.attributes();
    if attrs.compatible.contains(&b) {
        Compatibility::Compatible
    } else if attrs.tension.contains(&b) {
        Compatibility::Tension
    } else {
        Compatibility::Neutral
    }
}
