//! Deterministic prompt construction.
//!
//! Given a resolved sign triple and the static knowledge base, builds the
//! (system, user) prompt pair sent to the completion capability. The text
//! is a pure function of its inputs: same chart, same prompt.

use std::fmt::Write;

use crate::models::{BirthChart, BirthMoment, Zodiac};
use crate::relations::{aspect_between, compatibility, element_relation};

/// A system/user prompt pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

fn system_prompt(final_key: &str, final_desc: &str) -> String {
    format!(
        "You are an expert in Western astrology, analyzing a natal chart as a \
knowledge graph: the Sun (identity), Moon (emotion) and rising sign (outward \
self) are nodes, and their aspects, element relations and shared rulers are \
edges. Follow the reasoning paths along those edges rather than reading each \
sign in isolation.\n\
Respond with pure JSON only — no markdown fences, no commentary.\n\n\
Output format:\n\
{{\"path_analysis\":\"how the sign relationships combine, ~200 chars, citing \
the aspects and element relations\",\"deep_reading\":\"in-depth reading, \
300-400 chars, tracing the energy flow through the three signs\",\
\"action_guide\":\"1. first action\\n2. second action\\n3. third action\",\
\"{final_key}\":\"{final_desc}\"}}"
    )
}

/// One node line: sign, element/quality, ruler, keywords, optional degree.
fn sign_line(role: &str, sign: Zodiac, degree: Option<f64>) -> String {
    let attrs = sign.attributes();
    let mut line = format!(
        "- {role} ({sign}): {} · {} · {}, ruled by {}, keywords {}",
        attrs.element,
        attrs.quality,
        attrs.polarity,
        attrs.ruler,
        attrs.keywords.join(", "),
    );
    if let Some(deg) = degree {
        let _ = write!(line, " [{deg:.1}°]");
    }
    line
}

/// Edge lines shared by both modes.
fn edge_lines(sun: Zodiac, moon: Zodiac, rising: Option<Zodiac>) -> String {
    let sun_attrs = sun.attributes();
    let moon_attrs = moon.attributes();

    let mut edges = String::from("Edges:\n");
    let _ = writeln!(
        edges,
        "- Sun–Moon aspect: {}",
        aspect_between(sun, moon).label()
    );
    let _ = writeln!(
        edges,
        "- Sun–Moon elements: {}",
        element_relation(sun_attrs.element, moon_attrs.element).describe()
    );
    if sun_attrs.ruler == moon_attrs.ruler {
        let _ = writeln!(
            edges,
            "- Ruling planets: shared ({}) — concentrated energy",
            sun_attrs.ruler
        );
    } else {
        let _ = writeln!(edges, "- Ruling planets: distinct — diverse energy");
    }
    let _ = writeln!(
        edges,
        "- Sun–Moon compatibility: {}",
        compatibility(sun, moon).describe()
    );

    if let Some(rising) = rising {
        let rising_attrs = rising.attributes();
        let _ = writeln!(
            edges,
            "- Sun–Rising aspect: {}",
            aspect_between(sun, rising).label()
        );
        let _ = writeln!(
            edges,
            "- Moon–Rising aspect: {}",
            aspect_between(moon, rising).label()
        );
        let _ = writeln!(
            edges,
            "- Sun–Rising elements: {}",
            element_relation(sun_attrs.element, rising_attrs.element).describe()
        );
        let _ = writeln!(
            edges,
            "- Moon–Rising elements: {}",
            element_relation(moon_attrs.element, rising_attrs.element).describe()
        );
    }

    edges
}

fn concern_line(concern: Option<&str>) -> String {
    match concern {
        Some(c) => format!("\nThe person's current concern: \"{c}\"\n"),
        None => String::new(),
    }
}

/// Prompt for a computed birth chart (auto mode).
///
/// When the birth time is unknown the chart has no rising placement and
/// the prompt carries no ascendant section at all.
pub fn build_birth_prompt(
    chart: &BirthChart,
    moment: &BirthMoment,
    concern: Option<&str>,
) -> PromptPair {
    let when = if moment.time_unknown {
        format!("{}-{}-{}", moment.year, moment.month, moment.day)
    } else {
        format!(
            "{}-{}-{} at {}:{:02} (UTC{:+})",
            moment.year, moment.month, moment.day, moment.hour, moment.minute,
            moment.tz_offset_hours
        )
    };

    let (sun, moon) = (chart.sun.sign, chart.moon.sign);
    let mut user = format!("Natal chart for a birth on {when}.\n\nNodes:\n");
    user.push_str(&sign_line("Sun", sun, Some(chart.sun.degree)));
    user.push('\n');
    user.push_str(&sign_line("Moon", moon, Some(chart.moon.degree)));
    user.push('\n');
    let rising = chart.rising.as_ref().map(|p| {
        user.push_str(&sign_line("Rising", p.sign, Some(p.degree)));
        user.push('\n');
        p.sign
    });
    user.push('\n');
    user.push_str(&edge_lines(sun, moon, rising));
    user.push_str(&concern_line(concern));
    user.push_str(
        "\nAnalyze the relationship graph of these signs, trace the flow of \
energy along its edges, and interpret the person's path.",
    );

    PromptPair {
        system: system_prompt(
            "birth_insight",
            "notable features of the birth chart, ~150 chars",
        ),
        user,
    }
}

/// Prompt for a user-supplied sign triple (manual mode).
pub fn build_manual_prompt(
    sun: Zodiac,
    moon: Zodiac,
    rising: Option<Zodiac>,
    concern: Option<&str>,
) -> PromptPair {
    let mut user = String::from("Sign triple for a reading.\n\nNodes:\n");
    user.push_str(&sign_line("Sun", sun, None));
    user.push('\n');
    user.push_str(&sign_line("Moon", moon, None));
    user.push('\n');
    if let Some(rising) = rising {
        user.push_str(&sign_line("Rising", rising, None));
        user.push('\n');
    }
    user.push('\n');
    user.push_str(&edge_lines(sun, moon, rising));
    user.push_str(&concern_line(concern));
    user.push_str(
        "\nAnalyze the relationship graph of these signs, trace the flow of \
energy along its edges, and interpret the person's path.",
    );

    PromptPair {
        system: system_prompt(
            "shop_message",
            "a short good-luck charm suggestion matching the sign energy, ~60 chars",
        ),
        user,
    }
}
