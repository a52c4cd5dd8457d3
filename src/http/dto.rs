//! Data Transfer Objects for the HTTP API.
//!
//! Request DTOs mirror the historical wire format (camelCase birth
//! fields); response DTOs apply the display rounding — two decimals for
//! longitudes, one for degrees — on top of the full-precision chart.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{BirthChart, SignPlacement, Zodiac};

/// Request body for `POST /v1/fortune`. Two mutually exclusive shapes:
/// auto mode supplies `birth`, manual mode supplies `sun` and `moon`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FortuneRequest {
    /// Raw birth data (auto mode).
    pub birth: Option<BirthInput>,
    /// Sign names (manual mode).
    pub sun: Option<String>,
    pub moon: Option<String>,
    pub rising: Option<String>,
    /// Optional free-text concern woven into the prompt.
    pub concern: Option<String>,
}

/// Raw birth fields. Only year/month/day are required; everything else
/// has service defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub tz_offset: Option<f64>,
    #[serde(default)]
    pub time_unknown: bool,
}

/// One placement with display rounding applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementDto {
    pub sign: Zodiac,
    /// Degrees into the sign, rounded to one decimal.
    pub degree: f64,
    /// Ecliptic longitude, rounded to two decimals.
    pub lon: f64,
}

impl From<&SignPlacement> for PlacementDto {
    fn from(p: &SignPlacement) -> Self {
        Self {
            sign: p.sign,
            degree: (p.degree * 10.0).round() / 10.0,
            lon: (p.longitude * 100.0).round() / 100.0,
        }
    }
}

/// The computed chart as returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDto {
    pub sun: PlacementDto,
    pub moon: PlacementDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising: Option<PlacementDto>,
    /// Julian Day of the birth instant, rounded to two decimals.
    pub jd: f64,
}

impl From<&BirthChart> for ChartDto {
    fn from(chart: &BirthChart) -> Self {
        Self {
            sun: PlacementDto::from(&chart.sun),
            moon: PlacementDto::from(&chart.moon),
            rising: chart.rising.as_ref().map(PlacementDto::from),
            jd: (chart.julian_day.value() * 100.0).round() / 100.0,
        }
    }
}

/// Chart data repeated on both success and failure responses so a client
/// never loses computed work to a downstream error.
#[derive(Debug, Clone, Serialize)]
pub struct ChartContext {
    pub chart: ChartDto,
    pub sun: Zodiac,
    pub moon: Zodiac,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising: Option<Zodiac>,
}

impl From<&BirthChart> for ChartContext {
    fn from(chart: &BirthChart) -> Self {
        Self {
            chart: ChartDto::from(chart),
            sun: chart.sun.sign,
            moon: chart.moon.sign,
            rising: chart.rising.map(|p| p.sign),
        }
    }
}

/// Successful reading response (both modes).
#[derive(Debug, Clone, Serialize)]
pub struct ReadingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun: Option<Zodiac>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon: Option<Zodiac>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising: Option<Zodiac>,
    /// The externally sourced reading; `null` in degraded (no credential)
    /// mode.
    pub fortune: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether a completion credential is configured.
    pub completion: String,
}

/// Example payload returned with a 400 when neither request shape is
/// present.
pub fn usage_example() -> serde_json::Value {
    json!({
        "auto": {
            "birth": {
                "year": 1990, "month": 3, "day": 15,
                "hour": 14, "minute": 30,
                "lat": 37.5665, "lon": 126.978, "tzOffset": 9
            },
            "concern": "this year's romance"
        },
        "manual": {
            "sun": "Aries", "moon": "Sagittarius", "rising": "Libra",
            "concern": "career"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::compute_birth_chart;
    use crate::models::BirthMoment;

    fn seoul_moment(time_unknown: bool) -> BirthMoment {
        BirthMoment {
            year: 1990,
            month: 3,
            day: 15,
            hour: if time_unknown { 12 } else { 14 },
            minute: if time_unknown { 0 } else { 30 },
            latitude: 37.5665,
            longitude: 126.978,
            tz_offset_hours: 9.0,
            time_unknown,
        }
    }

    #[test]
    fn birth_input_accepts_camel_case() {
        let input: BirthInput = serde_json::from_str(
            r#"{"year":1990,"month":3,"day":15,"tzOffset":9,"timeUnknown":true}"#,
        )
        .unwrap();
        assert_eq!(input.year, Some(1990));
        assert_eq!(input.tz_offset, Some(9.0));
        assert!(input.time_unknown);
    }

    #[test]
    fn placement_rounding_is_display_only() {
        let chart = compute_birth_chart(&seoul_moment(false));
        let dto = ChartDto::from(&chart);
        assert_eq!(dto.sun.degree, 24.4);
        assert_eq!(dto.sun.lon, 354.37);
        assert_eq!(dto.jd, 2447965.73);
        // The full-precision chart is untouched by DTO rounding.
        assert!((chart.sun.degree - 24.3712).abs() < 1e-3);
    }

    #[test]
    fn rising_is_omitted_from_json_when_absent() {
        let chart = compute_birth_chart(&seoul_moment(true));
        let body = serde_json::to_value(ChartDto::from(&chart)).unwrap();
        assert!(body.get("rising").is_none());
    }
}
