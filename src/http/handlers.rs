//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for prompt building and the outbound completion call.

use axum::{extract::State, Json};

use super::dto::{
    BirthInput, ChartContext, FortuneRequest, HealthResponse, ReadingResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::astro::compute_birth_chart;
use crate::models::{
    BirthMoment, Zodiac, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_TZ_OFFSET_HOURS, NOON_HOUR,
};
use crate::services::{build_birth_prompt, build_manual_prompt, FortuneError};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint; reports whether a completion credential is
/// configured.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let completion = if state.fortune.is_enabled() {
        "configured"
    } else {
        "absent"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        completion: completion.to_string(),
    }))
}

// =============================================================================
// Fortune
// =============================================================================

/// POST /v1/fortune
///
/// Mode dispatch at the boundary: a `birth` object selects auto mode
/// (compute the chart, then ask for a reading); bare `sun`/`moon` sign
/// names select manual mode (no chart computation). Neither shape → 400
/// with usage examples.
pub async fn fortune(
    State(state): State<AppState>,
    Json(request): Json<FortuneRequest>,
) -> HandlerResult<ReadingResponse> {
    if let Some(birth) = request.birth {
        return auto_reading(&state, birth, request.concern.as_deref()).await;
    }
    if request.sun.is_some() || request.moon.is_some() {
        return manual_reading(&state, &request).await;
    }
    Err(AppError::UnknownShape)
}

/// Auto mode: compute the chart from raw birth data, then request the
/// reading. Without a credential this degrades to a 200 with the chart
/// and `fortune: null`; after the chart exists, any failure still returns
/// it alongside the error.
async fn auto_reading(
    state: &AppState,
    birth: BirthInput,
    concern: Option<&str>,
) -> HandlerResult<ReadingResponse> {
    let moment = resolve_moment(&birth)?;

    let chart = compute_birth_chart(&moment);
    let context = ChartContext::from(&chart);
    tracing::info!(
        sun = %context.sun,
        moon = %context.moon,
        rising = context.rising.map(|s| s.name()),
        "birth chart computed"
    );

    let birth_date = if moment.time_unknown {
        format!("{}.{}.{}", moment.year, moment.month, moment.day)
    } else {
        format!(
            "{}.{}.{} {}:{:02}",
            moment.year, moment.month, moment.day, moment.hour, moment.minute
        )
    };

    if !state.fortune.is_enabled() {
        // Graceful degradation: the chart is still worth returning.
        return Ok(Json(ReadingResponse {
            chart: Some(context.chart),
            sun: Some(context.sun),
            moon: Some(context.moon),
            rising: context.rising,
            fortune: None,
            birth_date: Some(birth_date),
            message: Some("no completion credential configured; chart only".to_string()),
        }));
    }

    let prompt = build_birth_prompt(&chart, &moment, concern);
    let fortune = state
        .fortune
        .reading(&prompt)
        .await
        .map_err(|err| AppError::with_chart(err, context.clone()))?;

    Ok(Json(ReadingResponse {
        chart: Some(context.chart),
        sun: Some(context.sun),
        moon: Some(context.moon),
        rising: context.rising,
        fortune: Some(fortune),
        birth_date: Some(birth_date),
        message: None,
    }))
}

/// Manual mode: the caller supplies the sign triple directly. There is no
/// degraded path here — without a credential the request fails.
async fn manual_reading(
    state: &AppState,
    request: &FortuneRequest,
) -> HandlerResult<ReadingResponse> {
    let sun = parse_sign(request.sun.as_deref(), "sun")?;
    let moon = parse_sign(request.moon.as_deref(), "moon")?;
    let rising = request
        .rising
        .as_deref()
        .map(|s| s.parse::<Zodiac>())
        .transpose()
        .map_err(|e| AppError::bare(FortuneError::UnknownSign(e)))?;

    if !state.fortune.is_enabled() {
        return Err(AppError::bare(FortuneError::CredentialMissing));
    }

    let prompt = build_manual_prompt(sun, moon, rising, request.concern.as_deref());
    let fortune = state.fortune.reading(&prompt).await.map_err(AppError::bare)?;

    Ok(Json(ReadingResponse {
        chart: None,
        sun: Some(sun),
        moon: Some(moon),
        rising,
        fortune: Some(fortune),
        birth_date: None,
        message: None,
    }))
}

/// Validate required birth fields and fill in service defaults.
fn resolve_moment(birth: &BirthInput) -> Result<BirthMoment, AppError> {
    let year = birth
        .year
        .ok_or(AppError::bare(FortuneError::MissingField("year")))?;
    let month = birth
        .month
        .ok_or(AppError::bare(FortuneError::MissingField("month")))?;
    let day = birth
        .day
        .ok_or(AppError::bare(FortuneError::MissingField("day")))?;

    Ok(BirthMoment {
        year,
        month,
        day,
        hour: if birth.time_unknown {
            NOON_HOUR
        } else {
            birth.hour.unwrap_or(NOON_HOUR)
        },
        minute: if birth.time_unknown {
            0
        } else {
            birth.minute.unwrap_or(0)
        },
        latitude: birth.lat.unwrap_or(DEFAULT_LATITUDE),
        longitude: birth.lon.unwrap_or(DEFAULT_LONGITUDE),
        tz_offset_hours: birth.tz_offset.unwrap_or(DEFAULT_TZ_OFFSET_HOURS),
        time_unknown: birth.time_unknown,
    })
}

fn parse_sign(value: Option<&str>, field: &'static str) -> Result<Zodiac, AppError> {
    let raw = value.ok_or(AppError::bare(FortuneError::MissingField(field)))?;
    raw.parse::<Zodiac>()
        .map_err(|e| AppError::bare(FortuneError::UnknownSign(e)))
}
