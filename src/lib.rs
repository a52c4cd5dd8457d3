//! # Natal Fortune Backend
//!
//! Approximate birth-chart computation with an LLM-backed fortune reading.
//!
//! This crate computes a natal chart (Sun, Moon and ascendant sign
//! placements) from a civil date/time/location, describes the resulting
//! sign triple with a static astrological knowledge base, and dispatches
//! that description to the Anthropic Messages API for a structured JSON
//! reading. The HTTP surface is a single POST endpoint plus a health
//! check, served via axum.
//!
//! ## Features
//!
//! - **Chart Calculator**: Julian Day conversion and low-order solar,
//!   lunar and ascendant longitude models (pure, deterministic)
//! - **Knowledge Base**: per-sign elements, qualities, rulers, keywords
//!   and compatibility edges
//! - **Relations**: angular aspects and element relationships between signs
//! - **Prompt Builder & Dispatcher**: deterministic prompt pair, one
//!   outbound completion call, JSON-from-text extraction
//! - **HTTP API**: REST endpoint with permissive CORS and graceful
//!   degradation when no credential is configured
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: zodiac enumeration, attribute table, chart value types
//! - [`astro`]: Julian Day and ecliptic longitude computation
//! - [`relations`]: aspect and element relationship utilities
//! - [`llm`]: the outbound completion capability
//! - [`services`]: prompt construction and fortune orchestration
//! - [`http`]: axum-based HTTP server and request handlers

pub mod astro;
pub mod config;
pub mod llm;
pub mod models;
pub mod relations;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
