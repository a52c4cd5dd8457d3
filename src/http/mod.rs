//! HTTP server module for the fortune backend.
//!
//! This module provides an axum-based HTTP server exposing the chart
//! calculator and fortune dispatcher as a small REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request shape dispatch and validation                  │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, error handling                                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Prompt construction                                    │
//! │  - Completion dispatch + response extraction              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Core (astro/, models/, relations)                        │
//! │  - Julian Day + ecliptic longitudes                       │
//! │  - Sign placements and the attribute table                │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
