//! Service layer for prompt construction and fortune dispatch.
//!
//! Sits between the pure astronomy/relations code and the HTTP layer:
//! builds the deterministic prompt pair for a resolved sign triple and
//! drives the single outbound completion call.

pub mod fortune;
pub mod prompt;

pub use fortune::{FortuneError, FortuneService};
pub use prompt::{build_birth_prompt, build_manual_prompt, PromptPair};
