//! Markov chain text analysis and generation library.
//!
//! This crate provides:
//! - A word tokenizer
//! - A first-order Markov model built from a word sequence
//! - Weighted random walk generation with an injectable random source
//! - Letter and word frequency statistics, rendered as a text report
//!
//! Document loading and configuration are exposed for the binaries.

/// Markov model and generation logic.
pub mod model;

/// Word extraction and normalization.
pub mod tokenizer;

/// Letter and word frequency statistics.
pub mod stats;

/// Text report rendering.
pub mod report;

/// TOML configuration.
pub mod config;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (document loading, path helpers).
pub mod io;

pub use error::{MarkovError, Result};
pub use model::generation_request::{GenerationRequest, StartSeed};
pub use model::generator::Generator;
pub use model::markov_model::{Generation, MarkovModel};
