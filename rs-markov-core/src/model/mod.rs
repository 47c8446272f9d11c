//! Markov chain model and text generation.
//!
//! This module provides:
//! - The word index (`Vocabulary`)
//! - The first-order transition model (`MarkovModel`)
//! - Generation parameters (`GenerationRequest`)
//! - A high-level document interface (`Generator`)

/// High-level interface over one analysed document.
///
/// Loads a document, builds its model, generates sentences and
/// computes statistics.
pub mod generator;

/// First-order Markov model over a word sequence.
///
/// Handles transition counting, row normalization
/// and weighted random walks.
pub mod markov_model;

/// Distinct words and their indices.
pub mod vocabulary;

/// One row of the transition table.
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;

/// Generation parameters: start word, length and random source.
pub mod generation_request;
