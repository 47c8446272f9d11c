use std::path::Path;

use log::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::{MarkovError, Result};
use crate::io;
use crate::model::generation_request::{GenerationRequest, StartSeed};
use crate::model::markov_model::{Generation, MarkovModel};
use crate::report::render_report;
use crate::stats::DocumentStats;
use crate::tokenizer::tokenize;

/// High-level interface over one analysed document.
///
/// # Responsibilities
/// - Load a document and build its `MarkovModel`
/// - Generate sentences from a `GenerationRequest`
/// - Compute the document statistics and render the report
#[derive(Debug)]
pub struct Generator {
	name: String,
	text: String,
	model: MarkovModel,
}

impl Generator {
	/// Creates a generator from a text file.
	///
	/// The document name is the file name without extension.
	///
	/// # Errors
	/// - [`MarkovError::InputUnavailable`] if the file cannot be read
	/// - [`MarkovError::EmptyInput`] if the file contains no word
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		let text = io::read_document(path)?;
		let name = io::document_name(path)
			.map_err(|source| MarkovError::InputUnavailable { path: path.to_path_buf(), source })?;
		info!("Loaded document '{}' ({} bytes)", name, text.len());
		Self::from_text(&name, text)
	}

	/// Creates a generator from an in-memory document.
	///
	/// # Errors
	/// Returns [`MarkovError::EmptyInput`] if `text` contains no word.
	pub fn from_text(name: &str, text: String) -> Result<Self> {
		let model = MarkovModel::from_text(&text)?;
		Ok(Self { name: name.to_owned(), text, model })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn model(&self) -> &MarkovModel {
		&self.model
	}

	/// Generates a sentence.
	///
	/// # Behavior
	/// - `StartSeed::Custom` starts from the given word (validated before any draw)
	/// - `StartSeed::Random` starts from a uniformly drawn vocabulary word
	/// - The random source comes from `request` (seeded or OS entropy)
	pub fn predict(&self, request: &GenerationRequest) -> Result<Generation> {
		let mut rng = request.rng();

		let generation = match &request.start_seed {
			StartSeed::Custom(word) => self.model.generate(word, request.max_words, &mut rng)?,
			StartSeed::Random => {
				// A built model always has at least one word
				let word = self.model.random_word(&mut rng).ok_or(MarkovError::EmptyInput)?;
				debug!("Random start word: '{}'", word);
				self.model.generate(word, request.max_words, &mut rng)?
			}
		};

		if generation.exhausted {
			debug!(
				"Generation stopped after {} of {} words",
				generation.words.len() - 1,
				request.max_words
			);
		}
		Ok(generation)
	}

	/// Computes the document statistics.
	pub fn stats(&self, options: &AnalysisConfig) -> DocumentStats {
		let tokens = tokenize(&self.text);
		DocumentStats::analyze(&self.text, &tokens, &self.model, options)
	}

	/// Renders the statistics report of the document.
	pub fn report(&self, options: &AnalysisConfig) -> String {
		render_report(&self.name, &self.stats(options))
	}
}
