//! Error types shared by the whole crate.

use std::path::PathBuf;

/// Errors raised while reading documents, building models or generating text.
///
/// A walk that stops early because it reached a word without successor is
/// not an error: see [`Generation::exhausted`](crate::model::markov_model::Generation::exhausted).
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	/// The document could not be opened or read.
	#[error("document unavailable: {}: {source}", path.display())]
	InputUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Tokenization produced no token, there is nothing to build a model from.
	#[error("no word found in the input text")]
	EmptyInput,

	/// The (normalized) seed word is not part of the vocabulary.
	#[error("unknown seed word: '{0}'")]
	UnknownSeedWord(String),

	/// The configuration file could not be read or parsed.
	#[error("configuration error: {0}")]
	Config(String),
}

/// Result type alias using [`MarkovError`].
pub type Result<T> = std::result::Result<T, MarkovError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_seed_word_reports_the_word() {
		let err = MarkovError::UnknownSeedWord("zebra".to_owned());
		assert_eq!(err.to_string(), "unknown seed word: 'zebra'");
	}

	#[test]
	fn input_unavailable_keeps_the_io_source() {
		let err = MarkovError::InputUnavailable {
			path: PathBuf::from("missing.txt"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
		};
		assert!(err.to_string().starts_with("document unavailable: missing.txt"));
		assert!(std::error::Error::source(&err).is_some());
	}
}
