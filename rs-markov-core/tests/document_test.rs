//! End-to-end: document file to statistics, report and generated text.

use std::fs;

use rs_markov_core::config::AnalysisConfig;
use rs_markov_core::{GenerationRequest, Generator, MarkovError};
use tempfile::tempdir;

const DOCUMENT: &str = "\
It was the best of times, it was the worst of times.

It was the age of wisdom, it was the age of foolishness...
";

#[test]
fn document_round_trip() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("dickens.txt");
	fs::write(&path, DOCUMENT).unwrap();

	let generator = Generator::from_file(&path).unwrap();
	assert_eq!(generator.name(), "dickens");

	let stats = generator.stats(&AnalysisConfig::default());
	assert_eq!(stats.token_count, 24);
	assert_eq!(stats.vocabulary_size, 10);
	assert_eq!(stats.frequent_words.len(), 5);
	let word_total: usize = rs_markov_core::stats::most_frequent_words(&rs_markov_core::tokenizer::tokenize(DOCUMENT), None)
		.iter()
		.map(|w| w.count)
		.sum();
	assert_eq!(word_total, stats.token_count);

	let report = generator.report(&AnalysisConfig::default());
	assert!(report.starts_with("Analyzed document: dickens\n"));
	assert!(report.contains("Count of words:         24\n"));
	assert!(report.contains("Number of unique words: 10\n"));

	let mut request = GenerationRequest::from_word("It", 6);
	request.set_rng_seed(Some(5));
	let generation = generator.predict(&request).unwrap();
	assert_eq!(generation.words[0], "it");
	assert_eq!(generation.words.get(1).map(String::as_str), Some("was"));
}

#[test]
fn missing_document_is_unavailable() {
	let dir = tempdir().unwrap();

	let result = Generator::from_file(dir.path().join("missing.txt"));
	assert!(matches!(result, Err(MarkovError::InputUnavailable { .. })));
}

#[test]
fn punctuation_only_document_is_empty() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("blank.txt");
	fs::write(&path, "\n\n... !!! ???\n").unwrap();

	assert!(matches!(Generator::from_file(&path), Err(MarkovError::EmptyInput)));
}
