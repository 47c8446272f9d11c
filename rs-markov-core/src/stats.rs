//! Letter and word frequency statistics of a document.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::model::markov_model::MarkovModel;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LetterCount {
	pub letter: char,
	pub count: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WordCount {
	pub word: String,
	pub count: usize,
}

/// One of the most frequent words and the words that most often follow it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FrequentWord {
	pub word: String,
	pub count: usize,
	pub followers: Vec<WordCount>,
}

/// Everything the statistics report shows about a document.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DocumentStats {
	/// Number of words (tokens) in the document.
	pub token_count: usize,
	/// Number of distinct words.
	pub vocabulary_size: usize,
	/// `a` to `z`, most frequent first.
	pub letters: Vec<LetterCount>,
	pub frequent_words: Vec<FrequentWord>,
}

impl DocumentStats {
	/// Computes the statistics of a document.
	///
	/// - `text`: raw document text, used for letter counts
	/// - `tokens`: the tokenized document
	/// - `model`: the Markov model built from `tokens`, used for followers
	pub fn analyze<S: AsRef<str>>(text: &str, tokens: &[S], model: &MarkovModel, options: &AnalysisConfig) -> Self {
		let frequent_words = most_frequent_words(tokens, Some(options.top_words))
			.into_iter()
			.map(|WordCount { word, count }| {
				let followers = model
					.successors(&word)
					.into_iter()
					.take(options.followers)
					.map(|(next, occurrence)| WordCount { word: next.to_owned(), count: occurrence as usize })
					.collect();
				FrequentWord { word, count, followers }
			})
			.collect();

		Self {
			token_count: tokens.len(),
			vocabulary_size: model.len(),
			letters: count_letters(text),
			frequent_words,
		}
	}
}

/// Counts the letters `a` to `z` of the lowercased text.
///
/// All 26 letters are returned, most frequent first, ties in alphabetical order.
pub fn count_letters(text: &str) -> Vec<LetterCount> {
	let mut counts = [0usize; 26];
	for c in text.to_lowercase().chars() {
		if c.is_ascii_lowercase() {
			counts[(c as u8 - b'a') as usize] += 1;
		}
	}

	let mut letters: Vec<LetterCount> = (b'a'..=b'z')
		.zip(counts)
		.map(|(letter, count)| LetterCount { letter: letter as char, count })
		.collect();
	// Stable sort keeps the alphabetical order among ties
	letters.sort_by(|a, b| b.count.cmp(&a.count));
	letters
}

/// Returns the `k` most frequent words, most frequent first, ties in
/// alphabetical order. `None` returns every distinct word.
pub fn most_frequent_words<S: AsRef<str>>(tokens: &[S], k: Option<usize>) -> Vec<WordCount> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for token in tokens {
		*counts.entry(token.as_ref()).or_insert(0) += 1;
	}

	let mut words: Vec<WordCount> = counts
		.into_iter()
		.map(|(word, count)| WordCount { word: word.to_owned(), count })
		.collect();
	words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

	if let Some(k) = k {
		words.truncate(k);
	}
	words
}
