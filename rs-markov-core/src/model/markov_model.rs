use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::state::State;
use super::vocabulary::Vocabulary;
use crate::error::{MarkovError, Result};
use crate::tokenizer::{normalize_word, tokenize};

/// First-order Markov model over a word sequence.
///
/// The `MarkovModel` stores one [`State`] (transition row) per vocabulary
/// entry and generates text by walking the chain from a seed word.
///
/// # Responsibilities
/// - Index the distinct words of a token sequence
/// - Count every observed adjacent pair and normalize each row
/// - Draw random walks weighted by the transition probabilities
///
/// # Invariants
/// - `states.len() == vocabulary.len()`
/// - Every row is either empty (terminal word) or sums to 1.0
/// - The model is never mutated after [`MarkovModel::build`]
#[derive(Clone, Debug)]
pub struct MarkovModel {
	vocabulary: Vocabulary,
	states: Vec<State>,
	/// Length of the sequence the model was built from.
	token_count: usize,
}

/// Result of a random walk.
///
/// `words` always starts with the seed word. `exhausted` is set when the walk
/// reached a word without recorded successor before the requested length;
/// the words generated so far are still a valid output.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Generation {
	pub words: Vec<String>,
	pub exhausted: bool,
}

impl Generation {
	/// Generated words joined by single spaces.
	pub fn text(&self) -> String {
		self.words.join(" ")
	}
}

impl MarkovModel {
	/// Builds the model from a token sequence.
	///
	/// Scans every adjacent pair `(t[i], t[i + 1])`, counts it, then
	/// normalizes each row by its total. Words never followed by anything
	/// keep an all-zero row.
	///
	/// # Errors
	/// Returns [`MarkovError::EmptyInput`] if `tokens` is empty.
	pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
		if tokens.is_empty() {
			return Err(MarkovError::EmptyInput);
		}

		let vocabulary = Vocabulary::from_tokens(tokens);
		let mut states: Vec<State> = (0..vocabulary.len()).map(|_| State::new()).collect();

		// Tokens all come from the vocabulary, the lookups cannot miss
		let indices: Vec<usize> = tokens
			.iter()
			.filter_map(|token| vocabulary.index_of(token.as_ref()))
			.collect();

		for pair in indices.windows(2) {
			states[pair[0]].add_transition(pair[1]);
		}

		for state in &mut states {
			state.normalize();
		}

		let model = Self { vocabulary, states, token_count: tokens.len() };
		debug!(
			"Markov model built: {} tokens, {} distinct words, {} terminal",
			model.token_count,
			model.len(),
			model.states.iter().filter(|state| state.is_terminal()).count()
		);
		Ok(model)
	}

	/// Tokenizes `text` and builds the model from the resulting words.
	pub fn from_text(text: &str) -> Result<Self> {
		Self::build(&tokenize(text))
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.vocabulary.len()
	}

	/// Always `false` for a built model, kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.vocabulary.is_empty()
	}

	/// Number of tokens the model was built from.
	pub fn token_count(&self) -> usize {
		self.token_count
	}

	/// Sum of all transition counts (`token_count - 1`).
	pub fn total_transitions(&self) -> u64 {
		self.states.iter().map(State::total).sum()
	}

	/// Case-insensitive vocabulary membership.
	pub fn contains(&self, word: &str) -> bool {
		self.lookup(word).is_some()
	}

	fn lookup(&self, word: &str) -> Option<usize> {
		self.vocabulary.index_of(&normalize_word(word))
	}

	/// Number of times `to` directly followed `from`.
	pub fn count(&self, from: &str, to: &str) -> u64 {
		match (self.lookup(from), self.lookup(to)) {
			(Some(from), Some(to)) => self.states[from].count(to),
			_ => 0,
		}
	}

	/// Transition probability `P(to | from)`, `0.0` for unknown words.
	pub fn probability(&self, from: &str, to: &str) -> f64 {
		match (self.lookup(from), self.lookup(to)) {
			(Some(from), Some(to)) => self.states[from].probability(to),
			_ => 0.0,
		}
	}

	/// Dense transition row of `word`, in vocabulary index order.
	pub fn row(&self, word: &str) -> Option<Vec<f64>> {
		self.lookup(word).map(|index| self.dense_row(index))
	}

	fn dense_row(&self, index: usize) -> Vec<f64> {
		let mut row = vec![0.0; self.len()];
		for (next, probability) in self.states[index].probabilities() {
			row[*next] = *probability;
		}
		row
	}

	/// Dense transition rows in vocabulary index order.
	pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
		(0..self.len()).map(|index| self.dense_row(index))
	}

	/// Words observed right after `word` with their counts,
	/// most frequent first (ties in alphabetical order).
	///
	/// Empty for unknown or terminal words.
	pub fn successors(&self, word: &str) -> Vec<(&str, u64)> {
		let Some(index) = self.lookup(word) else {
			return Vec::new();
		};

		let mut successors: Vec<(&str, u64)> = self.states[index]
			.counts()
			.filter_map(|(next, occurrence)| self.vocabulary.word(next).map(|w| (w, occurrence)))
			.collect();
		successors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		successors
	}

	/// `Some(true)` if `word` was never followed by anything, `None` if unknown.
	pub fn is_terminal(&self, word: &str) -> Option<bool> {
		self.lookup(word).map(|index| self.states[index].is_terminal())
	}

	/// Uniformly picks a vocabulary word, useful as a random seed.
	pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.vocabulary.as_slice().choose(rng).map(String::as_str)
	}

	/// Generates up to `max_words` words after `seed` with a weighted random walk.
	///
	/// # Behavior
	/// - Looks `seed` up case-insensitively before touching `rng`
	/// - At each step, draws the next word from the current row
	/// - Stops early (and flags the result as exhausted) on a terminal word
	///
	/// # Errors
	/// Returns [`MarkovError::UnknownSeedWord`] with the normalized seed if it
	/// is not in the vocabulary.
	pub fn generate<R: Rng + ?Sized>(&self, seed: &str, max_words: usize, rng: &mut R) -> Result<Generation> {
		let normalized = normalize_word(seed);
		let Some(mut current) = self.vocabulary.index_of(&normalized) else {
			return Err(MarkovError::UnknownSeedWord(normalized));
		};

		let mut words = vec![normalized];

		for _ in 0..max_words {
			match self.states[current].predict(rng) {
				Some(next) => {
					// Indices drawn from a row are always in the vocabulary
					if let Some(word) = self.vocabulary.word(next) {
						words.push(word.to_owned());
					}
					current = next;
				}
				None => {
					debug!("Walk exhausted after {} words: '{}' has no successor", words.len(), words[words.len() - 1]);
					return Ok(Generation { words, exhausted: true });
				}
			}
		}

		Ok(Generation { words, exhausted: false })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_sequence_is_rejected() {
		assert!(matches!(MarkovModel::build::<&str>(&[]), Err(MarkovError::EmptyInput)));
		assert!(matches!(MarkovModel::from_text(" ... "), Err(MarkovError::EmptyInput)));
	}

	#[test]
	fn single_token_gives_a_terminal_word() {
		let model = MarkovModel::build(&["alone"]).unwrap();

		assert_eq!(model.len(), 1);
		assert_eq!(model.total_transitions(), 0);
		assert_eq!(model.is_terminal("alone"), Some(true));
		assert_eq!(model.row("alone"), Some(vec![0.0]));
	}

	#[test]
	fn alternating_sequence_counts_and_rows() {
		let model = MarkovModel::build(&["a", "b", "a", "b", "a"]).unwrap();

		assert_eq!(model.len(), 2);
		assert_eq!(model.count("a", "b"), 2);
		assert_eq!(model.count("b", "a"), 2);
		assert_eq!(model.count("a", "a"), 0);
		assert_eq!(model.count("b", "b"), 0);
		assert_eq!(model.probability("a", "b"), 1.0);
		assert_eq!(model.probability("b", "a"), 1.0);
		assert_eq!(model.probability("a", "a"), 0.0);

		let a = model.vocabulary().index_of("a").unwrap();
		let b = model.vocabulary().index_of("b").unwrap();
		let row_a = model.row("a").unwrap();
		let row_b = model.row("b").unwrap();
		assert_eq!((row_a[a], row_a[b]), (0.0, 1.0));
		assert_eq!((row_b[a], row_b[b]), (1.0, 0.0));
	}

	#[test]
	fn last_token_is_not_given_a_successor() {
		let model = MarkovModel::build(&["x", "y", "z"]).unwrap();

		assert_eq!(model.total_transitions(), 2);
		assert_eq!(model.is_terminal("z"), Some(true));
		assert_eq!(model.is_terminal("x"), Some(false));
		assert_eq!(model.is_terminal("w"), None);
	}

	#[test]
	fn successors_are_ranked() {
		let model = MarkovModel::from_text("the cat the dog the cat the end").unwrap();

		assert_eq!(model.successors("the"), vec![("cat", 2), ("dog", 1), ("end", 1)]);
		assert!(model.successors("end").is_empty());
		assert!(model.successors("unknown").is_empty());
	}

	#[test]
	fn lookups_ignore_case() {
		let model = MarkovModel::from_text("the cat sat").unwrap();

		assert!(model.contains("The"));
		assert!(model.contains(" CAT "));
		assert_eq!(model.count("THE", "Cat"), 1);
	}

	#[test]
	fn zero_words_returns_the_seed() {
		let model = MarkovModel::from_text("a b c a b c").unwrap();
		let generation = model.generate("b", 0, &mut StdRng::seed_from_u64(0)).unwrap();

		assert_eq!(generation.words, vec!["b"]);
		assert!(!generation.exhausted);
	}

	#[test]
	fn terminal_seed_is_exhausted_immediately() {
		let model = MarkovModel::from_text("a b c").unwrap();
		let generation = model.generate("c", 10, &mut StdRng::seed_from_u64(0)).unwrap();

		assert_eq!(generation.words, vec!["c"]);
		assert!(generation.exhausted);
	}

	#[test]
	fn deterministic_chain_is_followed() {
		let model = MarkovModel::from_text("one two three four").unwrap();
		let generation = model.generate("One", 10, &mut StdRng::seed_from_u64(9)).unwrap();

		assert_eq!(generation.text(), "one two three four");
		assert!(generation.exhausted);
	}

	#[test]
	fn walk_stops_at_max_words() {
		let model = MarkovModel::from_text("a b a b a").unwrap();
		let generation = model.generate("a", 4, &mut StdRng::seed_from_u64(1)).unwrap();

		assert_eq!(generation.words, vec!["a", "b", "a", "b", "a"]);
		assert!(!generation.exhausted);
	}

	#[test]
	fn unknown_seed_reports_normalized_word() {
		let model = MarkovModel::from_text("a b").unwrap();

		match model.generate("  Zebra ", 3, &mut StdRng::seed_from_u64(1)) {
			Err(MarkovError::UnknownSeedWord(word)) => assert_eq!(word, "zebra"),
			other => panic!("Expected UnknownSeedWord, got {other:?}"),
		}
	}

	#[test]
	fn random_word_is_in_vocabulary() {
		let model = MarkovModel::from_text("red green blue").unwrap();
		let mut rng = StdRng::seed_from_u64(5);

		for _ in 0..20 {
			let word = model.random_word(&mut rng).unwrap();
			assert!(model.contains(word));
		}
	}

	#[test]
	fn random_word_reaches_every_word() {
		let model = MarkovModel::from_text("red green blue").unwrap();
		let mut rng = StdRng::seed_from_u64(6);

		let drawn: std::collections::HashSet<&str> = (0..200).filter_map(|_| model.random_word(&mut rng)).collect();
		assert_eq!(drawn.len(), 3);
	}
}
