use std::collections::BTreeMap;

use rand::Rng;

/// One row of the transition table.
///
/// A `State` corresponds to a vocabulary entry and stores every
/// observed transition from this word to the next one, first as raw counts
/// and then, once [`State::normalize`] has run, as probabilities.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their probability. Only non-zero cells are stored.
///
/// ## Invariants
/// - Each transition count is strictly positive
/// - After normalization, `probabilities` is empty (terminal word) or sums to 1.0
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Outgoing transitions indexed by the next word index.
	/// Example: { 3 => 42, 7 => 3 }
	transitions: BTreeMap<usize, u64>,
	/// Normalized row, ordered by next word index.
	probabilities: Vec<(usize, f64)>,
}

impl State {
	/// Creates a new empty row.
	pub fn new() -> Self {
		Self {
			transitions: BTreeMap::new(),
			probabilities: Vec::new(),
		}
	}

	/// Records an occurrence of a transition toward `next`.
	pub fn add_transition(&mut self, next: usize) {
		*self.transitions.entry(next).or_insert(0) += 1;
	}

	/// Computes the row probabilities from the recorded counts.
	///
	/// A row without transitions stays empty (all zeros).
	pub fn normalize(&mut self) {
		let total = self.total() as f64;
		self.probabilities = if total > 0.0 {
			self.transitions
				.iter()
				.map(|(next, occurrence)| (*next, *occurrence as f64 / total))
				.collect()
		} else {
			Vec::new()
		};
	}

	/// Number of transitions leaving this word.
	pub fn total(&self) -> u64 {
		self.transitions.values().sum()
	}

	pub fn count(&self, next: usize) -> u64 {
		self.transitions.get(&next).copied().unwrap_or(0)
	}

	/// Recorded counts, ordered by next word index.
	pub fn counts(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
		self.transitions.iter().map(|(next, occurrence)| (*next, *occurrence))
	}

	pub fn probability(&self, next: usize) -> f64 {
		self.probabilities
			.binary_search_by_key(&next, |(index, _)| *index)
			.map(|position| self.probabilities[position].1)
			.unwrap_or(0.0)
	}

	/// Non-zero probabilities, ordered by next word index.
	pub fn probabilities(&self) -> &[(usize, f64)] {
		&self.probabilities
	}

	/// A terminal word was never followed by anything.
	pub fn is_terminal(&self) -> bool {
		self.probabilities.is_empty()
	}

	/// Draws the next word index using the row probabilities as weights.
	///
	/// This method performs:
	/// - an O(n) scan over the transitions
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the row has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
		let total: f64 = self.probabilities.iter().map(|(_, probability)| probability).sum();
		if total <= 0.0 {
			return None;
		}

		let mut r = rng.random_range(0.0..total);

		let mut fallback: Option<usize> = None;
		for (next, probability) in &self.probabilities {
			if r < *probability {
				return Some(*next);
			}
			r -= probability;
			fallback = Some(*next);
		}

		// Rounding may leave `r` just above the last bucket
		fallback
	}
}
