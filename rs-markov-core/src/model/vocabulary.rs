use std::collections::HashMap;

/// Bidirectional mapping between distinct words and dense indices `0..len()`.
///
/// Indices are assigned in order of first appearance.
///
/// ## Invariants
/// - `indices[words[i]] == i` for every `i`
/// - `words` contains no duplicate
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Word to index.
	indices: HashMap<String, usize>,
	/// Index to word (the reverse view, built once).
	words: Vec<String>,
}

impl Vocabulary {
	/// Builds the vocabulary of a token sequence.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut vocabulary = Self::default();
		for token in tokens {
			vocabulary.insert(token.as_ref());
		}
		vocabulary
	}

	/// Returns the index of `word`, inserting it if needed.
	fn insert(&mut self, word: &str) -> usize {
		if let Some(index) = self.indices.get(word) {
			return *index;
		}
		let index = self.words.len();
		self.indices.insert(word.to_owned(), index);
		self.words.push(word.to_owned());
		index
	}

	/// Index of an already normalized word.
	pub fn index_of(&self, word: &str) -> Option<usize> {
		self.indices.get(word).copied()
	}

	/// Word stored at `index`.
	pub fn word(&self, index: usize) -> Option<&str> {
		self.words.get(index).map(String::as_str)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Words in index order, as a slice.
	pub fn as_slice(&self) -> &[String] {
		&self.words
	}

	/// Words in index order.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn indices_follow_first_appearance() {
		let vocabulary = Vocabulary::from_tokens(&["b", "a", "b", "c", "a"]);

		assert_eq!(vocabulary.len(), 3);
		assert_eq!(vocabulary.words().collect::<Vec<_>>(), vec!["b", "a", "c"]);
		assert_eq!(vocabulary.index_of("c"), Some(2));
		assert_eq!(vocabulary.as_slice(), ["b", "a", "c"]);
		assert_eq!(vocabulary.index_of("d"), None);
	}

	#[test]
	fn forward_and_reverse_views_agree() {
		let vocabulary = Vocabulary::from_tokens(&["the", "cat", "saw", "the", "dog"]);

		for (index, word) in vocabulary.words().enumerate() {
			assert_eq!(vocabulary.index_of(word), Some(index));
			assert_eq!(vocabulary.word(index), Some(word));
		}
		assert_eq!(vocabulary.word(vocabulary.len()), None);
	}

	#[test]
	fn empty_tokens_give_empty_vocabulary() {
		let vocabulary = Vocabulary::from_tokens::<&str>(&[]);
		assert!(vocabulary.is_empty());
	}
}
