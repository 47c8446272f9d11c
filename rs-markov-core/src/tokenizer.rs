use std::sync::LazyLock;

use regex::Regex;

/// Punctuation removed before words are extracted.
const STRIPPED_PUNCTUATION: &[char] = &[',', '?', '!', '#', '.', ':', '(', ')', '"'];

/// A word: letters, digits, underscore and apostrophes (ASCII and typographic),
/// never starting or ending with an apostrophe.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	// Literal pattern, cannot fail to compile
	Regex::new(r"\b[\w'’]+\b").unwrap()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Splits raw text into lowercase word tokens.
///
/// - Lowercases the whole text
/// - Removes the characters `, ? ! # . : ( ) "`
/// - Collapses consecutive whitespace (newlines included) into one space
/// - Extracts the words in their order of appearance
///
/// Empty input gives an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase().replace(STRIPPED_PUNCTUATION, "");
	let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");

	WORD_PATTERN
		.find_iter(&collapsed)
		.map(|word| word.as_str().to_owned())
		.collect()
}

/// Normalizes a single word the way the tokenizer does (trim + lowercase).
///
/// Used for vocabulary lookups of user-provided words.
pub fn normalize_word(word: &str) -> String {
	word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_punctuation_and_lowercases() {
		assert_eq!(tokenize("Hello, world! Hello world."), vec!["hello", "world", "hello", "world"]);
	}

	#[test]
	fn empty_text_gives_no_token() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  \n\t ").is_empty());
		assert!(tokenize("?!.,").is_empty());
	}

	#[test]
	fn keeps_contractions() {
		assert_eq!(tokenize("Don't stop, it’s fine"), vec!["don't", "stop", "it’s", "fine"]);
	}

	#[test]
	fn apostrophes_do_not_lead_or_trail() {
		assert_eq!(tokenize("'quoted' dogs'"), vec!["quoted", "dogs"]);
	}

	#[test]
	fn newlines_and_spaces_are_separators() {
		assert_eq!(tokenize("One\ntwo   three\r\n\nfour"), vec!["one", "two", "three", "four"]);
	}

	#[test]
	fn digits_and_underscores_are_word_characters() {
		assert_eq!(tokenize("Route_66 (opened 1926)"), vec!["route_66", "opened", "1926"]);
	}

	#[test]
	fn other_punctuation_splits_words() {
		assert_eq!(tokenize("well-known; fact"), vec!["well", "known", "fact"]);
	}

	#[test]
	fn normalize_word_trims_and_lowercases() {
		assert_eq!(normalize_word("  The "), "the");
	}
}
