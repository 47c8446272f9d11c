use rand::SeedableRng;
use rand::rngs::StdRng;

/// Strategy used to select the starting word of a walk.
///
/// # Variants
/// - `Random`: pick a vocabulary word uniformly.
/// - `Custom(String)`: start from the given word (matched case-insensitively).
#[derive(Debug, Clone, PartialEq)]
pub enum StartSeed {
	Random,
	Custom(String),
}

impl From<Option<String>> for StartSeed {
	fn from(word: Option<String>) -> Self {
		match word {
			Some(word) if !word.trim().is_empty() => StartSeed::Custom(word),
			_ => StartSeed::Random,
		}
	}
}

/// Input parameters of a generation.
///
/// # Responsibilities
/// - Track the start word and the maximum number of generated words
/// - Provide the random source of the walk, seeded when reproducibility is wanted
pub struct GenerationRequest {
	/// How the first word is chosen.
	pub start_seed: StartSeed,

	/// Maximum number of words generated after the start word.
	pub max_words: usize,

	/// Seed of the random source, `None` for OS entropy.
	rng_seed: Option<u64>,
}

impl GenerationRequest {
	/// Creates a request starting from a random word.
	pub fn new(max_words: usize) -> Self {
		Self {
			start_seed: StartSeed::Random,
			max_words,
			rng_seed: None,
		}
	}

	/// Creates a request starting from `word`.
	pub fn from_word(word: &str, max_words: usize) -> Self {
		Self {
			start_seed: StartSeed::Custom(word.to_owned()),
			..Self::new(max_words)
		}
	}

	pub fn rng_seed(&self) -> Option<u64> {
		self.rng_seed
	}

	/// Fixes the random source seed so the walk can be replayed.
	pub fn set_rng_seed(&mut self, rng_seed: Option<u64>) {
		self.rng_seed = rng_seed;
	}

	/// Builds the random source described by this request.
	pub fn rng(&self) -> StdRng {
		match self.rng_seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}
