//! Configuration loading.
//!
//! Configuration is read from a TOML file with the following resolution order:
//! 1. the path given explicitly (`--config <path>`)
//! 2. `./rs-markov.toml` if it exists
//! 3. built-in defaults
//!
//! Every field is optional, missing ones take their default value.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rs-markov.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub analysis: AnalysisConfig,
	#[serde(default)]
	pub generation: GenerationConfig,
	#[serde(default)]
	pub server: ServerConfig,
}

/// Statistics report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
	/// Number of most frequent words listed (default: 5).
	#[serde(default = "default_top_words")]
	pub top_words: usize,
	/// Number of followers listed per frequent word (default: 3).
	#[serde(default = "default_followers")]
	pub followers: usize,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			top_words: default_top_words(),
			followers: default_followers(),
		}
	}
}

fn default_top_words() -> usize {
	5
}

fn default_followers() -> usize {
	3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
	/// Words generated when the caller gives no count (default: 20).
	#[serde(default = "default_max_words")]
	pub max_words: usize,
	/// Fixed random seed, OS entropy when absent.
	#[serde(default)]
	pub rng_seed: Option<u64>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			max_words: default_max_words(),
			rng_seed: None,
		}
	}
}

fn default_max_words() -> usize {
	20
}

/// HTTP service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
	/// Address to bind to (default: 127.0.0.1:5000).
	#[serde(default = "default_address")]
	pub address: String,
	/// Folder holding the `.txt` documents (default: ./data).
	#[serde(default = "default_data_dir")]
	pub data_dir: String,
	/// Largest `max_words` accepted by `/v1/generate` (default: 10000).
	#[serde(default = "default_max_words_limit")]
	pub max_words_limit: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			address: default_address(),
			data_dir: default_data_dir(),
			max_words_limit: default_max_words_limit(),
		}
	}
}

fn default_address() -> String {
	"127.0.0.1:5000".to_owned()
}

fn default_data_dir() -> String {
	"./data".to_owned()
}

fn default_max_words_limit() -> usize {
	10_000
}

impl Config {
	/// Loads the configuration, see the module documentation for the lookup order.
	///
	/// # Errors
	/// Returns [`MarkovError::Config`] if an explicit path cannot be read, or
	/// if the selected file is not valid TOML.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Self::from_file(path),
			None => {
				let default_path = Path::new(DEFAULT_CONFIG_FILE);
				if default_path.is_file() {
					Self::from_file(default_path)
				} else {
					debug!("No configuration file, using defaults");
					Ok(Self::default())
				}
			}
		}
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.map_err(|e| MarkovError::Config(format!("cannot read {}: {e}", path.display())))?;
		debug!("Configuration loaded from {}", path.display());
		Self::parse(&content)
	}

	/// Parses a TOML document.
	pub fn parse(content: &str) -> Result<Self> {
		toml::from_str(content).map_err(|e| MarkovError::Config(e.to_string()))
	}
}
