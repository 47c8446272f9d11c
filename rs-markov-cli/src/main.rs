use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{info, warn};

use rs_markov_core::config::Config;
use rs_markov_core::{Generation, GenerationRequest, Generator, MarkovError, StartSeed};

/// Analyse a text document and generate random sentences from its word chain.
#[derive(Parser)]
#[command(name = "rs-markov", version)]
struct Cli {
    /// Path to a TOML configuration file (default: ./rs-markov.toml if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print letter and word statistics of a document.
    Stats {
        /// Text document to analyse.
        document: PathBuf,

        /// Write the report to this file instead of standard output.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of most frequent words listed.
        #[arg(long)]
        top: Option<usize>,

        /// Number of followers listed per frequent word.
        #[arg(long)]
        followers: Option<usize>,
    },

    /// Generate a sentence by walking the word chain of a document.
    Generate {
        /// Text document to learn from.
        document: PathBuf,

        /// Start word (random vocabulary word if omitted).
        seed: Option<String>,

        /// Maximum number of words generated after the start word.
        max_words: Option<usize>,

        /// Seed of the random generator, for reproducible output.
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

/// Process exit code of each error kind.
fn exit_code(err: &MarkovError) -> u8 {
    match err {
        MarkovError::InputUnavailable { .. } => 1,
        MarkovError::EmptyInput => 2,
        MarkovError::UnknownSeedWord(_) => 3,
        MarkovError::Config(_) => 4,
    }
}

/// Exit code of errors raised outside the library (report output).
const OTHER_ERROR: u8 = 5;

fn error_exit_code(err: &(dyn std::error::Error + 'static)) -> u8 {
    err.downcast_ref::<MarkovError>().map(exit_code).unwrap_or(OTHER_ERROR)
}

/// Warning shown when the walk stopped before the requested length.
fn exhaustion_notice(generation: &Generation) -> Option<String> {
    if !generation.exhausted {
        return None;
    }
    Some(format!(
        "'{}' has no recorded successor, stopped after {} words",
        generation.words.last().map(String::as_str).unwrap_or_default(),
        generation.words.len()
    ))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Stats { document, output, top, followers } => {
            if let Some(top) = top {
                config.analysis.top_words = top;
            }
            if let Some(followers) = followers {
                config.analysis.followers = followers;
            }

            let generator = Generator::from_file(&document)?;
            let report = generator.report(&config.analysis);

            match output {
                Some(path) => {
                    fs::write(&path, report)
                        .map_err(|e| format!("cannot write report to {}: {e}", path.display()))?;
                    info!("Report written to {}", path.display());
                }
                None => print!("{report}"),
            }
        }
        Command::Generate { document, seed, max_words, rng_seed } => {
            let generator = Generator::from_file(&document)?;

            let mut request = GenerationRequest::new(max_words.unwrap_or(config.generation.max_words));
            request.start_seed = StartSeed::from(seed);
            request.set_rng_seed(rng_seed.or(config.generation.rng_seed));

            let generation = generator.predict(&request)?;
            if let Some(notice) = exhaustion_notice(&generation) {
                warn!("{notice}");
            }
            println!("{}", generation.text());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(error_exit_code(&*err))
        }
    }
}
