use std::path::{Path, PathBuf};
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

use rs_markov_core::config::{AnalysisConfig, Config};
use rs_markov_core::io::{list_documents, normalize_folder};
use rs_markov_core::{GenerationRequest, Generator, MarkovError, StartSeed};

/// Extension of the documents served from the data folder.
const DOCUMENT_EXTENSION: &str = "txt";

/// HTTP service generating sentences from a text document.
#[derive(Parser)]
#[command(name = "rs-markov-server", version)]
struct Args {
	/// Path to configuration file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Document (name in the data folder, without extension) loaded at startup.
	#[arg(short, long)]
	document: Option<String>,
}

/// Query parameters of the `/v1/generate` endpoint.
#[derive(Deserialize)]
struct GenerateParams {
	seed: Option<String>,
	max_words: Option<usize>,
	rng_seed: Option<u64>,
}

/// Query parameters of the `/v1/stats` and `/v1/report` endpoints.
#[derive(Deserialize)]
struct StatsParams {
	top: Option<usize>,
	followers: Option<usize>,
}

impl StatsParams {
	fn options(&self, defaults: &AnalysisConfig) -> AnalysisConfig {
		AnalysisConfig {
			top_words: self.top.unwrap_or(defaults.top_words),
			followers: self.followers.unwrap_or(defaults.followers),
		}
	}
}

#[derive(Deserialize)]
struct DocumentQuery {
	name: Option<String>,
}

struct SharedData {
	config: Config,
	generator: RwLock<Option<Generator>>,
}

impl SharedData {
	fn data_dir(&self) -> PathBuf {
		normalize_folder(&self.config.server.data_dir)
	}
}

/// Maps a library error to an HTTP response.
fn error_response(err: &MarkovError) -> HttpResponse {
	match err {
		MarkovError::UnknownSeedWord(_) => HttpResponse::NotFound().body(err.to_string()),
		MarkovError::InputUnavailable { .. } => HttpResponse::NotFound().body(err.to_string()),
		MarkovError::EmptyInput => HttpResponse::UnprocessableEntity().body(err.to_string()),
		MarkovError::Config(_) => HttpResponse::InternalServerError().body(err.to_string()),
	}
}

fn no_document() -> HttpResponse {
	HttpResponse::Conflict().body("No document loaded")
}

/// Document names are plain file stems, never paths.
fn is_valid_name(name: &str) -> bool {
	!name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a sentence from the loaded document. Returns the sentence as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let max_words = query.max_words.unwrap_or(data.config.generation.max_words);
	let limit = data.config.server.max_words_limit;
	if max_words > limit {
		return HttpResponse::BadRequest().body(format!("max_words must not exceed {limit}"));
	}

	let mut request = GenerationRequest::new(max_words);
	request.start_seed = StartSeed::from(query.seed.clone());
	request.set_rng_seed(query.rng_seed.or(data.config.generation.rng_seed));

	let generator = match data.generator.read() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Document lock failed"),
	};
	let Some(generator) = generator.as_ref() else {
		return no_document();
	};

	match generator.predict(&request) {
		Ok(generation) => HttpResponse::Ok().body(generation.text()),
		Err(e) => error_response(&e),
	}
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<SharedData>, query: web::Query<StatsParams>) -> impl Responder {
	let generator = match data.generator.read() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Document lock failed"),
	};
	match generator.as_ref() {
		Some(generator) => HttpResponse::Ok().json(generator.stats(&query.options(&data.config.analysis))),
		None => no_document(),
	}
}

#[get("/v1/report")]
async fn get_report(data: web::Data<SharedData>, query: web::Query<StatsParams>) -> impl Responder {
	let generator = match data.generator.read() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Document lock failed"),
	};
	match generator.as_ref() {
		Some(generator) => HttpResponse::Ok().body(generator.report(&query.options(&data.config.analysis))),
		None => no_document(),
	}
}

#[get("/v1/documents")]
async fn get_documents(data: web::Data<SharedData>) -> impl Responder {
	match list_documents(data.data_dir(), DOCUMENT_EXTENSION) {
		Ok(documents) => HttpResponse::Ok().body(documents.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list documents"),
	}
}

#[get("/v1/loaded_document")]
async fn get_loaded_document(data: web::Data<SharedData>) -> impl Responder {
	let generator = match data.generator.read() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Document lock failed"),
	};
	match generator.as_ref() {
		Some(generator) => HttpResponse::Ok().body(generator.name().to_owned()),
		None => no_document(),
	}
}

/// Loads `<data_dir>/<name>.txt`.
fn load_document(data_dir: &Path, name: &str) -> Result<Generator, MarkovError> {
	let path = data_dir.join(format!("{name}.{DOCUMENT_EXTENSION}"));
	Generator::from_file(path)
}

#[put("/v1/load_document")]
async fn put_document(data: web::Data<SharedData>, query: web::Query<DocumentQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if is_valid_name(s.trim()) => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or invalid document name"),
	};

	// Built outside the lock, readers keep the previous document meanwhile
	let generator = match load_document(&data.data_dir(), name) {
		Ok(g) => g,
		Err(e) => {
			warn!("Failed to load document '{}': {}", name, e);
			return error_response(&e);
		}
	};

	match data.generator.write() {
		Ok(mut current) => {
			*current = Some(generator);
			info!("Document '{}' loaded", name);
			HttpResponse::Ok().body("Document loaded successfully")
		}
		Err(_) => HttpResponse::InternalServerError().body("Document lock failed"),
	}
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_stats)
		.service(get_report)
		.service(get_documents)
		.service(get_loaded_document)
		.service(put_document);
}

/// Main entry point for the server.
///
/// Loads the configuration (and optionally a first document), then starts
/// an Actix-web HTTP server on the configured address.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let config = Config::load(args.config.as_deref())?;

	let generator = match &args.document {
		Some(name) => Some(load_document(&normalize_folder(&config.server.data_dir), name)?),
		None => None,
	};

	let address = config.server.address.clone();
	let shared_data = web::Data::new(SharedData {
		config,
		generator: RwLock::new(generator),
	});

	info!("rs-markov-server listening on {}", address);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind(address.as_str())?
		.run()
		.await?;

	Ok(())
}
