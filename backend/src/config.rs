use crate::services::results_store::ResultsStore;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

lazy_static! {
    pub static ref YTDLP_BIN: String =
        env::var("YTDLP_BIN").unwrap_or_else(|_| "yt-dlp".to_string());
    pub static ref RESULTS_FILE: String =
        env::var("RESULTS_FILE").unwrap_or_else(|_| "searchResults.json".to_string());
    pub static ref DEFAULT_RESULT_COUNT: usize = env::var("DEFAULT_RESULT_COUNT")
        .unwrap_or_else(|_| "5".to_string())
        .parse::<usize>()
        .unwrap_or(5);
    pub static ref RANDOM_APPEND_TERMS: Vec<String> = env::var("RANDOM_APPEND_TERMS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
}

pub const MAX_RESULT_COUNT: usize = 25;

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> AppState {
    AppState {
        store: ResultsStore::new(RESULTS_FILE.as_str()),
    }
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&["http://localhost:8080"]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
