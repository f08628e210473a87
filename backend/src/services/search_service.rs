use crate::config::YTDLP_BIN;
use crate::models::SearchRecord;
use crate::services::validator::{validate_search_record, SchemaValidationError};
use log::{debug, info};
use rand::Rng;
use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to run `{bin}`: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{bin}` exited with status {code:?}: {stderr}")]
    CommandFailed {
        bin: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("search result {index} is not valid JSON: {source}")]
    MalformedInput {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("search result {index} (video id {video_id}) has an unexpected shape: {source}")]
    InvalidRecord {
        index: usize,
        video_id: String,
        #[source]
        source: SchemaValidationError,
    },
}

/// Runs `yt-dlp "ytsearch{n}:{query}" --dump-json` and validates every
/// emitted record. The whole batch fails on the first bad record.
pub async fn run_search(query: &str, n_results: usize) -> Result<Vec<SearchRecord>, SearchError> {
    let bin = YTDLP_BIN.as_str();
    let target = format!("ytsearch{n_results}:{query}");
    info!("Running {bin} search: {target}");

    let output = Command::new(bin)
        .arg(&target)
        .arg("--dump-json")
        .arg("--no-warnings")
        .output()
        .await
        .map_err(|source| SearchError::Spawn {
            bin: bin.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SearchError::CommandFailed {
            bin: bin.to_string(),
            code: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_search_output(&stdout)
}

/// Parses the line-per-record output of a search command run.
///
/// Each non-empty line must be one JSON object conforming to the record
/// schema. Failures carry the record's position in the batch and, where the
/// line at least parsed, the video id for diagnosis.
pub fn parse_search_output(raw: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let mut records = Vec::new();
    for (index, line) in raw.lines().filter(|line| !line.trim().is_empty()).enumerate() {
        let value: Value = serde_json::from_str(line)
            .map_err(|source| SearchError::MalformedInput { index, source })?;
        let record =
            validate_search_record(&value).map_err(|source| SearchError::InvalidRecord {
                index,
                video_id: value
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("?")
                    .to_string(),
                source,
            })?;
        records.push(record);
    }
    debug!("Parsed {} search records", records.len());
    Ok(records)
}

/// Picks one term from the slice using the given randomness source.
pub fn pick_random_term<'a, R: Rng + ?Sized>(terms: &'a [String], rng: &mut R) -> Option<&'a str> {
    if terms.is_empty() {
        return None;
    }
    terms.get(rng.gen_range(0..terms.len())).map(String::as_str)
}

/// Appends a randomly picked term to the query. An empty term list leaves
/// the query unchanged.
pub fn augment_query<R: Rng + ?Sized>(query: &str, terms: &[String], rng: &mut R) -> String {
    match pick_random_term(terms, rng) {
        Some(term) => format!("{query} {term}"),
        None => query.to_string(),
    }
}
