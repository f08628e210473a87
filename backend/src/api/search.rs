use crate::config::{DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT, RANDOM_APPEND_TERMS};
use crate::models::{ErrorResponse, SearchResponse};
use crate::services::formatter::format_search_result;
use crate::services::search_service::{augment_query, run_search};
use crate::AppState;
use log::error;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/?<query>&<n>")]
pub async fn search_videos(
    query: String,
    n: Option<usize>,
    state: &State<AppState>,
) -> Result<Json<SearchResponse>, ErrorResponse> {
    let n_results = n.unwrap_or(*DEFAULT_RESULT_COUNT).clamp(1, MAX_RESULT_COUNT);
    let query = augment_query(&query, &RANDOM_APPEND_TERMS, &mut rand::thread_rng());

    match run_search(&query, n_results).await {
        Ok(records) => {
            let results: Vec<_> = records.iter().map(format_search_result).collect();

            // The file is a convenience mirror of the response body; a write
            // failure must not fail the request.
            if let Err(e) = state.store.save(&results) {
                error!("Failed to persist search results: {e:?}");
            }

            Ok(Json(SearchResponse {
                total: results.len(),
                fetched_at: chrono::Utc::now().to_rfc3339(),
                query,
                results,
            }))
        }
        Err(e) => {
            error!("Search for \"{query}\" failed: {e}");
            Err(ErrorResponse {
                error: "search_failed".to_string(),
                message: e.to_string(),
            })
        }
    }
}
