use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ErrorResponse, FormattedSearchResult, SearchResponse};
use gloo_net::http::Request;
use yew::prelude::*;

pub async fn execute_search(
    query: String,
    search_results: UseStateHandle<Vec<FormattedSearchResult>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!(
        "{}/search/?query={}",
        &*BACKEND_URL,
        urlencoding::encode(&query)
    );

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<SearchResponse>().await {
                    Ok(search_response) => {
                        search_results.set(search_response.results);
                        error_message.set(None);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to parse response: {}", e)));
                    }
                }
            } else {
                let status = response.status();
                match response.text().await {
                    Ok(error_text) => {
                        // Try to parse as structured error response first
                        match serde_json::from_str::<ErrorResponse>(&error_text) {
                            Ok(error_response) => {
                                error_message.set(Some(error_response.message));
                            }
                            Err(_) => {
                                // Fallback to raw error text
                                error_message.set(Some(format!(
                                    "Search failed ({}): {}",
                                    status, error_text
                                )));
                            }
                        }
                    }
                    Err(_) => {
                        error_message.set(Some(format!("Search failed with status: {}", status)));
                    }
                }
            }
        }
        Err(e) => {
            error_message.set(Some(format!("Network error: {}", e)));
        }
    }

    loading.set(false);
}
