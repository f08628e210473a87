use serde::{Deserialize, Serialize};

/// One display-ready search result as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSearchResult {
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub duration: String,
    pub video_url: String,
    pub thumbnail: String,
    pub chapters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub fetched_at: String,
    pub results: Vec<FormattedSearchResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
