use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use serde_json::Value;
use std::io::Cursor;

/// One chapter marker as emitted by yt-dlp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub start_time: f64,
    pub end_time: f64,
    pub title: String,
}

/// One yt-dlp search hit after schema validation.
///
/// Built exclusively by `services::validator::validate_search_record`; a value
/// of this type has already passed the shape check and can be formatted
/// without re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub channel_id: String,
    pub channel_url: String,
    pub duration: Option<f64>, // seconds
    pub view_count: u64,
    pub average_rating: Option<Value>, // accepted in any shape, unused downstream
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub comment_count: Option<u64>,
    pub chapters: Option<Vec<Chapter>>,
    pub like_count: Option<u64>,
    pub channel: String,
    pub channel_follower_count: Option<u64>,
    pub upload_date: String,
    pub playlist: String,
    pub playlist_id: String,
    pub display_id: String,
    pub fulltitle: String,
    pub language: Option<String>,
}

/// The display model handed to the frontend and written to the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSearchResult {
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub duration: String, // "H:MM:SS"
    pub video_url: String,
    pub thumbnail: String,
    pub chapters: Vec<String>, // "1. <chapter title>"
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub fetched_at: String,
    pub results: Vec<FormattedSearchResult>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).unwrap();
        Response::build()
            .status(Status::BadRequest)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
