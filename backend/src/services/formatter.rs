use crate::models::{FormattedSearchResult, SearchRecord};

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Maps one validated record to its display model.
///
/// Pure function; assumes the record already passed the validator and does
/// not re-check it. title, channel, view count and thumbnail are copied
/// verbatim.
pub fn format_search_result(record: &SearchRecord) -> FormattedSearchResult {
    let chapters = record
        .chapters
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, chapter)| format!("{}. {}", index + 1, chapter.title))
        .collect();

    FormattedSearchResult {
        title: record.title.clone(),
        channel: record.channel.clone(),
        views: record.view_count,
        duration: format_duration(record.duration),
        video_url: video_watch_url(&record.id),
        thumbnail: record.thumbnail.clone(),
        chapters,
    }
}

/// Canonical watch URL for a video id. Ids are assumed URL-safe.
pub fn video_watch_url(id: &str) -> String {
    format!("{WATCH_URL_BASE}{id}")
}

/// Renders a duration in seconds as "H:MM:SS", hours unpadded.
///
/// Absent durations render as zero. Plain integer arithmetic; fractional
/// seconds are truncated.
pub fn format_duration(duration: Option<f64>) -> String {
    let total = duration.unwrap_or(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
