use crate::models::{Chapter, SearchRecord};
use serde_json::{Map, Value};
use thiserror::Error;

/// A raw yt-dlp record did not match the expected shape.
///
/// Carries the offending field (nested chapter fields use paths like
/// `chapters[2].title`) and the expected vs. actual JSON kind.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaValidationError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("missing required field `{0}`")]
    MissingField(String),
    #[error("field `{field}` expected {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Checks one raw search hit against the yt-dlp record schema.
///
/// Pure function of its input; stops at the first mismatch. Optional fields
/// treat an explicit `null` the same as an absent key. A missing required
/// field is always an error, never defaulted.
pub fn validate_search_record(raw: &Value) -> Result<SearchRecord, SchemaValidationError> {
    let map = raw
        .as_object()
        .ok_or_else(|| SchemaValidationError::NotAnObject(json_kind(raw)))?;

    Ok(SearchRecord {
        id: required_string(map, "id")?,
        title: required_string(map, "title")?,
        thumbnail: required_string(map, "thumbnail")?,
        description: required_string(map, "description")?,
        channel_id: required_string(map, "channel_id")?,
        channel_url: required_string(map, "channel_url")?,
        duration: optional_number(map, "duration")?,
        view_count: required_count(map, "view_count")?,
        // average_rating is accepted in any shape and passed through untouched
        average_rating: optional_value(map, "average_rating").cloned(),
        categories: optional_string_array(map, "categories")?,
        tags: optional_string_array(map, "tags")?,
        comment_count: optional_count(map, "comment_count")?,
        chapters: optional_chapters(map)?,
        like_count: optional_count(map, "like_count")?,
        channel: required_string(map, "channel")?,
        channel_follower_count: optional_count(map, "channel_follower_count")?,
        upload_date: required_string(map, "upload_date")?,
        playlist: required_string(map, "playlist")?,
        playlist_id: required_string(map, "playlist_id")?,
        display_id: required_string(map, "display_id")?,
        fulltitle: required_string(map, "fulltitle")?,
        language: optional_string(map, "language")?,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(field: &str, expected: &'static str, value: &Value) -> SchemaValidationError {
    SchemaValidationError::WrongType {
        field: field.to_string(),
        expected,
        actual: json_kind(value),
    }
}

fn required_field<'a>(
    map: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, SchemaValidationError> {
    map.get(field)
        .ok_or_else(|| SchemaValidationError::MissingField(field.to_string()))
}

fn required_string(map: &Map<String, Value>, field: &str) -> Result<String, SchemaValidationError> {
    let value = required_field(map, field)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| wrong_type(field, "string", value))
}

fn required_count(map: &Map<String, Value>, field: &str) -> Result<u64, SchemaValidationError> {
    let value = required_field(map, field)?;
    value
        .as_u64()
        .ok_or_else(|| wrong_type(field, "unsigned integer", value))
}

/// Absent and `null` both count as "not present".
fn optional_value<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    map.get(field).filter(|value| !value.is_null())
}

fn optional_string(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, SchemaValidationError> {
    match optional_value(map, field) {
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| wrong_type(field, "string", value)),
        None => Ok(None),
    }
}

fn optional_number(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<f64>, SchemaValidationError> {
    match optional_value(map, field) {
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "number", value)),
        None => Ok(None),
    }
}

fn optional_count(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<u64>, SchemaValidationError> {
    match optional_value(map, field) {
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "unsigned integer", value)),
        None => Ok(None),
    }
}

fn optional_string_array(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<Vec<String>>, SchemaValidationError> {
    let value = match optional_value(map, field) {
        Some(value) => value,
        None => return Ok(None),
    };
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(field, "array of strings", value))?;

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let text = item
            .as_str()
            .ok_or_else(|| wrong_type(&format!("{field}[{index}]"), "string", item))?;
        out.push(text.to_owned());
    }
    Ok(Some(out))
}

fn optional_chapters(
    map: &Map<String, Value>,
) -> Result<Option<Vec<Chapter>>, SchemaValidationError> {
    let value = match optional_value(map, "chapters") {
        Some(value) => value,
        None => return Ok(None),
    };
    let entries = value
        .as_array()
        .ok_or_else(|| wrong_type("chapters", "array of chapter objects", value))?;

    let mut chapters = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let obj = entry
            .as_object()
            .ok_or_else(|| wrong_type(&format!("chapters[{index}]"), "object", entry))?;
        chapters.push(Chapter {
            start_time: chapter_number(obj, index, "start_time")?,
            end_time: chapter_number(obj, index, "end_time")?,
            title: chapter_string(obj, index, "title")?,
        });
    }
    // start_time <= end_time and chapter ordering are intentionally not
    // checked; upstream emits unordered chapters for some videos.
    Ok(Some(chapters))
}

fn chapter_number(
    obj: &Map<String, Value>,
    index: usize,
    key: &str,
) -> Result<f64, SchemaValidationError> {
    let path = format!("chapters[{index}].{key}");
    let value = obj
        .get(key)
        .ok_or_else(|| SchemaValidationError::MissingField(path.clone()))?;
    value
        .as_f64()
        .ok_or_else(|| wrong_type(&path, "number", value))
}

fn chapter_string(
    obj: &Map<String, Value>,
    index: usize,
    key: &str,
) -> Result<String, SchemaValidationError> {
    let path = format!("chapters[{index}].{key}");
    let value = obj
        .get(key)
        .ok_or_else(|| SchemaValidationError::MissingField(path.clone()))?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| wrong_type(&path, "string", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "id": "dQw4w9WgXcQ",
            "title": "Some Video",
            "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
            "description": "A video about something",
            "channel_id": "UC123",
            "channel_url": "https://www.youtube.com/channel/UC123",
            "duration": 212.0,
            "view_count": 1234567,
            "average_rating": null,
            "categories": ["Music"],
            "tags": ["music", "video"],
            "comment_count": 4321,
            "chapters": [
                { "start_time": 0.0, "end_time": 60.0, "title": "Intro" },
                { "start_time": 60.0, "end_time": 212.0, "title": "Song" }
            ],
            "like_count": 9000,
            "channel": "Some Channel",
            "channel_follower_count": 100000,
            "upload_date": "20091025",
            "playlist": "some query",
            "playlist_id": "some query",
            "display_id": "dQw4w9WgXcQ",
            "fulltitle": "Some Video (Official)",
            "language": "en"
        })
    }

    #[test]
    fn accepts_fully_populated_record() {
        let record = validate_search_record(&full_record()).expect("record should validate");
        assert_eq!(record.id, "dQw4w9WgXcQ");
        assert_eq!(record.view_count, 1234567);
        assert_eq!(record.duration, Some(212.0));
        assert_eq!(record.chapters.as_ref().map(Vec::len), Some(2));
        assert_eq!(record.tags.as_deref(), Some(&["music".to_string(), "video".to_string()][..]));
    }

    #[test]
    fn accepts_record_with_all_optionals_absent() {
        let mut raw = full_record();
        let map = raw.as_object_mut().unwrap();
        for field in [
            "duration",
            "average_rating",
            "categories",
            "tags",
            "comment_count",
            "chapters",
            "like_count",
            "channel_follower_count",
            "language",
        ] {
            map.remove(field);
        }

        let record = validate_search_record(&raw).expect("optionals may be absent");
        assert_eq!(record.duration, None);
        assert_eq!(record.categories, None);
        assert_eq!(record.tags, None);
        assert_eq!(record.comment_count, None);
        assert_eq!(record.chapters, None);
        assert_eq!(record.like_count, None);
        assert_eq!(record.channel_follower_count, None);
        assert_eq!(record.language, None);
    }

    #[test]
    fn treats_explicit_null_like_absent() {
        let mut raw = full_record();
        let map = raw.as_object_mut().unwrap();
        for field in ["duration", "tags", "chapters", "like_count", "language"] {
            map.insert(field.to_string(), Value::Null);
        }

        let record = validate_search_record(&raw).expect("null optionals are fine");
        assert_eq!(record.duration, None);
        assert_eq!(record.tags, None);
        assert_eq!(record.chapters, None);
        assert_eq!(record.like_count, None);
        assert_eq!(record.language, None);
    }

    #[test]
    fn rejects_missing_required_field() {
        for field in ["id", "title", "thumbnail", "view_count", "channel", "fulltitle"] {
            let mut raw = full_record();
            raw.as_object_mut().unwrap().remove(field);

            let err = validate_search_record(&raw).unwrap_err();
            assert_eq!(err, SchemaValidationError::MissingField(field.to_string()));
        }
    }

    #[test]
    fn rejects_required_field_of_wrong_type() {
        let mut raw = full_record();
        raw.as_object_mut()
            .unwrap()
            .insert("view_count".to_string(), json!("a lot"));

        let err = validate_search_record(&raw).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::WrongType {
                field: "view_count".to_string(),
                expected: "unsigned integer",
                actual: "string",
            }
        );
    }

    #[test]
    fn rejects_null_for_required_field() {
        let mut raw = full_record();
        raw.as_object_mut()
            .unwrap()
            .insert("title".to_string(), Value::Null);

        let err = validate_search_record(&raw).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::WrongType {
                field: "title".to_string(),
                expected: "string",
                actual: "null",
            }
        );
    }

    #[test]
    fn rejects_non_object_input() {
        assert_eq!(
            validate_search_record(&json!([1, 2, 3])).unwrap_err(),
            SchemaValidationError::NotAnObject("array")
        );
        assert_eq!(
            validate_search_record(&json!("just a string")).unwrap_err(),
            SchemaValidationError::NotAnObject("string")
        );
    }

    #[test]
    fn rejects_malformed_chapter_with_path() {
        let mut raw = full_record();
        raw.as_object_mut().unwrap().insert(
            "chapters".to_string(),
            json!([
                { "start_time": 0.0, "end_time": 10.0, "title": "Ok" },
                { "start_time": "ten", "end_time": 20.0, "title": "Bad" }
            ]),
        );
        let err = validate_search_record(&raw).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::WrongType {
                field: "chapters[1].start_time".to_string(),
                expected: "number",
                actual: "string",
            }
        );

        let mut raw = full_record();
        raw.as_object_mut().unwrap().insert(
            "chapters".to_string(),
            json!([{ "start_time": 0.0, "end_time": 10.0 }]),
        );
        let err = validate_search_record(&raw).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::MissingField("chapters[0].title".to_string())
        );
    }

    #[test]
    fn rejects_non_string_tag_element() {
        let mut raw = full_record();
        raw.as_object_mut()
            .unwrap()
            .insert("tags".to_string(), json!(["fine", 7]));

        let err = validate_search_record(&raw).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::WrongType {
                field: "tags[1]".to_string(),
                expected: "string",
                actual: "number",
            }
        );
    }

    #[test]
    fn accepts_average_rating_in_any_shape() {
        for rating in [json!(4.8), json!("unrated"), json!({ "stars": 5 })] {
            let mut raw = full_record();
            raw.as_object_mut()
                .unwrap()
                .insert("average_rating".to_string(), rating.clone());

            let record = validate_search_record(&raw).expect("any rating shape is accepted");
            assert_eq!(record.average_rating, Some(rating));
        }
    }

    #[test]
    fn does_not_enforce_chapter_time_ordering() {
        let mut raw = full_record();
        raw.as_object_mut().unwrap().insert(
            "chapters".to_string(),
            json!([{ "start_time": 50.0, "end_time": 10.0, "title": "Backwards" }]),
        );

        let record = validate_search_record(&raw).expect("unordered chapter times are accepted");
        assert_eq!(record.chapters.unwrap()[0].start_time, 50.0);
    }
}
