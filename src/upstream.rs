use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::storage::Storage;
use crate::types::{watch_url, MediaFormat, SearchResponse, TrackSummary};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(15);

/// Searches the upstream API for the single best match. An empty (after
/// trimming) query is rejected before any network traffic; a successful
/// upstream response with no track is a success with zero results.
pub async fn search_track(
    client: &Client,
    config: &Config,
    query: &str,
) -> Result<SearchResponse, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Query parameter \"q\" is required".to_string(),
        ));
    }

    let payload: Value = client
        .get(format!("{}/api/ytsearch", config.search_api))
        .query(&[("q", query)])
        .timeout(SEARCH_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| ApiError::UpstreamUnavailable {
            detail: e.to_string(),
        })?
        .json()
        .await
        .map_err(|e| ApiError::UpstreamUnavailable {
            detail: e.to_string(),
        })?;

    if payload["success"].as_bool() != Some(true) || !payload["track"].is_object() {
        return Ok(SearchResponse {
            tracks: Vec::new(),
            total_results: 0,
        });
    }

    Ok(SearchResponse {
        tracks: vec![summarize(&payload["track"])],
        total_results: 1,
    })
}

/// Resolves `(videoId, format)` to a short-lived direct-media URL via the
/// format-appropriate conversion upstream. The URL is session-bound on the
/// provider side and must not be cached beyond the immediate use.
pub async fn resolve_media_url(
    client: &Client,
    config: &Config,
    video_id: &str,
    format: MediaFormat,
) -> Result<String, ApiError> {
    let youtube_url = watch_url(video_id);
    let endpoint = match format {
        MediaFormat::Mp3 => format!("{}/api/ytmp3", config.audio_api),
        MediaFormat::Mp4 => format!("{}/api/alldl", config.video_api),
    };

    let payload: Value = client
        .get(endpoint)
        .query(&[("url", youtube_url.as_str())])
        .timeout(RESOLVE_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| ApiError::ResolutionFailed {
            detail: e.to_string(),
        })?
        .json()
        .await
        .map_err(|e| ApiError::ResolutionFailed {
            detail: e.to_string(),
        })?;

    if payload["success"].as_bool() == Some(true) {
        if let Some(url) = payload["download_url"].as_str().filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }
    }

    Err(ApiError::ResolutionFailed {
        detail: payload["error"]
            .as_str()
            .unwrap_or("upstream returned no download URL")
            .to_string(),
    })
}

fn summarize(track: &Value) -> TrackSummary {
    let video_id = field(track, "videoId")
        .or_else(|| field(track, "id"))
        .unwrap_or_default();
    let id = if video_id.is_empty() {
        Storage::generate_id()
    } else {
        video_id.clone()
    };
    let url = field(track, "url").unwrap_or_else(|| watch_url(&video_id));

    TrackSummary {
        title: field(track, "title").unwrap_or_else(|| "Unknown Title".to_string()),
        artist: field(track, "artist").unwrap_or_else(|| "Unknown Artist".to_string()),
        duration: field(track, "duration").unwrap_or_else(|| "0:00".to_string()),
        thumbnail: field(track, "thumbnail").unwrap_or_default(),
        views: field(track, "views").unwrap_or_else(|| "0".to_string()),
        published_time: field(track, "publishedTime").unwrap_or_default(),
        id,
        video_id,
        url,
    }
}

// Upstream payloads are loosely typed; views in particular shows up both as
// a string and as a bare number.
fn field(track: &Value, key: &str) -> Option<String> {
    match &track[key] {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn summarize_substitutes_defaults() {
        let track = summarize(&json!({ "videoId": "abc123XYZ_" }));
        assert_eq!(track.id, "abc123XYZ_");
        assert_eq!(track.video_id, "abc123XYZ_");
        assert_eq!(track.title, "Unknown Title");
        assert_eq!(track.artist, "Unknown Artist");
        assert_eq!(track.duration, "0:00");
        assert_eq!(track.views, "0");
        assert_eq!(track.thumbnail, "");
        assert_eq!(track.published_time, "");
        assert_eq!(track.url, "https://www.youtube.com/watch?v=abc123XYZ_");
    }

    #[test]
    fn summarize_keeps_upstream_fields() {
        let track = summarize(&json!({
            "id": "xyz",
            "title": "Lofi Mix",
            "artist": "Somebody",
            "duration": "3:21",
            "views": 1234,
            "thumbnail": "https://img.example/t.jpg",
            "publishedTime": "2 years ago",
            "url": "https://youtu.be/xyz",
        }));
        assert_eq!(track.id, "xyz");
        assert_eq!(track.video_id, "xyz");
        assert_eq!(track.title, "Lofi Mix");
        assert_eq!(track.views, "1234");
        assert_eq!(track.url, "https://youtu.be/xyz");
    }

    #[test]
    fn summarize_generates_id_when_absent() {
        let track = summarize(&json!({ "title": "No id at all" }));
        assert_eq!(track.id.len(), 26);
        assert_eq!(track.video_id, "");
    }
}
