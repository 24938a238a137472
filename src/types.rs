use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// One normalized search result. Every field is populated; missing upstream
/// fields are substituted with documented defaults by the search gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub thumbnail: String,
    pub video_id: String,
    pub views: String,
    pub published_time: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub tracks: Vec<TrackSummary>,
    pub total_results: usize,
}

/// The two media formats the resolver upstreams can produce. Anything else
/// is rejected before a network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Mp3,
    Mp4,
}

impl MediaFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Mp4 => "video/mp4",
        }
    }
}

impl std::str::FromStr for MediaFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp3" => Ok(Self::Mp3),
            "mp4" => Ok(Self::Mp4),
            _ => Err(ApiError::InvalidRequest(
                "Format must be mp3 or mp4".to_string(),
            )),
        }
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Stored track record. Clients may post arbitrary fields; they are kept
/// as-is alongside the (possibly generated) id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tracks: Vec<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("mp3".parse::<MediaFormat>().unwrap(), MediaFormat::Mp3);
        assert_eq!("mp4".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4);
    }

    #[test]
    fn rejects_unknown_formats() {
        for bad in ["wav", "MP3", "", "flac"] {
            assert!(matches!(
                bad.parse::<MediaFormat>(),
                Err(ApiError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn format_metadata() {
        assert_eq!(MediaFormat::Mp3.extension(), "mp3");
        assert_eq!(MediaFormat::Mp3.content_type(), "audio/mpeg");
        assert_eq!(MediaFormat::Mp4.extension(), "mp4");
        assert_eq!(MediaFormat::Mp4.content_type(), "video/mp4");
    }

    #[test]
    fn builds_watch_url() {
        assert_eq!(
            watch_url("abc123XYZ_"),
            "https://www.youtube.com/watch?v=abc123XYZ_"
        );
    }
}
