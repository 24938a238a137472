use std::env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_SEARCH_API: &str = "https://yt-search-psi.vercel.app";
const DEFAULT_AUDIO_API: &str = "https://minato-mp3.vercel.app";
const DEFAULT_VIDEO_API: &str = "https://minato-dl.vercel.app";

/// Upstream endpoints and listen port, overridable through the environment
/// so the gateway and resolver can be pointed at stub servers.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub search_api: String,
    pub audio_api: String,
    pub video_api: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            search_api: env_or("SEARCH_API_URL", DEFAULT_SEARCH_API),
            audio_api: env_or("MP3_API_URL", DEFAULT_AUDIO_API),
            video_api: env_or("MP4_API_URL", DEFAULT_VIDEO_API),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
