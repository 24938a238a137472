use actix_web::{get, web, HttpResponse, Responder};
use reqwest::Client;
use serde_json::json;

use crate::config::Config;
use crate::types::{watch_url, MediaFormat};
use crate::upstream::resolve_media_url;
use crate::utils::log;

/// Hands the resolved mp4 URL to the client for direct playback. This path
/// never relays bytes itself; the media element fetches the URL on its own.
#[get("/api/stream/{video_id}")]
pub async fn stream_route(
    path: web::Path<String>,
    client: web::Data<Client>,
    config: web::Data<Config>,
) -> impl Responder {
    let video_id = path.into_inner();
    let youtube_url = watch_url(&video_id);

    match resolve_media_url(&client, &config, &video_id, MediaFormat::Mp4).await {
        Ok(stream_url) => {
            log(&format!("✅ Stream URL resolved for {}", video_id));
            HttpResponse::Ok().json(json!({
                "success": true,
                "streamUrl": stream_url,
                "videoId": video_id,
                "youtubeUrl": youtube_url,
            }))
        }
        Err(e) => {
            log(&format!("💥 Stream resolution failed for {}: {}", video_id, e));
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to get stream URL",
            }))
        }
    }
}
