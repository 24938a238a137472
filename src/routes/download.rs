use std::io;
use std::time::{Duration, Instant};

use actix_web::{get, web, HttpResponse};
use futures::TryStreamExt;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::types::MediaFormat;
use crate::upstream::resolve_media_url;
use crate::utils::log_with_table;

// Bounds time-to-first-byte only. The transfer itself must stay unbounded
// or large files would be cut off mid-relay.
const STREAM_START_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
pub struct FormatQuery {
    format: Option<String>,
}

/// Resolves the direct-media URL and hands it back as JSON, leaving the
/// byte transfer to the caller.
#[get("/api/download/{video_id}")]
pub async fn download_route(
    path: web::Path<String>,
    query: web::Query<FormatQuery>,
    client: web::Data<Client>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let video_id = path.into_inner();
    let format: MediaFormat = query.format.as_deref().unwrap_or_default().parse()?;

    let download_url = resolve_media_url(&client, &config, &video_id, format).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "downloadUrl": download_url,
        "format": format.extension(),
        "videoId": video_id,
    })))
}

/// The media relay. Resolves the direct-media URL, opens a streaming fetch
/// against it, and pipes the body through to the client chunk by chunk.
///
/// All failure reporting happens before the first body byte; once headers
/// are flushed the only recourse on an upstream error is dropping the
/// connection. A client disconnect drops the response stream, which closes
/// the upstream connection with it.
#[get("/api/proxy-download/{video_id}")]
pub async fn proxy_download_route(
    path: web::Path<String>,
    query: web::Query<FormatQuery>,
    client: web::Data<Client>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let start_time = Instant::now();
    let video_id = path.into_inner();
    let format: MediaFormat = query.format.as_deref().unwrap_or_default().parse()?;

    let download_url = resolve_media_url(&client, &config, &video_id, format).await?;

    let upstream = tokio::time::timeout(STREAM_START_TIMEOUT, client.get(&download_url).send())
        .await
        .map_err(|_| ApiError::UpstreamStreamError {
            detail: "timed out waiting for the media host".to_string(),
        })?
        .and_then(|r| r.error_for_status())
        .map_err(|e| ApiError::UpstreamStreamError {
            detail: e.to_string(),
        })?;

    let _ = log_with_table(
        "📥 Proxy download started",
        vec![
            ("ID", video_id.clone()),
            ("Format", format.extension().to_string()),
            ("Resolved", format!("{} ms", start_time.elapsed().as_millis())),
        ],
    );

    let filename = format!("{}.{}", video_id, format.extension());
    let body = upstream
        .bytes_stream()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e));

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .streaming(body))
}
