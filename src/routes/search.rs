use std::time::Instant;

use actix_web::{get, web, HttpResponse};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiError;
use crate::upstream::search_track;
use crate::utils::log;

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

#[get("/api/search")]
pub async fn search_route(
    query: web::Query<SearchQuery>,
    client: web::Data<Client>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let start_time = Instant::now();
    let q = query.q.as_deref().unwrap_or("");

    let results = search_track(&client, &config, q).await.map_err(|e| {
        if !matches!(e, ApiError::InvalidRequest(_)) {
            log(&format!("💥 Search failed for \"{}\": {}", q.trim(), e));
        }
        e
    })?;

    log(&format!(
        "✅ Search: \"{}\" | Results: {} | Duration: {} ms",
        q.trim(),
        results.total_results,
        start_time.elapsed().as_millis()
    ));

    Ok(HttpResponse::Ok().json(results))
}
