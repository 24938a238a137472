use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde_json::json;

use crate::storage::Storage;
use crate::types::TrackRecord;

#[get("/api/tracks")]
pub async fn list_tracks_route(storage: web::Data<Storage>) -> impl Responder {
    HttpResponse::Ok().json(storage.list_tracks().await)
}

#[get("/api/tracks/{id}")]
pub async fn get_track_route(
    path: web::Path<String>,
    storage: web::Data<Storage>,
) -> impl Responder {
    match storage.get_track(&path.into_inner()).await {
        Some(track) => HttpResponse::Ok().json(track),
        None => HttpResponse::NotFound().json(json!({ "error": "Track not found" })),
    }
}

#[post("/api/tracks")]
pub async fn create_track_route(
    body: web::Json<TrackRecord>,
    storage: web::Data<Storage>,
) -> impl Responder {
    let track = storage.insert_track(body.into_inner()).await;
    HttpResponse::Created().json(track)
}

#[delete("/api/tracks/{id}")]
pub async fn delete_track_route(
    path: web::Path<String>,
    storage: web::Data<Storage>,
) -> impl Responder {
    if storage.remove_track(&path.into_inner()).await {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "error": "Track not found" }))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tracks_route)
        .service(get_track_route)
        .service(create_track_route)
        .service(delete_track_route);
}
