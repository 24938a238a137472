use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde_json::{json, Value};

use crate::storage::Storage;
use crate::types::PlaylistRecord;

#[get("/api/playlists")]
pub async fn list_playlists_route(storage: web::Data<Storage>) -> impl Responder {
    HttpResponse::Ok().json(storage.list_playlists().await)
}

#[get("/api/playlists/{id}")]
pub async fn get_playlist_route(
    path: web::Path<String>,
    storage: web::Data<Storage>,
) -> impl Responder {
    match storage.get_playlist(&path.into_inner()).await {
        Some(playlist) => HttpResponse::Ok().json(playlist),
        None => HttpResponse::NotFound().json(json!({ "error": "Playlist not found" })),
    }
}

#[post("/api/playlists")]
pub async fn create_playlist_route(
    body: web::Json<PlaylistRecord>,
    storage: web::Data<Storage>,
) -> impl Responder {
    let playlist = storage.insert_playlist(body.into_inner()).await;
    HttpResponse::Created().json(playlist)
}

#[delete("/api/playlists/{id}")]
pub async fn delete_playlist_route(
    path: web::Path<String>,
    storage: web::Data<Storage>,
) -> impl Responder {
    if storage.remove_playlist(&path.into_inner()).await {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "error": "Playlist not found" }))
    }
}

#[post("/api/playlists/{id}/tracks")]
pub async fn add_playlist_track_route(
    path: web::Path<String>,
    body: web::Json<Value>,
    storage: web::Data<Storage>,
) -> impl Responder {
    match storage
        .add_playlist_track(&path.into_inner(), body.into_inner())
        .await
    {
        Some(playlist) => HttpResponse::Ok().json(playlist),
        None => HttpResponse::NotFound().json(json!({ "error": "Playlist not found" })),
    }
}

#[delete("/api/playlists/{id}/tracks/{track_id}")]
pub async fn remove_playlist_track_route(
    path: web::Path<(String, String)>,
    storage: web::Data<Storage>,
) -> impl Responder {
    let (id, track_id) = path.into_inner();
    match storage.remove_playlist_track(&id, &track_id).await {
        Some(playlist) => HttpResponse::Ok().json(playlist),
        None => HttpResponse::NotFound().json(json!({ "error": "Playlist not found" })),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_playlists_route)
        .service(get_playlist_route)
        .service(create_playlist_route)
        .service(delete_playlist_route)
        .service(add_playlist_track_route)
        .service(remove_playlist_track_route);
}
