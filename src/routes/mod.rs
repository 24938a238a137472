use actix_web::web;

pub mod download;
pub mod index;
pub mod playlists;
pub mod search;
pub mod stream;
pub mod tracks;

/// Registers the full HTTP surface. Shared between `main` and the
/// integration tests.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index_route)
        .service(index::health_route)
        .service(search::search_route)
        .service(download::download_route)
        .service(download::proxy_download_route)
        .service(stream::stream_route)
        .configure(tracks::config)
        .configure(playlists::config);
}
