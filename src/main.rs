use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{self, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use reqwest::Client;

use tunebridge_backend::config::Config;
use tunebridge_backend::routes;
use tunebridge_backend::storage::Storage;
use tunebridge_backend::utils::{clear_log, log};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    clear_log();

    let config = Config::from_env();
    let port = config.port;

    let storage = web::Data::new(Storage::new());
    let config = web::Data::new(config);
    let client = Client::new();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600);

        App::new()
            .app_data(storage.clone())
            .app_data(config.clone())
            .app_data(web::Data::new(client.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Compress::default())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", port))?;

    log(&format!("✅ Server running on port {}", port));

    server.run().await
}
