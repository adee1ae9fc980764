use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::dto::api::ErrorResponse;
use crate::models::config::ServerConfig;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod hook;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(routes::personal::scope())
            .service(routes::cliente::scope())
            .app_data(json_config())
            .app_data(path_config())
            .app_data(web::Data::new(pool.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Answers unreadable JSON bodies with the same envelope the API uses for
/// every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .json(ErrorResponse::message("Cuerpo de la petición inválido")),
        )
        .into()
    })
}

/// Answers non-numeric path ids with the failure envelope instead of the
/// framework's plaintext reply.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::message("Identificador inválido")),
        )
        .into()
    })
}
