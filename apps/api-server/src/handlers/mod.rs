//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::ValidateId;
use crate::middleware::error::AppError;

/// JSON extractor settings: unparseable bodies become RFC 7807 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::write))
                    .route("", web::get().to(posts::list))
                    .service(
                        web::scope("/{id}")
                            .wrap(ValidateId)
                            .route("", web::get().to(posts::read))
                            .route("", web::patch().to(posts::update))
                            .route("", web::put().to(posts::update))
                            .route("", web::delete().to(posts::remove)),
                    ),
            ),
    );
}
