//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod users;

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, json_config};
use crate::middleware::identity::IdentityAttachment;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .wrap(IdentityAttachment)
            .service(
                web::resource("/blogs")
                    .default_service(web::to(unknown_endpoint))
                    .route(web::get().to(blogs::list))
                    .route(web::post().to(blogs::create)),
            )
            .service(
                web::resource("/blogs/{id}")
                    .default_service(web::to(unknown_endpoint))
                    .route(web::delete().to(blogs::delete))
                    .route(web::put().to(blogs::update_likes)),
            )
            .service(
                web::resource("/users")
                    .default_service(web::to(unknown_endpoint))
                    .route(web::get().to(users::list))
                    .route(web::post().to(users::register)),
            )
            .service(
                web::resource("/login")
                    .default_service(web::to(unknown_endpoint))
                    .route(web::post().to(login::login)),
            )
            .service(
                web::resource("/health")
                    .default_service(web::to(unknown_endpoint))
                    .route(web::get().to(health::health_check)),
            ),
    );
}

/// Fallback for every unmatched route or method.
pub async fn unknown_endpoint() -> Result<HttpResponse, AppError> {
    Err(AppError::unknown_endpoint())
}
