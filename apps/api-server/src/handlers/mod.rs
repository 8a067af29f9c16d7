//! HTTP handlers and route configuration.

mod blog;
mod health;

use actix_web::web;

use crate::middleware::error::{form_error, query_error};

/// Largest accepted form body; post content travels in it.
const FORM_LIMIT: usize = 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/blog")
                    .app_data(
                        web::FormConfig::default()
                            .limit(FORM_LIMIT)
                            .error_handler(form_error),
                    )
                    .app_data(web::QueryConfig::default().error_handler(query_error))
                    .route(web::get().to(blog::list_posts))
                    .route(web::post().to(blog::create_post))
                    .route(web::put().to(blog::edit_post))
                    .route(web::delete().to(blog::delete_post)),
            ),
    );
}
