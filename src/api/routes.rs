use std::path::Path;

use actix_files::Files;
use actix_web::web;

use crate::api::{handlers, pages, preferences};

/// Register every route on an actix-web app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::dashboard))
        .route("/inventory", web::get().to(pages::inventory))
        .route("/orders", web::get().to(pages::orders))
        .route("/orders/{id}/accept", web::post().to(pages::accept_order))
        .route("/orders/{id}/decline", web::post().to(pages::decline_order))
        .route("/predictions", web::get().to(pages::predictions))
        .route("/hospitals", web::get().to(pages::hospitals))
        .route("/preferences/sidebar", web::post().to(preferences::toggle_sidebar))
        .route("/preferences/theme", web::post().to(preferences::toggle_theme))
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api")
                .route("/inventory", web::get().to(handlers::inventory))
                .route("/orders", web::get().to(handlers::orders))
                .route("/predictions", web::get().to(handlers::predictions))
                .route("/hospitals", web::get().to(handlers::hospitals))
                .route("/summary", web::get().to(handlers::summary)),
        );
}

/// Stylesheet and scripts served from `dir` under `/static`.
pub fn static_files(dir: &Path) -> Files {
    Files::new("/static", dir)
}
