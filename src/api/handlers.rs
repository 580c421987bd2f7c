//! JSON endpoints over the sample data.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::state::AppState;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[instrument(skip(state))]
pub async fn inventory(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.db.inventory())
}

#[instrument(skip(state))]
pub async fn orders(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.db.orders().snapshot())
}

#[instrument(skip(state))]
pub async fn predictions(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.db.predictions())
}

#[instrument(skip(state))]
pub async fn hospitals(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.db.hospitals())
}

#[instrument(skip(state))]
pub async fn summary(state: web::Data<AppState>) -> HttpResponse {
    let options = state.render_options();
    HttpResponse::Ok().json(state.summary(&options))
}
