//! Shell preferences: sidebar visibility and color theme.

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::ui::layout::{ShellState, SIDEBAR_COOKIE, THEME_COOKIE};

#[derive(Debug, Deserialize)]
pub struct BackForm {
    pub back: Option<String>,
}

const LOCAL_ORIGIN: &str = "http://medinventory.local/";

/// Only same-site absolute paths are followed.
fn back_location(form: &BackForm) -> &str {
    match form.back.as_deref() {
        Some(path) if is_local_path(path) => path,
        _ => "/",
    }
}

fn is_local_path(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") {
        return false;
    }
    // browsers read `\` as `/`, so `/\host` is protocol-relative
    if path.chars().any(|c| c == '\\' || c.is_control()) {
        return false;
    }
    let Ok(base) = Url::parse(LOCAL_ORIGIN) else {
        return false;
    };
    base.join(path)
        .map(|url| url.origin() == base.origin())
        .unwrap_or(false)
}

fn redirect_with(cookie: Cookie<'static>, form: &BackForm) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, back_location(form)))
        .cookie(cookie)
        .finish()
}

pub async fn toggle_sidebar(req: HttpRequest, form: web::Form<BackForm>) -> HttpResponse {
    let open = !ShellState::from_request(&req).sidebar_open;
    debug!(open, "Sidebar toggled");
    let value = if open { "open" } else { "closed" };
    let cookie = Cookie::build(SIDEBAR_COOKIE, value).path("/").finish();
    redirect_with(cookie, &form)
}

pub async fn toggle_theme(req: HttpRequest, form: web::Form<BackForm>) -> HttpResponse {
    let theme = ShellState::from_request(&req).theme.toggled();
    debug!(theme = theme.as_str(), "Theme toggled");
    let cookie = Cookie::build(THEME_COOKIE, theme.as_str()).path("/").finish();
    redirect_with(cookie, &form)
}
