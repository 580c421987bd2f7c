//! Server-rendered HTML for the dashboard.
//!
//! Views are leptos components rendered to strings on the server; the page
//! shell in [`layout`] wraps them into a full document.

pub mod components;
pub mod layout;
pub mod pages;
pub mod table;
pub mod tables;

use leptos::IntoView;

/// Render a view to an HTML string.
pub fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
