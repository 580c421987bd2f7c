//! HTTP surface of the dashboard
//!
//! HTML pages, the JSON API and the shell preference endpoints.

pub mod handlers;
pub mod pages;
pub mod preferences;
pub mod routes;

pub use routes::configure;
