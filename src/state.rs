//! Shared application state handed to every request handler.

use chrono::Utc;

use crate::config::Config;
use crate::core::data::{inventory_alerts, summarize, Summary};
use crate::db::Database;
use crate::ui::tables::RenderOptions;

pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }

    /// Rendering options as of this moment.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            page_size: self.config.display.page_size,
            date_format: self.config.display.date_format.clone(),
            rules: self.config.display.badge_rules(),
            now: Utc::now(),
        }
    }

    pub fn summary(&self, options: &RenderOptions) -> Summary {
        summarize(
            self.db.inventory(),
            &self.db.orders().snapshot(),
            self.db.hospitals(),
            &options.rules,
            options.now,
        )
    }

    pub fn alerts(&self, options: &RenderOptions) -> Vec<String> {
        inventory_alerts(self.db.inventory(), &options.rules, options.now)
    }
}
