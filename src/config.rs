// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_feed_url() -> String {
    "https://freefood.example.edu/data/events.json".to_string()
}

fn default_import_url() -> String {
    "https://freefood.example.edu/data/engage.json".to_string()
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_row_height() -> f32 {
    40.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote feed fetched once at startup.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Feed produced by the external scraper, fetched on demand.
    #[serde(default = "default_import_url")]
    pub import_url: String,

    /// Quiet period after the last search keystroke before re-filtering.
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Height of one hour row in the week view, in layout units.
    #[serde(default = "default_row_height")]
    pub week_row_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            import_url: default_import_url(),
            search_debounce_ms: default_debounce_ms(),
            week_row_height: default_row_height(),
        }
    }
}

impl Config {
    /// Loads the config file; a missing file yields the defaults.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
