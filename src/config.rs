//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a headmark.toml, and if present we load settings from there.
//! This provides file extension preferences, the phrases marking the table of contents and
//! references headings, and the log level.

use crate::outline::OutlineOptions;
use facet::Facet;
use std::fs;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "headmark.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from headmark.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["ipynb".to_string(), "md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "Table of Contents".to_string())]
    /// Title of the heading that opens the table of contents cell.
    pub toc_title: String,
    #[facet(default = "References".to_string())]
    /// Title of the heading left out of numbering and the table of contents.
    pub references_title: String,
    #[facet(default = "warn".to_string())]
    /// Minimum level of log messages shown.
    pub log_level: String,
}

impl Config {
    #[must_use]
    /// Load configuration from headmark.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string(CONFIG_FILE) {
            match Self::parse(&contents) {
                Some(config) => return config,
                None => log::warn!("ignoring unreadable {CONFIG_FILE}"),
            }
        }
        Self::parse("").expect("default configuration parses")
    }

    #[must_use]
    /// Parses configuration text, filling in defaults for anything left out.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// Outline phrases from this configuration.
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions::new(self.toc_title.clone(), self.references_title.clone())
    }
}
