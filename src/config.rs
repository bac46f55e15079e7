//! # Configuration
//!
//! Where charts are written and how they are shown. The visual theme is not
//! configurable; see [`crate::plotting::styles::THEME`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const OUTPUT_DIR_ENV: &str = "FINTUALISTIC_OUTPUT_DIR";
pub const DISPLAY_ENV: &str = "FINTUALISTIC_DISPLAY";

/// How a finished chart is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Open the chart in the default web browser.
    #[default]
    Browser,
    /// Do not show anything (CI, servers).
    None,
}

impl DisplayMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "browser" => Some(DisplayMode::Browser),
            "none" | "off" => Some(DisplayMode::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory `<imgname>.html` files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub display: DisplayMode,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            display: DisplayMode::default(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `FINTUALISTIC_OUTPUT_DIR` and `FINTUALISTIC_DISPLAY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|dir| !dir.is_empty()) {
            settings.output_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(DISPLAY_ENV) {
            match DisplayMode::parse(&value) {
                Some(mode) => settings.display = mode,
                None => warn!(
                    value = %value,
                    "unknown {DISPLAY_ENV} value, keeping default display"
                ),
            }
        }
        settings
    }
}
