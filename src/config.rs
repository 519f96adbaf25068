//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command-line flags override whatever is loaded here.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{chart, paths, render};
use crate::error::{Error, Result};
use crate::pipeline::ChartOptions;
use crate::render::RtfOptions;
use crate::theory::Note;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory searched for charts not found at the given path
    pub input_dir: PathBuf,
    /// Directory that receives rendered documents
    pub output_dir: PathBuf,
    /// Maximum line width before truncation
    pub max_width: usize,
    /// Key of input charts; `None` detects it per chart
    pub input_key: Option<Note>,
    /// Font used by the RTF renderer
    pub font_name: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            input_dir: PathBuf::from(paths::DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(paths::DEFAULT_OUTPUT_DIR),
            max_width: chart::DEFAULT_MAX_WIDTH,
            input_key: None,
            font_name: render::MONO_FONT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup("CHART_INPUT_DIR") {
            config.input_dir = expand_dir(&dir);
        }

        if let Some(dir) = lookup("CHART_OUTPUT_DIR") {
            config.output_dir = expand_dir(&dir);
        }

        if let Some(width) = lookup("CHART_MAX_WIDTH") {
            config.max_width = match width.trim().parse::<usize>() {
                Ok(w) if w > 0 => w,
                _ => {
                    return Err(Error::config(
                        format!("CHART_MAX_WIDTH '{width}' is not a valid width"),
                        "Set CHART_MAX_WIDTH to a positive integer such as 80",
                    ))
                }
            };
        }

        if let Some(key) = lookup("CHART_INPUT_KEY").filter(|k| !k.trim().is_empty()) {
            let note = Note::parse_key(&key).map_err(|_| {
                Error::config(
                    format!("CHART_INPUT_KEY '{key}' is not a recognized key"),
                    "Use a note name such as C, F#, Eb, or unset it to auto-detect",
                )
            })?;
            config.input_key = Some(note);
        }

        if let Some(font) = lookup("CHART_FONT").filter(|f| !f.trim().is_empty()) {
            config.font_name = font;
        }

        Ok(config)
    }

    /// Pipeline options seeded from this configuration.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            input_key: self.input_key,
            max_width: self.max_width,
            ..ChartOptions::default()
        }
    }

    /// Renderer options seeded from this configuration.
    pub fn rtf_options(&self) -> RtfOptions {
        RtfOptions {
            font_name: self.font_name.clone(),
            ..RtfOptions::default()
        }
    }
}

/// Expand a leading `~` in a configured directory.
fn expand_dir(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
