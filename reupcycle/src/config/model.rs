use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::widgets::upcycle::DEFAULT_SUGGESTION_DELAY;

/// User configuration read from `config.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    suggestion_delay_ms: u64,
    captures_dir: Option<PathBuf>,
    image_processor: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suggestion_delay_ms: DEFAULT_SUGGESTION_DELAY.as_millis() as u64,
            captures_dir: None,
            image_processor: None,
        }
    }
}

impl AppConfig {
    /// Delay before a canned suggestion is delivered.
    pub(crate) fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    /// Directory captured images are written to.
    pub(crate) fn captures_dir(&self) -> PathBuf {
        match &self.captures_dir {
            Some(dir) => dir.clone(),
            None => default_captures_dir(),
        }
    }

    /// Processor command line, if one is configured and non-blank.
    pub(crate) fn image_processor(&self) -> Option<&str> {
        self.image_processor
            .as_deref()
            .map(str::trim)
            .filter(|command| !command.is_empty())
    }
}

fn default_captures_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join("Documents");
    }

    std::env::temp_dir().join("reupcycle")
}
