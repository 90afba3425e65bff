//! Sitemap configuration management.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    entry::{Changefreq, SitemapEntry},
    error::{CoreError, Result},
};

/// Robots.txt setting: an on/off flag or verbatim file content.
///
/// Leaving the field unset in [`Config`] generates the standard content;
/// `Enabled(false)` suppresses the file entirely; a string is emitted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RobotsTxt {
    /// Generate the standard content (`true`) or produce no file (`false`).
    Enabled(bool),

    /// Verbatim file content.
    Content(String),
}

/// Configuration for one sitemap build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute site root that entry paths are resolved against.
    #[serde(default = "default_base")]
    pub base: String,

    /// URL entries, in output order.
    #[serde(default)]
    pub urls: Vec<SitemapEntry>,

    /// Output file name for the sitemap.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Robots.txt behavior. Unset generates the standard content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_txt: Option<RobotsTxt>,

    /// Document-level last modification date. Unset resolves to the
    /// build-time UTC timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,

    /// Document-level change frequency. Unset resolves to `daily`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<Changefreq>,
}

/// Resolved document-level defaults applied to entries that omit a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDefaults {
    /// Last modification date.
    pub lastmod: Option<String>,

    /// Change frequency.
    pub changefreq: Option<Changefreq>,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_file_name() -> String {
    "sitemap.xml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: default_base(),
            urls: Vec::new(),
            file_name: default_file_name(),
            robots_txt: None,
            lastmod: None,
            changefreq: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        tracing::debug!(path = %path.display(), urls = config.urls.len(), "loaded config");
        Ok(config)
    }

    /// Resolve the document-level entry defaults.
    ///
    /// An unset `lastmod` becomes the current UTC timestamp (RFC 3339 with
    /// millisecond precision); an unset `changefreq` becomes `daily`.
    #[must_use]
    pub fn entry_defaults(&self) -> EntryDefaults {
        EntryDefaults {
            lastmod: Some(self.lastmod.clone().unwrap_or_else(|| {
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            })),
            changefreq: Some(self.changefreq.unwrap_or(Changefreq::Daily)),
        }
    }
}
