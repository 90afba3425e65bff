//! Sitemap URL entries.

use serde::{Deserialize, Serialize};

/// Change frequency hint for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Changefreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl Changefreq {
    /// The value as it appears in the generated XML.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A fully specified sitemap URL entry.
///
/// `path` is relative to the configured base URL; every other field falls
/// back to a document-level default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// Path relative to the base URL.
    pub path: String,

    /// Last modification date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,

    /// Change frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<Changefreq>,

    /// Crawl priority (conventionally 0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

/// A sitemap entry as supplied in configuration: either a bare path or a
/// full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SitemapEntry {
    /// A bare path with no per-entry overrides.
    Path(String),

    /// A structured entry.
    Entry(UrlEntry),
}

impl SitemapEntry {
    /// Normalize to the record form.
    ///
    /// A bare path becomes a [`UrlEntry`] with no per-entry overrides, so
    /// downstream formatting only ever handles one shape.
    #[must_use]
    pub fn into_entry(self) -> UrlEntry {
        match self {
            Self::Path(path) => UrlEntry {
                path,
                ..UrlEntry::default()
            },
            Self::Entry(entry) => entry,
        }
    }
}

impl From<&str> for SitemapEntry {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for SitemapEntry {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<UrlEntry> for SitemapEntry {
    fn from(entry: UrlEntry) -> Self {
        Self::Entry(entry)
    }
}
