//! Robots.txt generation.
//!
//! Produces robots.txt content for search engine crawlers.

use tracing::debug;

use siteplan_core::{url, Config, RobotsTxt};

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate robots.txt content, or `None` when the file is disabled.
    ///
    /// A configured string is returned verbatim; an unset option (or an
    /// explicit `true`) yields the standard content referencing the
    /// sitemap URL.
    #[must_use]
    pub fn generate(&self) -> Option<String> {
        match &self.config.robots_txt {
            Some(RobotsTxt::Enabled(false)) => {
                debug!("robots.txt disabled");
                None
            }
            Some(RobotsTxt::Content(content)) => Some(content.clone()),
            Some(RobotsTxt::Enabled(true)) | None => Some(default_robots_txt(&self.config.base)),
        }
    }
}

/// The standard robots.txt content: allow everything and point crawlers at
/// the sitemap.
fn default_robots_txt(base: &str) -> String {
    let sitemap_url = format!("{}sitemap.xml", url::adslash(base));
    [
        "User-agent: *".to_string(),
        "Allow: /".to_string(),
        format!("Sitemap: {sitemap_url}"),
        String::new(),
    ]
    .join("\n")
}
