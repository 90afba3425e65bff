//! Build orchestration.
//!
//! Coordinates one build pass: resolve configured defaults, assemble the
//! sitemap, and hand the resulting assets to the emission sink.

use std::time::Instant;

use thiserror::Error;
use tracing::info;

use siteplan_core::Config;

use crate::{emit::AssetSink, robots::RobotsGenerator, sitemap::SitemapGenerator};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Asset emission failure reported by the sink.
    #[error("emit error: {0}")]
    Emit(#[from] std::io::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of assets emitted.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Builder that orchestrates one sitemap build pass.
#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute one build pass against the given sink.
    ///
    /// Emits the sitemap under the configured file name, then robots.txt
    /// unless disabled. Sink failures propagate unchanged; nothing is
    /// retried.
    pub fn build<S: AssetSink>(&self, sink: &mut S) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            base = %self.config.base,
            urls = self.config.urls.len(),
            "starting sitemap build"
        );

        // 1. Resolve document-level defaults
        let defaults = self.config.entry_defaults();

        // 2. Assemble and emit the sitemap
        let xml = SitemapGenerator::new(self.config.clone()).generate(&defaults);
        sink.emit(&self.config.file_name, xml.trim())?;
        stats.assets += 1;

        // 3. Emit robots.txt when enabled
        if let Some(robots) = RobotsGenerator::new(self.config.clone()).generate() {
            sink.emit("robots.txt", &robots)?;
            stats.assets += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }
}
