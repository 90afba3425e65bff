//! Siteplan Generator Library
//!
//! Build-time generation of sitemap.xml and robots.txt artifacts.
//!
//! # Modules
//!
//! - [`sitemap`] - XML sitemap assembly
//! - [`robots`] - robots.txt content generation
//! - [`emit`] - asset emission sink abstraction
//! - [`build`] - build orchestration

pub mod build;
pub mod emit;
pub mod robots;
pub mod sitemap;

pub use build::{BuildStats, Builder};
pub use emit::{AssetSink, DirSink, MemorySink};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
