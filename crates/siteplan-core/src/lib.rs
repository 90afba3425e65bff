//! Siteplan Core Library
//!
//! Core types, configuration, and error handling for the Siteplan sitemap
//! generation engine.

pub mod config;
pub mod entry;
pub mod error;
pub mod url;

pub use config::{Config, EntryDefaults, RobotsTxt};
pub use entry::{Changefreq, SitemapEntry, UrlEntry};
pub use error::{CoreError, Result};
