//! Sitemap generation.
//!
//! Renders the configured URL entries into a namespaced XML sitemap.

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use siteplan_core::{url, Config, EntryDefaults, SitemapEntry, UrlEntry};

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Crawl priority applied when neither the entry nor the configuration
/// carries one.
const DEFAULT_PRIORITY: f32 = 0.8;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// The news/xhtml/image/video namespaces are declared but unused; some feed
// readers expect their presence.
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
  xmlns:news="http://www.google.com/schemas/sitemap-news/0.9"
  xmlns:xhtml="http://www.w3.org/1999/xhtml"
  xmlns:image="http://www.google.com/schemas/sitemap-image/1.1"
  xmlns:video="http://www.google.com/schemas/sitemap-video/1.1">"#;

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate the full sitemap XML document.
    ///
    /// Entries appear in configuration order. An empty entry list still
    /// produces a well-formed document with an empty `<urlset>`.
    #[must_use]
    pub fn generate(&self, defaults: &EntryDefaults) -> String {
        debug!(count = self.config.urls.len(), "generating sitemap");

        let entries: Vec<String> = self
            .config
            .urls
            .iter()
            .map(|entry| self.entry_to_xml(entry, defaults))
            .collect();

        format!(
            "{XML_DECLARATION}\n{URLSET_OPEN}\n\n{}\n</urlset>",
            entries.join("\n")
        )
    }

    /// Convert one entry to its `<url>` block.
    ///
    /// Each field resolves through an ordered chain, first non-absent wins:
    /// entry value, then document default, then (for priority only) the
    /// fixed literal. Absent optional elements leave their interior line
    /// blank.
    fn entry_to_xml(&self, entry: &SitemapEntry, defaults: &EntryDefaults) -> String {
        let UrlEntry {
            path,
            lastmod,
            changefreq,
            priority,
        } = entry.clone().into_entry();

        let loc = url::join(&self.config.base, &path);
        let lastmod = lastmod
            .or_else(|| defaults.lastmod.clone())
            .filter(|l| !l.is_empty());
        let changefreq = changefreq.or(defaults.changefreq);
        let priority = priority.unwrap_or(DEFAULT_PRIORITY);

        let lastmod_line = lastmod
            .map(|l| format!("<lastmod>{l}</lastmod>"))
            .unwrap_or_default();
        let changefreq_line = changefreq
            .map(|c| format!("<changefreq>{}</changefreq>", c.as_str()))
            .unwrap_or_default();

        format!(
            "<url>\n  <loc>{}</loc>\n  {lastmod_line}\n  {changefreq_line}\n  <priority>{priority:.1}</priority>\n</url>",
            escape_xml(&loc)
        )
    }

    /// Write the sitemap to a writer.
    pub fn write_to<W: Write>(&self, defaults: &EntryDefaults, writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(defaults).as_bytes())?;
        Ok(())
    }
}

/// Escape the five reserved XML characters in one pass.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use siteplan_core::Changefreq;

    use super::*;

    fn test_defaults() -> EntryDefaults {
        EntryDefaults {
            lastmod: Some("2024-01-01".to_string()),
            changefreq: Some(Changefreq::Daily),
        }
    }

    fn test_generator(base: &str, urls: Vec<SitemapEntry>) -> SitemapGenerator {
        SitemapGenerator::new(Config {
            base: base.to_string(),
            urls,
            ..Config::default()
        })
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("a&b<c>'d\"e"),
            "a&amp;b&lt;c&gt;&apos;d&quot;e"
        );
    }

    #[test]
    fn test_escape_xml_passthrough() {
        assert_eq!(escape_xml("https://example.com/about"), "https://example.com/about");
    }

    #[test]
    fn test_entry_with_defaults() {
        let generator = test_generator("https://x.com", vec![]);

        let xml = generator.entry_to_xml(&SitemapEntry::from("about"), &test_defaults());

        assert_eq!(
            xml,
            "<url>\n  <loc>https://x.com/about</loc>\n  <lastmod>2024-01-01</lastmod>\n  <changefreq>daily</changefreq>\n  <priority>0.8</priority>\n</url>"
        );
    }

    #[test]
    fn test_entry_overrides_win() {
        let generator = test_generator("https://x.com", vec![]);
        let entry = SitemapEntry::Entry(UrlEntry {
            path: "blog".to_string(),
            lastmod: Some("2023-06-15".to_string()),
            changefreq: Some(Changefreq::Weekly),
            priority: Some(1.0),
        });

        let xml = generator.entry_to_xml(&entry, &test_defaults());

        assert!(xml.contains("<lastmod>2023-06-15</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_priority_rendered_with_one_decimal() {
        let generator = test_generator("https://x.com", vec![]);
        let entry = SitemapEntry::Entry(UrlEntry {
            path: "about".to_string(),
            priority: Some(1.0),
            ..UrlEntry::default()
        });

        let xml = generator.entry_to_xml(&entry, &test_defaults());

        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_entry_without_resolvable_optionals() {
        let generator = test_generator("https://x.com", vec![]);

        let xml =
            generator.entry_to_xml(&SitemapEntry::from("about"), &EntryDefaults::default());

        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
        assert_eq!(
            xml,
            "<url>\n  <loc>https://x.com/about</loc>\n  \n  \n  <priority>0.8</priority>\n</url>"
        );
    }

    #[test]
    fn test_empty_lastmod_suppresses_element() {
        let generator = test_generator("https://x.com", vec![]);
        let entry = SitemapEntry::Entry(UrlEntry {
            path: "about".to_string(),
            lastmod: Some(String::new()),
            ..UrlEntry::default()
        });

        let xml = generator.entry_to_xml(&entry, &EntryDefaults::default());

        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_loc_joined_with_single_slash() {
        let generator = test_generator("https://x.com", vec![]);

        let xml = generator.entry_to_xml(&SitemapEntry::from("/about/"), &test_defaults());

        assert!(xml.contains("<loc>https://x.com/about</loc>"));
        assert!(!xml.contains("com//about"));
    }

    #[test]
    fn test_loc_is_escaped() {
        let generator = test_generator("https://x.com", vec![]);

        let xml =
            generator.entry_to_xml(&SitemapEntry::from("search?q=a&b"), &test_defaults());

        assert!(xml.contains("<loc>https://x.com/search?q=a&amp;b</loc>"));
    }

    #[test]
    fn test_generate_empty_urlset() {
        let generator = test_generator("https://x.com", vec![]);

        let xml = generator.generate(&test_defaults());

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(xml.contains(r#"xmlns:video="http://www.google.com/schemas/sitemap-video/1.1""#));
        assert!(xml.ends_with("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_generate_preserves_order() {
        let generator = test_generator(
            "https://x.com",
            vec![SitemapEntry::from("zebra"), SitemapEntry::from("apple")],
        );

        let xml = generator.generate(&test_defaults());

        let zebra = xml.find("zebra").expect("zebra present");
        let apple = xml.find("apple").expect("apple present");
        assert!(zebra < apple);
    }

    #[test]
    fn test_write_to() {
        let generator = test_generator("https://x.com", vec![SitemapEntry::from("about")]);
        let mut buf = Vec::new();

        generator
            .write_to(&test_defaults(), &mut buf)
            .expect("write");

        let xml = String::from_utf8(buf).expect("utf8");
        assert!(xml.contains("<loc>https://x.com/about</loc>"));
    }
}
