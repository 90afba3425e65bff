//! Asset emission.
//!
//! A narrow sink for registering generated text assets with whatever hosts
//! the build, so formatting logic can be tested without a build-tool
//! runtime.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

/// Destination for generated text assets.
pub trait AssetSink {
    /// Register one named asset with the given content.
    fn emit(&mut self, file_name: &str, content: &str) -> io::Result<()>;
}

/// Sink that writes assets into an output directory.
#[derive(Debug)]
pub struct DirSink {
    output_dir: PathBuf,
}

impl DirSink {
    /// Create a sink writing under `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory assets are written into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl AssetSink for DirSink {
    fn emit(&mut self, file_name: &str, content: &str) -> io::Result<()> {
        let path = self.output_dir.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;

        debug!(path = %path.display(), bytes = content.len(), "emitted asset");
        Ok(())
    }
}

/// Sink that collects assets in memory, in emission order.
///
/// Emitting the same name twice fails with `AlreadyExists`, matching the
/// duplicate-filename collision a host build system reports.
#[derive(Debug, Default)]
pub struct MemorySink {
    assets: Vec<(String, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All emitted assets, in order.
    #[must_use]
    pub fn assets(&self) -> &[(String, String)] {
        &self.assets
    }

    /// Content of the asset with the given name, if emitted.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, content)| content.as_str())
    }
}

impl AssetSink for MemorySink {
    fn emit(&mut self, file_name: &str, content: &str) -> io::Result<()> {
        if self.assets.iter().any(|(name, _)| name == file_name) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("asset already emitted: {file_name}"),
            ));
        }

        self.assets.push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_sink_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut sink = DirSink::new(dir.path());

        sink.emit("sitemap.xml", "<urlset/>").expect("emit");

        let written = fs::read_to_string(dir.path().join("sitemap.xml")).expect("read");
        assert_eq!(written, "<urlset/>");
    }

    #[test]
    fn test_dir_sink_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut sink = DirSink::new(dir.path().join("nested/out"));

        sink.emit("robots.txt", "User-agent: *").expect("emit");

        assert!(dir.path().join("nested/out/robots.txt").exists());
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();

        sink.emit("sitemap.xml", "xml").expect("emit");
        sink.emit("robots.txt", "txt").expect("emit");

        let names: Vec<_> = sink.assets().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["sitemap.xml", "robots.txt"]);
        assert_eq!(sink.get("robots.txt"), Some("txt"));
    }

    #[test]
    fn test_memory_sink_rejects_duplicates() {
        let mut sink = MemorySink::new();

        sink.emit("sitemap.xml", "xml").expect("emit");
        let err = sink.emit("sitemap.xml", "again").expect_err("duplicate");

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
