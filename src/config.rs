//! Optional JSON configuration stored next to the web export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use flate2::Compression;
use serde::Deserialize;

use crate::project::CompressionLayout;

/// Name of the configuration file looked up in the source directory.
pub const DEFAULT_CONFIG_FILE: &str = "web_gzip.config.json";

/// File references and compression settings for a web export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Loader script reference, relative to the source directory unless absolute.
    pub decompress_js_path: String,
    /// fflate support library reference, relative to the source directory unless absolute.
    pub fflate_js_path: String,
    /// HTML entry point reference, relative to the source directory unless absolute.
    pub index_html_path: String,
    /// Gzip level from 0 (store) to 9 (best).
    pub compression_level: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            decompress_js_path: "decompress.js".into(),
            fflate_js_path: "lib/fflate.js".into(),
            index_html_path: "index.html".into(),
            compression_level: 6,
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the source directory.
    ///
    /// A missing or unparsable file falls back to the defaults.
    pub fn discover(source_dir: &Path) -> Self {
        let candidate = source_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file, if it parses.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read configuration from a file the user asked for explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings flate2 cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            bail!(
                "compression level {} is out of range (0-9)",
                self.compression_level
            );
        }
        Ok(())
    }

    /// Convert the configuration into a layout rooted at `source_dir`.
    pub fn into_layout(self, source_dir: impl Into<PathBuf>) -> CompressionLayout {
        CompressionLayout {
            source_dir: source_dir.into(),
            loader_ref: self.decompress_js_path,
            library_ref: self.fflate_js_path,
            index_ref: self.index_html_path,
            level: Compression::new(self.compression_level.min(9)),
        }
    }
}
