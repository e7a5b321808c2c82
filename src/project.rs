//! Description of the exported web build a run operates on.

use std::path::{Path, PathBuf};

use flate2::Compression;

use crate::asset_paths::resolve_path;

/// Source directory plus the auxiliary file references as the user supplied them.
///
/// `loader_ref` and `library_ref` are embedded into `index.html` verbatim, so they stay
/// web-relative; the `*_path` accessors give the resolved on-disk locations.
#[derive(Debug, Clone)]
pub struct CompressionLayout {
    /// Directory holding the exported `.wasm`/`.pck` files.
    pub source_dir: PathBuf,
    /// Reference to the loader script, e.g. `decompress.js`.
    pub loader_ref: String,
    /// Reference to the fflate support library, e.g. `lib/fflate.js`.
    pub library_ref: String,
    /// Reference to the HTML entry point, e.g. `index.html`.
    pub index_ref: String,
    /// Gzip level applied to new siblings.
    pub level: Compression,
}

impl CompressionLayout {
    /// Layout using the default file names of a Godot web export.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            loader_ref: "decompress.js".into(),
            library_ref: "lib/fflate.js".into(),
            index_ref: "index.html".into(),
            level: Compression::default(),
        }
    }

    /// Directory the assets are scanned from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Resolved location of the loader script.
    pub fn loader_path(&self) -> PathBuf {
        resolve_path(&self.source_dir, &self.loader_ref)
    }

    /// Resolved location of the support library.
    pub fn library_path(&self) -> PathBuf {
        resolve_path(&self.source_dir, &self.library_ref)
    }

    /// Resolved location of the HTML entry point.
    pub fn index_path(&self) -> PathBuf {
        resolve_path(&self.source_dir, &self.index_ref)
    }
}
