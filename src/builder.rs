//! Orchestrates a compression run over an exported web build.

use tracing::{error, info};

use crate::bundle::compress::compress_assets;
use crate::bundle::js_patch::patch_loader_script;
use crate::bundle::loader::install_loader;
use crate::bundle::site::patch_entry_point;
use crate::error::BuildError;
use crate::models::RunReport;
use crate::project::CompressionLayout;
use crate::selection::{AssetInclusion, SuffixSelection, scan_assets};

/// Result type returned by [`CompressionBuilder::run`].
pub type BuildResult<T> = Result<T, BuildError>;

/// High-level helper that validates the export and runs every step in order.
pub struct CompressionBuilder<S = SuffixSelection> {
    layout: CompressionLayout,
    selection: S,
    install_loader: bool,
}

impl CompressionBuilder {
    /// Create a builder selecting `.wasm` and `.pck` assets.
    pub fn new(layout: CompressionLayout) -> Self {
        Self {
            layout,
            selection: SuffixSelection,
            install_loader: false,
        }
    }
}

impl<S: AssetInclusion> CompressionBuilder<S> {
    /// Create a builder with a custom asset selection.
    pub fn with_selection(layout: CompressionLayout, selection: S) -> Self {
        Self {
            layout,
            selection,
            install_loader: false,
        }
    }

    /// Write the bundled loader script when the configured loader path is missing.
    ///
    /// The install happens only after every other precondition holds.
    pub fn with_loader_install(mut self, install: bool) -> Self {
        self.install_loader = install;
        self
    }

    /// Layout this builder operates on.
    pub fn layout(&self) -> &CompressionLayout {
        &self.layout
    }

    /// Check preconditions, compress the assets, then patch the loader and the entry point.
    ///
    /// Every precondition is checked before any file is written. Once the steps start, their
    /// failures are logged and recorded in the report instead of aborting the run.
    pub fn run(&self) -> BuildResult<RunReport> {
        let source_dir = self.layout.source_dir();
        if !source_dir.is_dir() {
            return Err(BuildError::MissingDirectory {
                path: source_dir.to_path_buf(),
            });
        }

        let loader_path = self.layout.loader_path();
        let library_path = self.layout.library_path();
        let index_path = self.layout.index_path();
        let install = self.install_loader && !loader_path.exists();
        for path in [&loader_path, &library_path, &index_path] {
            if install && *path == loader_path {
                continue;
            }
            if !path.is_file() {
                return Err(BuildError::MissingAuxiliaryFile { path: path.clone() });
            }
        }

        let file_names =
            scan_assets(source_dir, &self.selection).map_err(|source| BuildError::Scan {
                path: source_dir.to_path_buf(),
                source,
            })?;
        if file_names.is_empty() {
            return Err(BuildError::NoMatchingAssets {
                path: source_dir.to_path_buf(),
            });
        }
        if install {
            install_loader(&loader_path).map_err(|source| BuildError::InstallLoader {
                path: loader_path.clone(),
                source,
            })?;
        }

        info!(
            "Found {} asset(s) in {}: {}",
            file_names.len(),
            source_dir.display(),
            file_names.join(", ")
        );

        let assets = compress_assets(source_dir, &file_names, self.layout.level);

        let loader = patch_loader_script(&loader_path, &file_names);
        if let Err(err) = &loader {
            error!("{err}");
        }

        let entry_point =
            patch_entry_point(&index_path, &self.layout.loader_ref, &self.layout.library_ref);
        if let Err(err) = &entry_point {
            error!("{err}");
        }

        let report = RunReport {
            assets,
            loader: Some(loader),
            entry_point: Some(entry_point),
        };
        info!(
            "Done: {} compressed, {} skipped, {} failed",
            report.compressed_count(),
            report.skipped_count(),
            report.failed_count()
        );
        Ok(report)
    }
}
