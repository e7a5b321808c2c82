//! Error types for the compression run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conditions that stop a run before any asset is touched.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source directory does not exist or is not a directory.
    #[error("directory {path} not found")]
    MissingDirectory {
        /// Directory that was requested.
        path: PathBuf,
    },

    /// One of the loader, support library or entry point files is missing.
    #[error("file {path} not found")]
    MissingAuxiliaryFile {
        /// Resolved path that was checked.
        path: PathBuf,
    },

    /// No `.pck` or `.wasm` files were found in the source directory.
    #[error("no .pck or .wasm files found in {path}")]
    NoMatchingAssets {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// Writing the bundled loader script failed.
    #[error("failed to install loader at {path}: {source}")]
    InstallLoader {
        /// Loader script path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Listing the source directory failed.
    #[error("failed to scan {path}: {source}")]
    Scan {
        /// Directory that was scanned.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Failure compressing a single asset. Never aborts the batch.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset disappeared before it could be read.
    #[error("input file {path} not found")]
    NotFound {
        /// Asset path.
        path: PathBuf,
    },

    /// The compressed sibling could not be created.
    #[error("no permission to write {path}")]
    PermissionDenied {
        /// Compressed sibling path.
        path: PathBuf,
    },

    /// Any other I/O failure while compressing.
    #[error("error compressing {path}: {source}")]
    Io {
        /// Asset path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Failure patching the loader script or the entry point.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The artifact does not exist.
    #[error("file {path} not found")]
    NotFound {
        /// Artifact path.
        path: PathBuf,
    },

    /// The artifact could not be read or written.
    #[error("no permission to access {path}")]
    PermissionDenied {
        /// Artifact path.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("error updating {path}: {source}")]
    Io {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The loader script has no `const files = [...];` statement.
    #[error("no `const files = [...];` statement in {path}")]
    StatementNotFound {
        /// Loader script path.
        path: PathBuf,
    },

    /// The entry point has no `</head>` tag to insert before.
    #[error("no </head> tag in {path}")]
    HeadTagNotFound {
        /// Entry point path.
        path: PathBuf,
    },
}

impl PatchError {
    /// Classify an I/O error raised while reading or writing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}
