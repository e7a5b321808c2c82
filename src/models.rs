//! Outcomes recorded while compressing assets and patching artifacts.

use std::path::PathBuf;

use crate::error::{AssetError, PatchError};

/// What happened to a single asset.
#[derive(Debug)]
pub enum AssetOutcome {
    /// A new compressed sibling was written.
    Compressed {
        /// Path of the written sibling.
        output: PathBuf,
    },
    /// The sibling already existed and was left alone.
    Skipped {
        /// Path of the existing sibling.
        output: PathBuf,
    },
    /// Compression failed; the batch carried on.
    Failed(AssetError),
}

/// Per-asset entry of a compression batch.
#[derive(Debug)]
pub struct AssetReport {
    /// Asset file name as discovered in the source directory.
    pub file_name: String,
    /// Result for this asset.
    pub outcome: AssetOutcome,
}

/// Result of a successful patch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The artifact was rewritten.
    Updated,
    /// The artifact already had the desired content; nothing was written.
    Unchanged,
}

/// Everything a completed run did.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Assets that were considered, in processing order.
    pub assets: Vec<AssetReport>,
    /// Loader script patch result, if the step ran.
    pub loader: Option<Result<PatchOutcome, PatchError>>,
    /// Entry point patch result, if the step ran.
    pub entry_point: Option<Result<PatchOutcome, PatchError>>,
}

impl RunReport {
    /// Number of assets that received a fresh sibling.
    pub fn compressed_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|report| matches!(report.outcome, AssetOutcome::Compressed { .. }))
            .count()
    }

    /// Number of assets skipped because the sibling already existed.
    pub fn skipped_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|report| matches!(report.outcome, AssetOutcome::Skipped { .. }))
            .count()
    }

    /// Number of assets whose compression failed.
    pub fn failed_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|report| matches!(report.outcome, AssetOutcome::Failed(_)))
            .count()
    }

    /// True when any asset or artifact step reported a failure.
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
            || matches!(self.loader, Some(Err(_)))
            || matches!(self.entry_point, Some(Err(_)))
    }
}
