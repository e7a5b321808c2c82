#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod error;
pub mod models;
pub mod project;
pub mod selection;

pub use builder::{BuildResult, CompressionBuilder};
pub use config::ProjectConfig;
pub use error::{AssetError, BuildError, PatchError};
pub use models::{AssetOutcome, AssetReport, PatchOutcome, RunReport};
pub use project::CompressionLayout;
pub use selection::{AssetInclusion, SuffixSelection};
