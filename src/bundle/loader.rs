//! Bundled runtime loader that fetches `.gz` siblings and inflates them in the browser.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

/// Loader script shipped with the crate. Its `files` list starts empty and is filled in by
/// [`crate::bundle::js_patch::patch_loader_script`].
pub const LOADER_TEMPLATE: &str = include_str!("../../runtime/decompress.js");

/// Write the bundled loader to `target` unless a file is already there.
///
/// Returns `true` when the template was written.
pub fn install_loader(target: &Path) -> io::Result<bool> {
    if target.exists() {
        return Ok(false);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, LOADER_TEMPLATE)?;

    info!("Installed bundled loader at {}", target.display());
    Ok(true)
}
