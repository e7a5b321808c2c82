//! Rewrites the `files` list in the runtime loader script.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use tracing::info;

use crate::error::PatchError;
use crate::models::PatchOutcome;

fn files_statement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"const files = \[[^\]]*\];").expect("invalid files statement regex")
    })
}

/// Render the `const files = [...];` statement for the given asset names, in order.
pub fn render_files_statement(file_names: &[String]) -> String {
    let literal = file_names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("const files = [{literal}];")
}

/// Point the loader script at the compressed assets.
///
/// Only the first `const files = [...];` statement is replaced; every other byte of the
/// script is preserved. Nothing is written when the statement already lists `file_names`.
pub fn patch_loader_script(
    loader_path: &Path,
    file_names: &[String],
) -> Result<PatchOutcome, PatchError> {
    let text =
        fs::read_to_string(loader_path).map_err(|err| PatchError::from_io(loader_path, err))?;

    let statement = render_files_statement(file_names);
    if text.contains(&statement) {
        info!("No changes needed in {}", loader_path.display());
        return Ok(PatchOutcome::Unchanged);
    }

    let pattern = files_statement_pattern();
    if !pattern.is_match(&text) {
        return Err(PatchError::StatementNotFound {
            path: loader_path.to_path_buf(),
        });
    }

    let updated = pattern.replace(&text, NoExpand(&statement));
    fs::write(loader_path, updated.as_bytes())
        .map_err(|err| PatchError::from_io(loader_path, err))?;

    info!("Updated {}: {}", loader_path.display(), statement);
    Ok(PatchOutcome::Updated)
}
