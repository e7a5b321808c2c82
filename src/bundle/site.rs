//! Injects the compression script includes into the exported `index.html`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use crate::error::PatchError;
use crate::models::PatchOutcome;

/// Comment that opens the tool-managed block in `index.html`.
pub const MARKER_COMMENT: &str = "<!-- Godot Web Compression Scripts -->";

const HEAD_CLOSE: &str = "</head>";

fn marker_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"(?s){}.*?{}",
            regex::escape(MARKER_COMMENT),
            regex::escape(HEAD_CLOSE)
        ))
        .expect("invalid marker block regex")
    })
}

/// Render the marker block that precedes `</head>`.
///
/// References are embedded verbatim; they are web paths relative to the page.
pub fn render_script_block(loader_ref: &str, library_ref: &str) -> String {
    format!(
        "{MARKER_COMMENT}\n    <script src=\"{library_ref}\"></script>\n    <script src=\"{loader_ref}\"></script>\n"
    )
}

/// Replace any previous marker block and insert a fresh one before the first `</head>`.
///
/// The file is always rewritten when a `</head>` tag is present.
pub fn patch_entry_point(
    index_path: &Path,
    loader_ref: &str,
    library_ref: &str,
) -> Result<PatchOutcome, PatchError> {
    let text =
        fs::read_to_string(index_path).map_err(|err| PatchError::from_io(index_path, err))?;

    // Each old block runs from the marker to the nearest closing head tag, which is kept.
    let stripped = marker_block_pattern().replace_all(&text, HEAD_CLOSE);

    let Some(head_close) = stripped.find(HEAD_CLOSE) else {
        return Err(PatchError::HeadTagNotFound {
            path: index_path.to_path_buf(),
        });
    };

    let block = render_script_block(loader_ref, library_ref);
    let mut updated = String::with_capacity(stripped.len() + block.len());
    updated.push_str(&stripped[..head_close]);
    updated.push_str(&block);
    updated.push_str(&stripped[head_close..]);

    fs::write(index_path, &updated).map_err(|err| PatchError::from_io(index_path, err))?;

    info!("Updated {} with {}", index_path.display(), block.trim_end());
    Ok(PatchOutcome::Updated)
}
