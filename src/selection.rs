//! Discovery of the assets that should be compressed.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::asset_paths::has_asset_suffix;

/// Trait describing which files in the source directory count as compressible assets.
pub trait AssetInclusion {
    /// Returns `true` when the file should receive a compressed sibling.
    fn is_included(&self, file_name: &str) -> bool;
}

/// Default selection: `.wasm` and `.pck` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixSelection;

impl AssetInclusion for SuffixSelection {
    fn is_included(&self, file_name: &str) -> bool {
        has_asset_suffix(file_name)
    }
}

/// List the regular files directly inside `dir` accepted by `selection`.
///
/// The scan is not recursive; symlinks to regular files count as assets. Names are sorted so
/// repeated runs produce the same loader statement regardless of the order the file system
/// hands entries back in.
pub fn scan_assets<S: AssetInclusion>(dir: &Path, selection: &S) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("ignoring non UTF-8 entry {:?}", file_name);
            continue;
        };
        if !selection.is_included(name) {
            continue;
        }
        // Follows symlinks; dangling links fail the check.
        if !entry.path().is_file() {
            debug!("ignoring {} as it is not a regular file", name);
            continue;
        }
        names.push(name.to_string());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn collects_sorted_asset_names() -> io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("game.wasm"), b"wasm")?;
        fs::write(root.join("data.pck"), b"pck")?;
        fs::write(root.join("index.html"), b"<head></head>")?;
        fs::write(root.join("game.wasm.gz"), b"old")?;

        let names = scan_assets(root, &SuffixSelection)?;
        assert_eq!(names, vec!["data.pck".to_string(), "game.wasm".to_string()]);
        Ok(())
    }

    #[test]
    fn does_not_descend_or_pick_up_directories() -> io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("nested"))?;
        fs::write(root.join("nested/inner.wasm"), b"wasm")?;
        fs::create_dir_all(root.join("folder.pck"))?;

        let names = scan_assets(root, &SuffixSelection)?;
        assert!(names.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_assets() -> io::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("store"))?;
        fs::write(root.join("store/real.wasm"), b"wasm")?;
        symlink(root.join("store/real.wasm"), root.join("linked.wasm"))?;
        symlink(root.join("store/gone.pck"), root.join("dangling.pck"))?;

        assert_eq!(scan_assets(root, &SuffixSelection)?, vec!["linked.wasm".to_string()]);
        Ok(())
    }

    #[test]
    fn honours_custom_selection() -> io::Result<()> {
        struct OnlyWasm;
        impl AssetInclusion for OnlyWasm {
            fn is_included(&self, file_name: &str) -> bool {
                file_name.ends_with(".wasm")
            }
        }

        let temp = tempdir()?;
        fs::write(temp.path().join("a.wasm"), b"a")?;
        fs::write(temp.path().join("b.pck"), b"b")?;

        assert_eq!(scan_assets(temp.path(), &OnlyWasm)?, vec!["a.wasm".to_string()]);
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().expect("failed to create temp dir");
        let result = scan_assets(&temp.path().join("missing"), &SuffixSelection);
        assert!(result.is_err());
    }
}
