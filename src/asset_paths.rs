//! Path helpers shared by the compressor, the patchers and the orchestrator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name suffixes of the assets that get a gzip sibling.
pub const ASSET_SUFFIXES: [&str; 2] = [".pck", ".wasm"];

/// Suffix appended to an asset file name to form its compressed sibling.
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Resolve `path` against `base_dir` unless it is already absolute.
///
/// Pure path logic; nothing is checked on disk.
pub fn resolve_path(base_dir: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }
    base_dir.as_ref().join(path)
}

/// Path of the compressed sibling for `input`, e.g. `model.wasm` -> `model.wasm.gz`.
pub fn compressed_sibling_path(input: &Path) -> PathBuf {
    let mut raw: OsString = input.as_os_str().to_owned();
    raw.push(COMPRESSED_SUFFIX);
    PathBuf::from(raw)
}

/// Whether a file name carries one of the recognised asset suffixes.
pub fn has_asset_suffix(file_name: &str) -> bool {
    ASSET_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths_onto_base() {
        let resolved = resolve_path("build/web", "lib/fflate.js");
        assert_eq!(resolved, PathBuf::from("build/web").join("lib/fflate.js"));
    }

    #[test]
    fn keeps_absolute_paths_untouched() {
        let absolute = std::env::temp_dir().join("decompress.js");
        assert_eq!(resolve_path("build/web", &absolute), absolute);
    }

    #[test]
    fn appends_gz_to_full_file_name() {
        let sibling = compressed_sibling_path(Path::new("out/model.wasm"));
        assert_eq!(sibling, PathBuf::from("out/model.wasm.gz"));
    }

    #[test]
    fn recognises_only_wasm_and_pck() {
        assert!(has_asset_suffix("index.wasm"));
        assert!(has_asset_suffix("index.pck"));
        assert!(!has_asset_suffix("index.wasm.gz"));
        assert!(!has_asset_suffix("index.js"));
        assert!(!has_asset_suffix("wasm"));
    }
}
