//! Gzip compression of the exported binary assets.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use tracing::{error, info, warn};

use crate::asset_paths::compressed_sibling_path;
use crate::error::AssetError;
use crate::models::{AssetOutcome, AssetReport};

/// Compress every named asset in `source_dir` into a `.gz` sibling.
///
/// Existing siblings are authoritative and never rewritten. Failures are logged and recorded
/// per asset; one bad file does not stop the rest of the batch.
pub fn compress_assets(
    source_dir: &Path,
    file_names: &[String],
    level: Compression,
) -> Vec<AssetReport> {
    file_names
        .iter()
        .map(|file_name| {
            let input = source_dir.join(file_name);
            let outcome = match compress_asset(&input, file_name, level) {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!("{err}");
                    AssetOutcome::Failed(err)
                }
            };
            AssetReport {
                file_name: file_name.clone(),
                outcome,
            }
        })
        .collect()
}

fn compress_asset(
    input: &Path,
    file_name: &str,
    level: Compression,
) -> Result<AssetOutcome, AssetError> {
    let output = compressed_sibling_path(input);
    if output.exists() {
        info!(
            "Skipping {} as {} already exists",
            input.display(),
            output.display()
        );
        return Ok(AssetOutcome::Skipped { output });
    }

    let source = File::open(input).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AssetError::NotFound {
            path: input.to_path_buf(),
        },
        _ => AssetError::Io {
            path: input.to_path_buf(),
            source: err,
        },
    })?;

    let target = match OpenOptions::new().write(true).create_new(true).open(&output) {
        Ok(file) => file,
        Err(err) => return sibling_open_failure(input, output, err),
    };

    if let Err(err) = stream_gzip(source, target, file_name, level) {
        // A truncated sibling would be skipped as authoritative on the next run.
        if let Err(remove_err) = fs::remove_file(&output) {
            warn!(
                "failed to remove partial {}: {}",
                output.display(),
                remove_err
            );
        }
        return Err(AssetError::Io {
            path: input.to_path_buf(),
            source: err,
        });
    }

    info!("Compressed {} to {}", input.display(), output.display());
    Ok(AssetOutcome::Compressed { output })
}

/// Map a failed create-new open of the sibling onto the per-asset outcome.
fn sibling_open_failure(
    input: &Path,
    output: PathBuf,
    err: io::Error,
) -> Result<AssetOutcome, AssetError> {
    match err.kind() {
        ErrorKind::AlreadyExists => {
            info!(
                "Skipping {} as {} already exists",
                input.display(),
                output.display()
            );
            Ok(AssetOutcome::Skipped { output })
        }
        ErrorKind::PermissionDenied => Err(AssetError::PermissionDenied { path: output }),
        _ => Err(AssetError::Io {
            path: input.to_path_buf(),
            source: err,
        }),
    }
}

fn stream_gzip(source: File, target: File, file_name: &str, level: Compression) -> io::Result<()> {
    let mut reader = BufReader::new(source);
    let mut encoder = GzBuilder::new()
        .filename(file_name)
        .write(BufWriter::new(target), level);
    io::copy(&mut reader, &mut encoder)?;
    let writer = encoder.finish()?;
    writer.into_inner().map_err(|err| err.into_error())?;
    Ok(())
}
