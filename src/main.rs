//! Compress a Godot web export and patch it to load the `.gz` assets.
//!
//! Usage: godot-web-gzip [-s DIR] [-d decompress.js] [-f lib/fflate.js] [-i index.html]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use godot_web_gzip::{CompressionBuilder, ProjectConfig};

/// Compress and update Godot web build files
#[derive(Parser, Debug)]
#[command(name = "godot-web-gzip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory with .pck and .wasm files
    #[arg(short, long, default_value = ".")]
    source_dir: PathBuf,

    /// Path to decompress.js [default: decompress.js]
    #[arg(short, long)]
    decompress_js_path: Option<String>,

    /// Path to fflate.js [default: lib/fflate.js]
    #[arg(short, long)]
    fflate_js_path: Option<String>,

    /// Path to index.html [default: index.html]
    #[arg(short, long)]
    index_html_path: Option<String>,

    /// Gzip level, 0-9 [default: 6]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: Option<u32>,

    /// Configuration file (defaults to web_gzip.config.json in the source directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the bundled decompress.js when the loader file is missing
    #[arg(long)]
    install_loader: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::discover(&cli.source_dir),
    };
    if let Some(path) = cli.decompress_js_path {
        config.decompress_js_path = path;
    }
    if let Some(path) = cli.fflate_js_path {
        config.fflate_js_path = path;
    }
    if let Some(path) = cli.index_html_path {
        config.index_html_path = path;
    }
    if let Some(level) = cli.level {
        config.compression_level = level;
    }
    config.validate()?;

    let layout = config.into_layout(cli.source_dir);
    let report = CompressionBuilder::new(layout)
        .with_loader_install(cli.install_loader)
        .run()?;
    Ok(!report.has_failures())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use flate2::Compression;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_match_long_flags() {
        let cli = Cli::parse_from([
            "godot-web-gzip",
            "-s",
            "build/web",
            "-d",
            "js/decompress.js",
            "-f",
            "vendor/fflate.js",
            "-i",
            "main.html",
        ]);
        assert_eq!(cli.source_dir, PathBuf::from("build/web"));
        assert_eq!(cli.decompress_js_path.as_deref(), Some("js/decompress.js"));
        assert_eq!(cli.fflate_js_path.as_deref(), Some("vendor/fflate.js"));
        assert_eq!(cli.index_html_path.as_deref(), Some("main.html"));
    }

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::parse_from(["godot-web-gzip"]);
        assert_eq!(cli.source_dir, PathBuf::from("."));
        assert!(cli.decompress_js_path.is_none());
        assert!(!cli.install_loader);
        assert_eq!(Compression::new(cli.level.unwrap_or(6)), Compression::default());
    }

    #[test]
    fn install_loader_waits_for_preconditions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("game.wasm"), b"wasm").unwrap();
        std::fs::write(dir.path().join("index.html"), "<head></head>").unwrap();
        let source = dir.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from(["godot-web-gzip", "-s", &source, "--install-loader"]);
        let err = run(cli).unwrap_err();

        assert!(err.to_string().contains("fflate.js"));
        assert!(!dir.path().join("decompress.js").exists());
        assert!(!dir.path().join("game.wasm.gz").exists());
    }

    #[test]
    fn rejects_out_of_range_level() {
        assert!(Cli::try_parse_from(["godot-web-gzip", "-l", "10"]).is_err());
    }
}
