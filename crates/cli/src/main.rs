//! WebAssembly instruction index CLI.
//!
//! This binary runs the single generation pass. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overlaid by a JSON file and `--output`.
//! 2. **Generation:** Verifies the catalogue and rewrites the CSV artifact from scratch.
//! 3. **Reporting:** Logs to stderr (filter via `RUST_LOG`) and prints the row counts.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wasm_index::{Config, generate};

#[derive(Parser, Debug)]
#[command(
    name = "wasm-index",
    author,
    version,
    about = "Generate the WebAssembly instruction index CSV",
    long_about = "Normalizes the built-in WebAssembly instruction catalogue into a CSV table with the columns instruction, immediates, opcode, input, output.\n\nThe artifact is fully regenerated on every run.\n\nExamples:\n  wasm-index\n  wasm-index -o docs/index.csv\n  wasm-index --config index.json"
)]
struct Cli {
    /// Output file (default: index.csv, or the path from --config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file, e.g. {"output": {"path": "index.csv", "line_ending": "lf"}}.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_config(cli.config.as_deref());
    if let Some(path) = cli.output {
        config.output.path = path;
    }

    match generate(&config) {
        Ok(summary) => {
            println!(
                "[*] Wrote {} instructions to {} ({} reserved opcodes skipped)",
                summary.rows,
                config.output.path.display(),
                summary.reserved
            );
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Reads the JSON configuration file, or returns the defaults when none is given.
///
/// Exits the process with an error message if the file cannot be read or parsed.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{}': {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    })
}
