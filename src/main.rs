use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dbtree::error::ImportError;

#[derive(Parser)]
#[command(name = "dbtree", about = "Print a delimited database inventory as a nested report")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let (lines, read_failure) = match cli.file {
        Some(path) => {
            let file = File::open(&path).unwrap_or_else(|source| {
                eprintln!("ERROR: {}", ImportError::SourceUnavailable { path, source });
                std::process::exit(1);
            });
            dbtree::source::read_lines(BufReader::new(file))
        }
        None => dbtree::source::read_lines(std::io::stdin().lock()),
    };

    let import = dbtree::import(lines.iter().map(String::as_str));
    for diagnostic in read_failure.iter().chain(&import.skipped) {
        warn!("{diagnostic}");
    }

    for line in import.report_lines() {
        println!("{line}");
    }
}
