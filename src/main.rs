//! voice-gender - classify recordings as male or female voices.
//!
//! With a file argument, prints the predicted label (`M` or `K`). Without one, scores
//! every labelled `.wav` file in the current directory and prints the accuracy.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use voice_gender::batch::{classify_file, scan_directory_with, ScanOutcome};
use voice_gender::classifier::hps::HpsClassifier;

/// Classify the perceived gender of voice recordings.
#[derive(Parser, Debug)]
#[command(name = "voice-gender")]
#[command(about = "Classify the perceived gender of voice recordings")]
struct Args {
    /// Recording to classify. Without it, every labelled .wav file in --dir is scored.
    file: Option<PathBuf>,

    /// Directory to scan when no file is given
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Log classifier details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut classifier = HpsClassifier::<f64>::new();

    match args.file {
        Some(path) => {
            if !path.is_file() {
                eprintln!("File not found: {}", path.display());
                return Ok(ExitCode::FAILURE);
            }
            let label = classify_file(&path, &mut classifier)
                .with_context(|| format!("Failed to classify {}", path.display()))?;
            println!("{}", label);
        }
        None => match scan_directory_with(&args.dir, &mut classifier, |entry| {
            println!("{}", entry)
        })? {
            ScanOutcome::NoWavFiles => println!("No .wav files to analyze."),
            ScanOutcome::Scored(report) => {
                if report.total > 0 {
                    println!();
                }
                println!("{}", report.summary_line());
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
