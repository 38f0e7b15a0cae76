use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use rgba_icon::{DEFAULT_ICON_PATH, FormatNormalizer, logger};

#[derive(Parser)]
#[command(name = "rgba-icon")]
#[command(about = "Convert an image file to RGBA in place, keeping its container format")]
struct Cli {
    /// Path to the image file to rewrite
    #[arg(value_name = "IMAGE", default_value = DEFAULT_ICON_PATH)]
    image_path: PathBuf,

    /// Keep a copy of the original file at <IMAGE>.bak
    #[arg(long)]
    backup: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    logger::init_logger(if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });

    let normalizer = FormatNormalizer::new(&args.image_path).with_backup(args.backup);

    match normalizer.run() {
        Ok(report) => {
            println!("✓ {}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_missing_dependency() => {
            eprintln!("Error: missing image codec: {}", e);
            eprintln!("Rebuild with the matching `image` crate feature enabled.");
            ExitCode::FAILURE
        }
        Err(e) => {
            let err = anyhow::Error::new(e);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
