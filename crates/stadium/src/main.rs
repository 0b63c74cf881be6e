//! `stadium-gen`: converts a stadium definition into a binary cell complex.
//!
//! Usage: `stadium-gen <definition> <output> [--options <options.json>]`
//!
//! Set `RUST_LOG=debug` for per-layer details.

use std::path::PathBuf;
use std::process::ExitCode;

use stadium::{convert, init_logging, GeneratorOptions};

const USAGE: &str = "usage: stadium-gen <definition> <output> [--options <options.json>]";

struct Args {
    definition: PathBuf,
    output: PathBuf,
    options: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut positional = Vec::new();
    let mut options = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" | "-o" => options = Some(PathBuf::from(args.next()?)),
            "--help" | "-h" => return None,
            _ if arg.starts_with('-') => return None,
            _ => positional.push(PathBuf::from(arg)),
        }
    }
    let [definition, output]: [PathBuf; 2] = positional.try_into().ok()?;
    Some(Args {
        definition,
        output,
        options,
    })
}

fn main() -> ExitCode {
    init_logging();

    let Some(args) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let options = match &args.options {
        Some(path) => match GeneratorOptions::from_json_file(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("cannot load options from {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorOptions::default(),
    };

    match convert(&args.definition, &args.output, &options) {
        Ok(summary) => {
            log::info!(
                "wrote {} points and {} cells to {}",
                summary.num_points,
                summary.num_cells,
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
