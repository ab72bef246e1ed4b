mod commands;
mod converter;
mod models;
mod output;
mod parsers;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::commands::convert::{ConvertArgs, USAGE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PMD XML report to convert
    input: Option<PathBuf>,

    /// Path of the Sonar issue JSON to write
    output: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<PathBuf>,

    /// Verbose (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.ignored.is_empty() {
        debug!(count = args.ignored.len(), "ignoring extra arguments");
    }

    let (input, output) = match (args.input, args.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::convert::run(ConvertArgs { input, output }) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}
