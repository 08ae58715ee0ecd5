//! CLI entry point for ppp

use std::path::PathBuf;
use std::process;

use clap::Parser;
use ppp::{logging, print_folder};

#[derive(Parser, Debug)]
#[command(name = "ppp")]
#[command(about = "Print a directory as a tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Log scan progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if args.path.exists() && !args.path.is_dir() {
        eprintln!("ppp: '{}' is not a directory", args.path.display());
        process::exit(1);
    }

    if let Err(e) = print_folder(&args.path) {
        eprintln!("ppp: {}", e);
        process::exit(1);
    }
}
