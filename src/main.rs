mod cli;
mod error;
mod prune;
mod utils;

use clap::Parser;

use crate::cli::{Args, run};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
