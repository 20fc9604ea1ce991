//! Wordgrid CLI binary.

use std::process;

use clap::Parser;
use wordgrid::cli::{WordGridArgs, commands};

fn main() {
    let args = WordGridArgs::parse();

    if let Err(e) = commands::execute(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
