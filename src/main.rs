//! Karat Checker - jewelry appraisal price calculator
//!
//! A CLI tool that costs material lines, estimates labor, and diagnoses a
//! quoted price as reasonable, suspicious, or overvalued.

use clap::Parser;
use karat_checker::cli::Cli;
use karat_checker::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
