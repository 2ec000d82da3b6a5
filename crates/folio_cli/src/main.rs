//! `folio` command-line entry point.

use clap::Parser;
use folio_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
