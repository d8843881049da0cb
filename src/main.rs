//! `bookkit` — authoring support tools for the BCC lattice book

use clap::Parser;

use bookkit::cli::args::Cli;
use bookkit::cli::commands;
use bookkit::error::ExitCode;
use bookkit::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
