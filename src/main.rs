//! `recipedoc` - Markdown reference documentation for recipe catalogs

use clap::Parser;

use recipedoc::cli::args::Cli;
use recipedoc::cli::commands;
use recipedoc::error::ExitCode;
use recipedoc::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
