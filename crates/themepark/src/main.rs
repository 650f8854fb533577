use std::process::ExitCode;

use clap::Parser;
use console::style;
use themepark::cli::{self, Cli};
use themepark::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1, like every other failure. --help and
            // --version are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli::execute(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style(err).for_stderr().red());
            ExitCode::FAILURE
        }
    }
}
