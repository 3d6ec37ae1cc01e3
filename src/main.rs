use clap::Parser;
use std::process::ExitCode;

use git_sentinel::cli::{Cli, Output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            Output::new(0, quiet).error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
