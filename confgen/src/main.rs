mod cli;
mod logging;
mod ops;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("confgen: {err:#}");
        return ExitCode::FAILURE;
    }

    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("confgen: {err:#}");
            ExitCode::FAILURE
        }
    }
}
