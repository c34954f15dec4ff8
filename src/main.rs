use std::process::ExitCode;

use clap::Parser;
use fx::Cli;

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    match fx::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
