use std::process::ExitCode;

use clap::Parser;
use mmdkeys::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    mmdkeys::registry::register();
    let status = match mmdkeys::cli::run_cli(args) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error
        }
    };
    mmdkeys::registry::unregister();

    status.into()
}
