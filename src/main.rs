use std::process::ExitCode;

use clap::Parser;
use classname_exporter::cli::{self, Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    cli::init_logging(args.verbose);

    match cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
