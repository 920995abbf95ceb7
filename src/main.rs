use std::process::ExitCode;

use clap::Parser;
use glotsync::cli::{Arguments, ExitStatus, print_error, run_cli};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GLOTSYNC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("glotsync={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
