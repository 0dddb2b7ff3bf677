// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use email_domains::cli::Args;
use email_domains::{Config, ErrorKind, logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(ErrorKind::Usage.exit_code());
        }
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("warning: {e:#}");
    }

    let result = email_domains::run(&config).and_then(|report| presentation::emit(&report, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.kind().exit_code())
        }
    }
}
