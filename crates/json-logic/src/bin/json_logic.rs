//! `json-logic` — apply a JSON logic rule to JSON data.
//!
//! Usage:
//!   json-logic [--data <JSON|@file|->] [--validate] [--pretty] [-v...] <RULE>

use anyhow::Result;
use clap::Parser;
use json_logic::cli::{log_level, run, Args};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();

    let outcome = run(&args, &mut io::stdin().lock())?;
    println!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
