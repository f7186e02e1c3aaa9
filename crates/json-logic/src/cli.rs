//! `json-logic` command-line front end.
//!
//! Holds the logic behind the binary so it can be tested without a process:
//! argument definitions, input loading and the rendered outcome.

use crate::engine::JsonLogic;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use thiserror::Error;
use tracing::Level;

/// Apply a JSON logic rule to JSON data.
#[derive(Debug, Parser)]
#[command(name = "json-logic", version)]
pub struct Args {
    /// Rule JSON: inline text, `@path` to read a file, or `-` for stdin.
    pub rule: String,

    /// Data JSON, in the same forms as the rule. Omit for no data.
    #[arg(short, long)]
    pub data: Option<String>,

    /// Only check that the rule is well formed; prints `true` or `false`.
    #[arg(long)]
    pub validate: bool,

    /// Pretty-print the result.
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("Rule and data cannot both be read from stdin.")]
    StdinTwice,

    #[error(transparent)]
    Logic(#[from] crate::Error),

    #[error("Cannot encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What the binary prints, and whether it exits successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

fn load(arg: &str, stdin: &mut dyn Read) -> Result<String, CliError> {
    if arg == "-" {
        let mut text = String::new();
        stdin.read_to_string(&mut text).map_err(CliError::Stdin)?;
        return Ok(text);
    }
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
        None => Ok(arg.to_string()),
    }
}

/// Runs one invocation. `stdin` backs the `-` input form.
pub fn run(args: &Args, stdin: &mut dyn Read) -> Result<Outcome, CliError> {
    if args.rule == "-" && args.data.as_deref() == Some("-") {
        return Err(CliError::StdinTwice);
    }
    let engine = JsonLogic::default();
    let rule = load(&args.rule, stdin)?;

    if args.validate {
        let valid = engine.is_valid_json(&rule);
        return Ok(Outcome {
            output: valid.to_string(),
            success: valid,
        });
    }

    let data = args
        .data
        .as_deref()
        .map(|data| load(data, stdin))
        .transpose()?;
    let result = engine.apply_json(&rule, data.as_deref())?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(Outcome {
        output,
        success: true,
    })
}

/// Log level for the number of `-v` flags.
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
