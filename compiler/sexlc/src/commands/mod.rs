//! Command handlers for the Sexl CLI.
//!
//! Shared plumbing (reading sources, option parsing, the error type) lives
//! here in the module root; each command is in its own submodule.

use std::io::Read;

use sexl_eval::Value;
use thiserror::Error;

mod debug;
mod run;

pub use debug::{lex_source, parse_source};
pub use run::eval_source;

/// Failure of a CLI command. Printed as `error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid --arg value '{text}': {source}")]
    InvalidArg {
        text: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Lex(#[from] sexl_lexer::LexError),
    #[error(transparent)]
    Parse(#[from] sexl_parse::ParseError),
    #[error(transparent)]
    Eval(#[from] sexl_eval::Error),
}

/// Read a source file, or standard input when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => CliError::NotFound {
            path: path.to_string(),
        },
        _ => CliError::Io {
            path: path.to_string(),
            source,
        },
    })
}

/// Options shared by `run` and `eval`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// Host arguments, in `--arg` order.
    pub args: Vec<Value>,
    /// Print the result as JSON instead of its debug form.
    pub json: bool,
}

impl RunOptions {
    /// Parse `--arg <json>` / `--arg=<json>` and `--json` flags.
    pub fn parse(flags: &[String]) -> Result<Self, CliError> {
        let mut options = RunOptions::default();
        let mut iter = flags.iter();
        while let Some(flag) = iter.next() {
            if flag == "--json" {
                options.json = true;
            } else if flag == "--arg" {
                let Some(text) = iter.next() else {
                    return Err(CliError::Usage("--arg requires a JSON value".to_string()));
                };
                options.args.push(parse_arg(text)?);
            } else if let Some(text) = flag.strip_prefix("--arg=") {
                options.args.push(parse_arg(text)?);
            } else {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
        }
        Ok(options)
    }
}

fn parse_arg(text: &str) -> Result<Value, CliError> {
    sexl_eval::json::decode(text).map_err(|source| CliError::InvalidArg {
        text: text.to_string(),
        source,
    })
}
