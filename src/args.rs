use tdf::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug)]
pub struct InputArgs {
    pub input_path: PathBuf,
    pub clients: Vec<String>,
}

/// Parses the input arguments: a valid filepath to a JSON array of transactions,
/// followed by any number of client names to report on
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let filename = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the input file.".to_string())
    })?;

    let input_path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(InputArgs {
        input_path,
        clients: args.collect(),
    });
}
