pub mod aes;
pub mod base64;
pub mod hash;
pub mod hybrid;

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use colored::Colorize;
use cryptext_core::{convert, ConversionRequest};

use crate::error::{CliError, CliResult};

/// Take the text from `--text`, or read it from stdin when absent
///
/// One trailing line break is dropped from stdin input, so `echo` and
/// here-strings behave as expected.
pub fn read_input(text: Option<String>) -> CliResult<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(strip_line_break(buf))
        }
    }
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Load a PEM file if a path was given
pub fn read_pem(path: Option<String>) -> CliResult<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !Path::new(&path).exists() {
        return Err(CliError::FileNotFound(path));
    }
    Ok(Some(fs::read_to_string(&path)?))
}

/// Run the request and print the result on stdout
pub fn run(request: ConversionRequest) -> CliResult<()> {
    eprintln!(
        "{}",
        format!(
            "{} {}",
            request.mode,
            request.action.as_deref().or(request.algorithm.as_deref()).unwrap_or_default()
        )
        .cyan()
    );
    let result = convert(&request)?;
    println!("{}", result);
    Ok(())
}
