use cryptext_core::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type CliResult<T> = Result<T, CliError>;
