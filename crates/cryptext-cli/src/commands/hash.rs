use cryptext_core::ConversionRequest;

use super::{read_input, run};
use crate::error::CliResult;

pub fn handle(algorithm: String, text: Option<String>) -> CliResult<()> {
    let text = read_input(text)?;
    run(ConversionRequest::new("hash", text).with_algorithm(algorithm))
}
