use cryptext_core::ConversionRequest;

use super::{read_input, run};
use crate::error::CliResult;

pub fn handle(action: String, text: Option<String>) -> CliResult<()> {
    let text = read_input(text)?;
    run(ConversionRequest::new("base64", text).with_action(action))
}
