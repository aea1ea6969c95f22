use cryptext_core::ConversionRequest;

use super::{read_input, run};
use crate::error::CliResult;

pub fn handle(action: String, key: String, text: Option<String>) -> CliResult<()> {
    let text = read_input(text)?;
    run(ConversionRequest::new("aes", text)
        .with_action(action)
        .with_passphrase(key))
}
