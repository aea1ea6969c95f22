use cryptext_core::ConversionRequest;

use super::{read_input, read_pem, run};
use crate::error::CliResult;

pub fn handle(
    action: String,
    public_key: Option<String>,
    private_key: Option<String>,
    text: Option<String>,
) -> CliResult<()> {
    let mut request = ConversionRequest::new("hybrid", read_input(text)?).with_action(action);
    request.public_key = read_pem(public_key)?;
    request.private_key = read_pem(private_key)?;
    run(request)
}
