use crate::error::{Error, Result};
use crate::partitioning::codebook::Codebook;

/// Concatenate the code of every character of the text, in order.
/// Fails on the first character the codebook does not cover.
pub fn encode(text: &str, codes: &Codebook) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        let code = codes.get(&c).ok_or(Error::MissingCode(c))?;
        bits.push_str(code);
    }
    Ok(bits)
}
