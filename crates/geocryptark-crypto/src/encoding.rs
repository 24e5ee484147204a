//! Standard (padded) base64, the text encoding of every binary field.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::GeoCryptResult;

pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

pub fn from_base64(s: &str) -> GeoCryptResult<Vec<u8>> {
    Ok(STANDARD.decode(s)?)
}
