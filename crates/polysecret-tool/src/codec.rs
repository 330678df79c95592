//! Text encoding for shares.
//!
//! A share is written as `XX-hexbytes`: the x-coordinate as two lowercase
//! hex digits, a dash, then one hex byte per secret byte. Example: `04-b4`.

use polysecret_shamir::{ShamirError, Share};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Share must look like XX-hexbytes, got {0:?}")]
    MissingSeparator(String),
    #[error("Invalid x-coordinate {0:?}")]
    BadCoordinate(String),
    #[error("Invalid share bytes: {0}")]
    BadHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Share(#[from] ShamirError),
}

/// Render a share as `XX-hexbytes`
pub fn encode_share(share: &Share) -> String {
    format!("{:02x}-{}", share.x(), hex::encode(share.y()))
}

/// Parse `XX-hexbytes`, accepting surrounding whitespace and upper-case hex
pub fn decode_share(input: &str) -> Result<Share, CodecError> {
    let trimmed = input.trim();
    let (x, y) = trimmed
        .split_once('-')
        .ok_or_else(|| CodecError::MissingSeparator(trimmed.to_string()))?;

    let x = u16::from_str_radix(x, 16).map_err(|_| CodecError::BadCoordinate(x.to_string()))?;
    let y = hex::decode(y)?;
    Ok(Share::try_from((x, y))?)
}
