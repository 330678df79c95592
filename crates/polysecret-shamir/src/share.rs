//! A single share of a secret
//!
//! Fields are private so that every `Share` in circulation has a non-zero
//! x-coordinate and at least one y-value. How a share is written to disk or
//! the wire is left to the caller.

use crate::ShamirError;
use serde::{Deserialize, Serialize};

/// An evaluation of every byte polynomial at the same x-coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShare", into = "RawShare")]
pub struct Share {
    x: u8,
    y: Vec<u8>,
}

/// Unchecked serde representation
#[derive(Serialize, Deserialize)]
struct RawShare {
    x: u16,
    y: Vec<u8>,
}

impl Share {
    /// Create a share, rejecting x = 0 and empty y-values.
    pub fn new(x: u8, y: Vec<u8>) -> Result<Self, ShamirError> {
        if x == 0 {
            return Err(ShamirError::InvalidXCoordinate(0));
        }
        if y.is_empty() {
            return Err(ShamirError::EmptyShare);
        }
        Ok(Self { x, y })
    }

    /// Share x-coordinate (1..=255, never 0)
    pub fn x(&self) -> u8 {
        self.x
    }

    /// One y-value per secret byte
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// Number of secret bytes this share covers
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always false for a constructed share
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Split into the x-coordinate and y-values
    pub fn into_parts(self) -> (u8, Vec<u8>) {
        (self.x, self.y)
    }
}

impl TryFrom<(u16, Vec<u8>)> for Share {
    type Error = ShamirError;

    fn try_from((x, y): (u16, Vec<u8>)) -> Result<Self, Self::Error> {
        let x = u8::try_from(x).map_err(|_| ShamirError::InvalidXCoordinate(x))?;
        Share::new(x, y)
    }
}

impl TryFrom<RawShare> for Share {
    type Error = ShamirError;

    fn try_from(raw: RawShare) -> Result<Self, Self::Error> {
        Share::try_from((raw.x, raw.y))
    }
}

impl From<Share> for RawShare {
    fn from(share: Share) -> Self {
        RawShare {
            x: share.x as u16,
            y: share.y,
        }
    }
}
