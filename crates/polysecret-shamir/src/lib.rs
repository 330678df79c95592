//! polysecret Shamir Module
//!
//! Split a secret byte string into shares over GF(256) and recover it from
//! any `threshold` of them.
//!
//! Every secret byte gets its own random polynomial of degree
//! `threshold - 1` whose constant term is that byte. A share is the value of
//! every byte polynomial at one non-zero x-coordinate.
//!
//! # Example: split and recover
//!
//! ```
//! use polysecret_shamir::SecretSharer;
//!
//! // Sourcing side: holds the secret and hands out shares
//! let source = SecretSharer::with_secret(2, b"my shared secret").unwrap();
//! let a = source.compute_share(4).unwrap();
//! let b = source.compute_share(6).unwrap();
//! let c = source.compute_share(1).unwrap();
//!
//! // Sink side: knows only the threshold until enough shares arrive
//! let mut sink = SecretSharer::new(2).unwrap();
//! let secret = sink.recover_secretdata(&[a, b]).unwrap();
//! assert_eq!(secret, b"my shared secret");
//!
//! // Once recovered, further shares can be checked for tampering
//! assert!(sink.is_valid_share(&c).unwrap());
//! ```

pub mod gf256;
pub mod polynomial;
pub mod share;
pub mod sharer;

// Re-exports
pub use polynomial::{lagrange_interpolate, multiply_polynomials};
pub use share::Share;
pub use sharer::{split_secret, split_secret_with_rng, SecretSharer};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("Invalid threshold {0}: need at least 1")]
    InvalidThreshold(u8),
    #[error("Threshold exceeds share count")]
    ThresholdExceedsShares,
    #[error("Secret must not be empty")]
    EmptySecret,
    #[error("Share must carry at least one byte")]
    EmptyShare,
    #[error("Invalid x-coordinate {0}: must be in 1..=255")]
    InvalidXCoordinate(u16),
    #[error("Conflicting shares for x-coordinate {0}")]
    DuplicateXCoordinate(u8),
    #[error("Not enough shares to reconstruct: need {needed}, got {got}")]
    InsufficientShares { needed: usize, got: usize },
    #[error("Shares have different lengths: expected {expected}, found {found}")]
    InconsistentShareLength { expected: usize, found: usize },
    #[error("Share at x-coordinate {0} does not match the recovered secret")]
    InconsistentShares(u8),
    #[error("Mismatched interpolation points: {xs} x-values, {ys} y-values")]
    MismatchedPoints { xs: usize, ys: usize },
    #[error("Division by zero in GF(256)")]
    DivisionByZero,
    #[error("No secret polynomials: recover the secret first")]
    NotPopulated,
    #[error("Secret polynomials are already present")]
    AlreadyPopulated,
}

/// Configuration for Shamir split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShamirConfig {
    /// Minimum shares needed to reconstruct (M)
    pub threshold: u8,
    /// Total shares to generate (N)
    pub total_shares: u8,
}

impl ShamirConfig {
    /// Common 2-of-3 setup
    pub fn two_of_three() -> Self {
        Self {
            threshold: 2,
            total_shares: 3,
        }
    }

    /// Common 3-of-5 setup
    pub fn three_of_five() -> Self {
        Self {
            threshold: 3,
            total_shares: 5,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShamirError> {
        if self.threshold < 1 {
            return Err(ShamirError::InvalidThreshold(self.threshold));
        }
        if self.threshold > self.total_shares {
            return Err(ShamirError::ThresholdExceedsShares);
        }
        Ok(())
    }
}
