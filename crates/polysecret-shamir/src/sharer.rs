//! Core Shamir's Secret Sharing implementation
//!
//! A [`SecretSharer`] is either a source, created with the secret and able
//! to hand out shares, or a sink, created with only the threshold and
//! populated later by [`SecretSharer::recover_secretdata`]. Once populated
//! both behave the same: they compute shares and validate shares.

use std::fmt;

use crate::polynomial::{evaluate, lagrange_interpolate};
use crate::{ShamirConfig, ShamirError, Share};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Per-byte polynomials, present once the secret is known
enum SecretState {
    Unpopulated,
    /// One polynomial per secret byte, constant term first
    Populated(Vec<Vec<u8>>),
}

impl Drop for SecretState {
    fn drop(&mut self) {
        if let SecretState::Populated(polynomials) = self {
            polynomials.zeroize();
        }
    }
}

/// Threshold secret sharer over GF(256)
pub struct SecretSharer {
    threshold: u8,
    state: SecretState,
}

impl fmt::Debug for SecretSharer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSharer")
            .field("threshold", &self.threshold)
            .field("populated", &self.is_populated())
            .field("secret_len", &self.secret_len())
            .finish()
    }
}

impl SecretSharer {
    /// Create a sink that knows only the threshold.
    pub fn new(threshold: u8) -> Result<Self, ShamirError> {
        if threshold < 1 {
            return Err(ShamirError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            state: SecretState::Unpopulated,
        })
    }

    /// Create a source for `secret`, drawing coefficients from the OS rng.
    pub fn with_secret(threshold: u8, secret: &[u8]) -> Result<Self, ShamirError> {
        Self::with_secret_and_rng(threshold, secret, &mut OsRng)
    }

    /// Create a source for `secret` with an explicit randomness source.
    ///
    /// Each secret byte becomes the constant term of a polynomial of degree
    /// `threshold - 1`; the remaining coefficients are drawn from `rng`.
    pub fn with_secret_and_rng<R>(
        threshold: u8,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Self, ShamirError>
    where
        R: RngCore + CryptoRng,
    {
        let mut sharer = Self::new(threshold)?;
        if secret.is_empty() {
            return Err(ShamirError::EmptySecret);
        }

        let polynomials = secret
            .iter()
            .map(|&secret_byte| {
                // p(x) = secret + c1*x + c2*x^2 + ... + c_{t-1}*x^{t-1}
                let mut coefficients = vec![0u8; threshold as usize];
                coefficients[0] = secret_byte;
                rng.fill_bytes(&mut coefficients[1..]);
                coefficients
            })
            .collect();

        sharer.state = SecretState::Populated(polynomials);
        Ok(sharer)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.state, SecretState::Populated(_))
    }

    /// Secret length in bytes, 0 while unpopulated
    pub fn secret_len(&self) -> usize {
        match &self.state {
            SecretState::Populated(polynomials) => polynomials.len(),
            SecretState::Unpopulated => 0,
        }
    }

    /// The secret bytes, if known
    pub fn secret(&self) -> Option<Vec<u8>> {
        match &self.state {
            SecretState::Populated(polynomials) => Some(constant_terms(polynomials)),
            SecretState::Unpopulated => None,
        }
    }

    fn polynomials(&self) -> Result<&[Vec<u8>], ShamirError> {
        match &self.state {
            SecretState::Populated(polynomials) => Ok(polynomials),
            SecretState::Unpopulated => Err(ShamirError::NotPopulated),
        }
    }

    /// Evaluate every byte polynomial at `x`.
    pub fn compute_share(&self, x: u8) -> Result<Share, ShamirError> {
        if x == 0 {
            return Err(ShamirError::InvalidXCoordinate(0));
        }
        let polynomials = self.polynomials()?;
        Share::new(x, evaluate_all(polynomials, x))
    }

    /// Recover the secret from at least `threshold` shares.
    ///
    /// Shares are taken in input order. Exact repeats are skipped; a repeated
    /// x-coordinate with different y-values is an error. The first
    /// `threshold` distinct shares are interpolated and every further share
    /// must agree with the result, otherwise nothing is stored.
    pub fn recover_secretdata(&mut self, shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
        if self.is_populated() {
            return Err(ShamirError::AlreadyPopulated);
        }

        let distinct = distinct_shares(shares)?;
        let secret_len = match distinct.first() {
            Some(share) => share.len(),
            None => {
                return Err(ShamirError::InsufficientShares {
                    needed: self.threshold as usize,
                    got: 0,
                })
            }
        };
        if let Some(share) = distinct.iter().find(|s| s.len() != secret_len) {
            return Err(ShamirError::InconsistentShareLength {
                expected: secret_len,
                found: share.len(),
            });
        }

        let threshold = self.threshold as usize;
        if distinct.len() < threshold {
            return Err(ShamirError::InsufficientShares {
                needed: threshold,
                got: distinct.len(),
            });
        }
        log::debug!(
            "Recovering {}-byte secret from {} distinct shares (threshold {})",
            secret_len,
            distinct.len(),
            threshold
        );

        let (quorum, excess) = distinct.split_at(threshold);
        let xs: Vec<u8> = quorum.iter().map(|s| s.x()).collect();
        let mut polynomials = Vec::with_capacity(secret_len);
        for byte_idx in 0..secret_len {
            let ys: Vec<u8> = quorum.iter().map(|s| s.y()[byte_idx]).collect();
            polynomials.push(lagrange_interpolate(&xs, &ys)?);
        }

        for share in excess {
            if evaluate_all(&polynomials, share.x()) != share.y() {
                log::warn!(
                    "Share at x={} disagrees with the first {} shares",
                    share.x(),
                    threshold
                );
                polynomials.zeroize();
                return Err(ShamirError::InconsistentShares(share.x()));
            }
        }
        if !excess.is_empty() {
            log::debug!("Cross-checked {} excess shares", excess.len());
        }

        let secret = constant_terms(&polynomials);
        self.state = SecretState::Populated(polynomials);
        Ok(secret)
    }

    /// Check a share against the known polynomials.
    ///
    /// A share of the wrong length or with any differing byte is `Ok(false)`.
    pub fn is_valid_share(&self, share: &Share) -> Result<bool, ShamirError> {
        let polynomials = self.polynomials()?;
        if share.len() != polynomials.len() {
            return Ok(false);
        }
        Ok(evaluate_all(polynomials, share.x()) == share.y())
    }
}

fn evaluate_all(polynomials: &[Vec<u8>], x: u8) -> Vec<u8> {
    polynomials.iter().map(|p| evaluate(p, x)).collect()
}

fn constant_terms(polynomials: &[Vec<u8>]) -> Vec<u8> {
    polynomials.iter().map(|p| p[0]).collect()
}

/// Drop exact repeats, reject conflicting shares for the same x.
fn distinct_shares(shares: &[Share]) -> Result<Vec<&Share>, ShamirError> {
    let mut seen: [Option<&Share>; 256] = [None; 256];
    let mut distinct = Vec::with_capacity(shares.len());
    for share in shares {
        match seen[share.x() as usize] {
            Some(previous) if previous == share => continue,
            Some(_) => return Err(ShamirError::DuplicateXCoordinate(share.x())),
            None => {
                seen[share.x() as usize] = Some(share);
                distinct.push(share);
            }
        }
    }
    Ok(distinct)
}

/// Split a secret into `config.total_shares` shares at x = 1..=N
pub fn split_secret(secret: &[u8], config: &ShamirConfig) -> Result<Vec<Share>, ShamirError> {
    split_secret_with_rng(secret, config, &mut OsRng)
}

/// [`split_secret`] with an explicit randomness source
pub fn split_secret_with_rng<R>(
    secret: &[u8],
    config: &ShamirConfig,
    rng: &mut R,
) -> Result<Vec<Share>, ShamirError>
where
    R: RngCore + CryptoRng,
{
    config.validate()?;
    let sharer = SecretSharer::with_secret_and_rng(config.threshold, secret, rng)?;
    (1..=config.total_shares)
        .map(|x| sharer.compute_share(x))
        .collect()
}
