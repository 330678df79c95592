//! The `split`, `recover` and `verify` commands.

use crate::codec::{decode_share, encode_share};
use anyhow::{Context, Result};
use polysecret_shamir::{split_secret, SecretSharer, ShamirConfig, Share};
use zeroize::Zeroizing;

/// Split `secret` into encoded shares according to `config`.
pub fn split(secret: &[u8], config: &ShamirConfig) -> Result<Vec<String>> {
    log::info!(
        "Splitting {}-byte secret into {} shares (threshold {})",
        secret.len(),
        config.total_shares,
        config.threshold
    );
    let shares = split_secret(secret, config).context("Failed to split secret")?;
    Ok(shares.iter().map(encode_share).collect())
}

/// Recover the secret from encoded shares.
pub fn recover(threshold: u8, encoded: &[String]) -> Result<Zeroizing<Vec<u8>>> {
    let shares = decode_all(encoded)?;
    let mut sink = SecretSharer::new(threshold)?;
    let secret = sink
        .recover_secretdata(&shares)
        .context("Failed to recover secret")?;
    log::info!("Recovered {}-byte secret", secret.len());
    Ok(Zeroizing::new(secret))
}

/// Recover from `encoded` and check `candidate` against the result.
pub fn verify(threshold: u8, candidate: &str, encoded: &[String]) -> Result<bool> {
    let candidate =
        decode_share(candidate).with_context(|| format!("Invalid candidate share {:?}", candidate))?;
    let shares = decode_all(encoded)?;
    let mut sink = SecretSharer::new(threshold)?;
    sink.recover_secretdata(&shares)
        .context("Failed to recover secret")?;

    let valid = sink.is_valid_share(&candidate)?;
    if valid {
        log::info!("Share at x={} is consistent", candidate.x());
    } else {
        log::warn!("Share at x={} does not match the secret", candidate.x());
    }
    Ok(valid)
}

fn decode_all(encoded: &[String]) -> Result<Vec<Share>> {
    encoded
        .iter()
        .map(|s| decode_share(s).with_context(|| format!("Invalid share {:?}", s)))
        .collect()
}
