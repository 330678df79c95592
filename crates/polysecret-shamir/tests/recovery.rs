//! End-to-end recovery tests across thresholds, subsets and share layouts.
//!
//! 1. Source a secret and emit shares at arbitrary x-coordinates
//! 2. Recover from every threshold-sized subset
//! 3. Validate the remaining shares, then tamper with them

use polysecret_shamir::{split_secret_with_rng, SecretSharer, ShamirConfig, ShamirError, Share};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All `k`-element index combinations of `0..n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn walk(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            walk(i + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    walk(0, n, k, &mut Vec::new(), &mut out);
    out
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let mut rng = StdRng::seed_from_u64(0x5EC7);
    let secret = hex::decode("00ff6869a5a5deadbeef0102030405060708090a0b0c0d0e0f").unwrap();

    for threshold in 1..=4u8 {
        let source = SecretSharer::with_secret_and_rng(threshold, &secret, &mut rng).unwrap();
        let xs = [1u8, 2, 77, 128, 200, 255];
        let shares: Vec<Share> = xs.iter().map(|&x| source.compute_share(x).unwrap()).collect();

        for subset in combinations(shares.len(), threshold as usize) {
            let picked: Vec<Share> = subset.iter().map(|&i| shares[i].clone()).collect();
            let mut sink = SecretSharer::new(threshold).unwrap();
            let recovered = sink.recover_secretdata(&picked).unwrap();
            assert_eq!(recovered, secret, "threshold {} subset {:?}", threshold, subset);

            for other in &shares {
                assert!(sink.is_valid_share(other).unwrap());
            }
        }

        // All shares at once: the excess ones are cross-checked
        let mut sink = SecretSharer::new(threshold).unwrap();
        assert_eq!(sink.recover_secretdata(&shares).unwrap(), secret);
    }
}

#[test]
fn below_threshold_never_returns_a_value() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = ShamirConfig::three_of_five();
    let shares = split_secret_with_rng(b"below threshold", &config, &mut rng).unwrap();

    for k in 0..3 {
        for subset in combinations(shares.len(), k) {
            let picked: Vec<Share> = subset.iter().map(|&i| shares[i].clone()).collect();
            let mut sink = SecretSharer::new(3).unwrap();
            assert_eq!(
                sink.recover_secretdata(&picked).unwrap_err(),
                ShamirError::InsufficientShares { needed: 3, got: k }
            );
        }
    }
}

#[test]
fn random_single_byte_tampering_is_detected() {
    let mut rng = StdRng::seed_from_u64(99);
    let secret: Vec<u8> = (0..64).map(|_| rng.gen()).collect();
    let source = SecretSharer::with_secret_and_rng(4, &secret, &mut rng).unwrap();

    for _ in 0..200 {
        let x = rng.gen_range(1..=255u8);
        let (x, mut y) = source.compute_share(x).unwrap().into_parts();
        let idx = rng.gen_range(0..y.len());
        let delta = rng.gen_range(1..=255u8);
        y[idx] ^= delta;
        let tampered = Share::new(x, y).unwrap();
        assert!(!source.is_valid_share(&tampered).unwrap());
    }
}

#[test]
fn tampered_quorum_yields_wrong_secret_but_excess_share_catches_it() {
    let mut rng = StdRng::seed_from_u64(2024);
    let source = SecretSharer::with_secret_and_rng(2, b"hello", &mut rng).unwrap();
    let (x, mut y) = source.compute_share(1).unwrap().into_parts();
    y[0] ^= 0x80;
    let bad = Share::new(x, y).unwrap();
    let good = source.compute_share(2).unwrap();
    let witness = source.compute_share(3).unwrap();

    // With exactly threshold shares there is nothing to compare against
    let mut sink = SecretSharer::new(2).unwrap();
    assert_ne!(
        sink.recover_secretdata(&[bad.clone(), good.clone()]).unwrap(),
        b"hello"
    );
    assert!(!sink.is_valid_share(&witness).unwrap());

    let mut sink = SecretSharer::new(2).unwrap();
    assert_eq!(
        sink.recover_secretdata(&[bad, good, witness]).unwrap_err(),
        ShamirError::InconsistentShares(3)
    );
}

#[test]
fn shares_survive_json_transport() {
    let mut rng = StdRng::seed_from_u64(5);
    let shares =
        split_secret_with_rng(b"over the wire", &ShamirConfig::two_of_three(), &mut rng).unwrap();
    let json = serde_json::to_string(&shares).unwrap();
    let back: Vec<Share> = serde_json::from_str(&json).unwrap();

    let mut sink = SecretSharer::new(2).unwrap();
    assert_eq!(sink.recover_secretdata(&back[1..]).unwrap(), b"over the wire");
}
