#![no_main]

use libfuzzer_sys::fuzz_target;
use polysecret_shamir::{SecretSharer, Share};

fuzz_target!(|data: &[u8]| {
    // Layout: threshold, share length, then (x, y...) records.
    // recover_secretdata must never panic — it should always return Ok or Err.
    let [threshold, len, rest @ ..] = data else {
        return;
    };
    let len = (*len as usize % 16) + 1;

    let shares: Vec<Share> = rest
        .chunks(len + 1)
        .filter_map(|chunk| Share::new(chunk[0], chunk[1..].to_vec()).ok())
        .collect();

    let Ok(mut sink) = SecretSharer::new(*threshold) else {
        return;
    };
    if let Ok(secret) = sink.recover_secretdata(&shares) {
        // Every share that went into a successful recovery is consistent with it
        for share in &shares {
            assert!(sink.is_valid_share(share).unwrap());
        }
        assert_eq!(sink.secret().unwrap(), secret);
    }
});
