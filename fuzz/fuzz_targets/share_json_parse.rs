#![no_main]

use libfuzzer_sys::fuzz_target;
use polysecret_shamir::Share;

fuzz_target!(|data: &[u8]| {
    // Deserialization validates through Share::new, so anything accepted
    // must have a usable x-coordinate and y-values.
    if let Ok(share) = serde_json::from_slice::<Share>(data) {
        assert_ne!(share.x(), 0);
        assert!(!share.is_empty());
    }
});
