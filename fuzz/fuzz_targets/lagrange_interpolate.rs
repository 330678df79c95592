#![no_main]

use libfuzzer_sys::fuzz_target;
use polysecret_shamir::polynomial::{evaluate, lagrange_interpolate};

fuzz_target!(|data: &[u8]| {
    // Split the input into x and y halves; whenever interpolation succeeds
    // the polynomial must pass through every point.
    let half = data.len() / 2;
    let (xs, ys) = data[..half * 2].split_at(half);
    if let Ok(poly) = lagrange_interpolate(xs, ys) {
        assert_eq!(poly.len(), xs.len());
        for (&x, &y) in xs.iter().zip(ys) {
            assert_eq!(evaluate(&poly, x), y);
        }
    }
});
