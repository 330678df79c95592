//! Polynomial arithmetic over GF(256)
//!
//! Polynomials are coefficient slices in increasing degree order:
//! `coefficients[0]` is the constant term.

use crate::gf256::{gf_add, gf_div, gf_inv, gf_mul, gf_sub};
use crate::ShamirError;

/// Evaluate a polynomial at a given x value using Horner's method
pub fn evaluate(coefficients: &[u8], x: u8) -> u8 {
    coefficients
        .iter()
        .rev()
        .fold(0u8, |acc, &coef| gf_add(gf_mul(acc, x), coef))
}

/// Multiply two polynomials.
///
/// The product has `p.len() + q.len() - 1` coefficients; an empty factor
/// yields an empty product.
pub fn multiply_polynomials(p: &[u8], q: &[u8]) -> Vec<u8> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0u8; p.len() + q.len() - 1];
    for (i, &a) in p.iter().enumerate() {
        for (j, &b) in q.iter().enumerate() {
            product[i + j] = gf_add(product[i + j], gf_mul(a, b));
        }
    }
    product
}

/// Add two polynomials of possibly different degree
pub fn add_polynomials(p: &[u8], q: &[u8]) -> Vec<u8> {
    let (long, short) = if p.len() >= q.len() { (p, q) } else { (q, p) };
    let mut sum = long.to_vec();
    for (coef, &other) in sum.iter_mut().zip(short) {
        *coef = gf_add(*coef, other);
    }
    sum
}

/// Reconstruct the full polynomial through the points `(xs[i], ys[i])`.
///
/// Returns the `k` coefficients of the unique polynomial of degree `k - 1`
/// passing through all `k` points.
pub fn lagrange_interpolate(xs: &[u8], ys: &[u8]) -> Result<Vec<u8>, ShamirError> {
    if xs.len() != ys.len() {
        return Err(ShamirError::MismatchedPoints {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(ShamirError::InsufficientShares { needed: 1, got: 0 });
    }

    // Duplicates would make a basis denominator zero
    let mut seen = [false; 256];
    for &x in xs {
        if seen[x as usize] {
            return Err(ShamirError::DuplicateXCoordinate(x));
        }
        seen[x as usize] = true;
    }

    let mut coefficients = vec![0u8; xs.len()];
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        // l_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)
        let mut basis = vec![1u8];
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            let denominator = gf_sub(xi, xj);
            let term = [gf_div(xj, denominator)?, gf_inv(denominator)?];
            basis = multiply_polynomials(&basis, &term);
        }

        let scaled: Vec<u8> = basis.iter().map(|&c| gf_mul(c, yi)).collect();
        coefficients = add_polynomials(&coefficients, &scaled);
    }

    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        // p(x) = 5 + 3x + 2x^2
        let coeffs = [5u8, 3, 2];
        // p(0) = 5
        assert_eq!(evaluate(&coeffs, 0), 5);
        // p(1) = 5 ^ 3 ^ 2 = 4 (XOR in GF(256))
        assert_eq!(evaluate(&coeffs, 1), 4);
        assert_eq!(evaluate(&[], 9), 0);
    }

    #[test]
    fn test_evaluate_matches_power_sum() {
        let coeffs = [0x68u8, 0x17, 0xA5, 0x03];
        for x in 0..=255u8 {
            let expected = coeffs
                .iter()
                .enumerate()
                .fold(0u8, |acc, (k, &c)| {
                    gf_add(acc, gf_mul(c, crate::gf256::gf_pow(x, k as u32)))
                });
            assert_eq!(evaluate(&coeffs, x), expected, "x={}", x);
        }
    }

    #[test]
    fn test_multiply_polynomials() {
        assert_eq!(multiply_polynomials(&[1, 3, 4], &[4, 5]), vec![4, 9, 31, 20]);
        assert_eq!(multiply_polynomials(&[4, 5], &[1, 3, 4]), vec![4, 9, 31, 20]);
        assert_eq!(multiply_polynomials(&[7], &[1, 2, 3]), vec![7, 14, 9]);
        assert!(multiply_polynomials(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_add_polynomials() {
        assert_eq!(add_polynomials(&[1, 2, 3], &[1, 2]), vec![0, 0, 3]);
        assert_eq!(add_polynomials(&[5], &[0, 0, 9]), vec![5, 0, 9]);
    }

    #[test]
    fn test_lagrange_interpolate() {
        assert_eq!(
            lagrange_interpolate(&[2, 4, 5], &[14, 30, 32]).unwrap(),
            vec![43, 168, 150]
        );
    }

    #[test]
    fn test_lagrange_single_point() {
        assert_eq!(lagrange_interpolate(&[9], &[77]).unwrap(), vec![77]);
    }

    #[test]
    fn test_lagrange_recovers_polynomial() {
        let poly = [0x2Au8, 0x07, 0xF0];
        let xs = [1u8, 200, 33];
        let ys: Vec<u8> = xs.iter().map(|&x| evaluate(&poly, x)).collect();
        assert_eq!(lagrange_interpolate(&xs, &ys).unwrap(), poly.to_vec());
    }

    #[test]
    fn test_lagrange_over_determined_has_zero_high_terms() {
        // Six points on a line: x^2..x^5 terms vanish
        let xs = [3u8, 4, 5, 6, 7, 8];
        let ys = [0x1Fu8, 0xDC, 0xF1, 0x86, 0xAB, 0x1B];
        let poly = lagrange_interpolate(&xs, &ys).unwrap();
        assert_eq!(poly, vec![b'h', 45, 0, 0, 0, 0]);
    }

    #[test]
    fn test_lagrange_duplicate_x() {
        assert_eq!(
            lagrange_interpolate(&[2, 4, 2], &[1, 2, 3]),
            Err(ShamirError::DuplicateXCoordinate(2))
        );
    }

    #[test]
    fn test_lagrange_mismatched_points() {
        assert_eq!(
            lagrange_interpolate(&[1, 2], &[1]),
            Err(ShamirError::MismatchedPoints { xs: 2, ys: 1 })
        );
        assert!(matches!(
            lagrange_interpolate(&[], &[]),
            Err(ShamirError::InsufficientShares { .. })
        ));
    }
}
