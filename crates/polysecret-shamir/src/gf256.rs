//! Galois Field GF(256) arithmetic for Shamir's Secret Sharing
//!
//! Uses the irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B), the
//! field used by AES, with 3 as the generator for the log/exp tables.
//! The tables are built at compile time from the bitwise product, so there
//! is a single source of truth for the field.

use crate::ShamirError;

/// Low byte of the reducing polynomial (the x^8 term is implicit)
const REDUCTION: u8 = 0x1B;

/// Generator of the multiplicative group used for the tables
const GENERATOR: u8 = 0x03;

/// Shift-and-reduce multiplication, used to build the tables.
pub const fn gf_mul_slow(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

const fn build_tables() -> ([u8; 510], [u8; 256]) {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];
    let mut x = 1u8;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        // Repeat for easy modular arithmetic
        exp[i + 255] = x;
        log[x as usize] = i as u8;
        x = gf_mul_slow(x, GENERATOR);
        i += 1;
    }
    (exp, log)
}

const TABLES: ([u8; 510], [u8; 256]) = build_tables();

/// exp[i] = 3^i, doubled so that log sums never need a modulo
static EXP: [u8; 510] = TABLES.0;

/// log[x] = discrete log of x, log[0] is undefined
static LOG: [u8; 256] = TABLES.1;

/// Add two elements in GF(256) (XOR)
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two elements in GF(256) (same as add in characteristic 2)
#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements in GF(256)
#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_a = LOG[a as usize] as usize;
    let log_b = LOG[b as usize] as usize;
    EXP[log_a + log_b]
}

/// Divide two elements in GF(256)
#[inline]
pub fn gf_div(a: u8, b: u8) -> Result<u8, ShamirError> {
    if b == 0 {
        return Err(ShamirError::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let log_a = LOG[a as usize] as usize;
    let log_b = LOG[b as usize] as usize;
    // Add 255 to handle negative result
    Ok(EXP[log_a + 255 - log_b])
}

/// Compute the inverse of an element in GF(256)
#[inline]
pub fn gf_inv(a: u8) -> Result<u8, ShamirError> {
    if a == 0 {
        return Err(ShamirError::DivisionByZero);
    }
    Ok(EXP[255 - LOG[a as usize] as usize])
}

/// Raise an element to the power `k`. `0^0` is 1.
pub fn gf_pow(a: u8, k: u32) -> u8 {
    if k == 0 {
        return 1;
    }
    if a == 0 {
        return 0;
    }
    let log_a = LOG[a as usize] as u64;
    EXP[((log_a * k as u64) % 255) as usize]
}
