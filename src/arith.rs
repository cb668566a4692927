// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic utilities shared by both cryptosystems.

use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a·x + b·y = g`.
/// Holds for all non-negative inputs, including `a = 0` (which yields
/// `(b, 0, 1)`).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x, y) = extended_gcd(&(b % a), a);
    (g, y - (b / a) * &x, x)
}

/// Computes the unique `x ∈ [0, m)` with `a·x ≡ 1 (mod m)`.
///
/// Fails with [`Error::NoInverse`] when `gcd(a, m) ≠ 1`. The Bézout
/// coefficient returned by [`extended_gcd`] may be negative, so the result
/// is normalized into `[0, m)` before conversion.
pub fn modular_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let m_int = BigInt::from(m.clone());
    let a_int = BigInt::from(a.clone()) % &m_int;

    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if !g.is_one() {
        return Err(Error::NoInverse {
            operand: a.clone(),
            modulus: m.clone(),
        });
    }

    let inv = ((x % &m_int) + &m_int) % &m_int;
    Ok(inv
        .to_biguint()
        .expect("value normalized into [0, m) is non-negative"))
}
