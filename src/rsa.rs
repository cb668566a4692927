// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain (unpadded) RSA with multiplicative homomorphism.
//!
//! Everything here is deterministic: the same primes always yield the same
//! key pair, and the same plaintext always yields the same ciphertext. The
//! missing padding is a known weakness of textbook RSA and is exactly what
//! makes the homomorphic property hold.

use std::ops::Mul;

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::One;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arith::modular_inverse;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    /// Public exponent.
    e: BigUint,
    /// Modulus `n = p·q`.
    n: BigUint,
}

impl PublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    #[inline]
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

/// Private exponent `d ≡ e⁻¹ (mod φ(n))`, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    d: BigUint,
    n: BigUint,
}

impl SecretKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    #[inline]
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

// Homomorphic multiplication: E(m₁) · E(m₂) decrypts to m₁·m₂ mod n.
//
// As with ElGamal, the product is left unreduced; decryption reduces it.
impl Mul for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(&self.value * &rhs.value)
    }
}

impl Mul for Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(self.value * rhs.value)
    }
}

/// Linear search parameters for the public exponent.
///
/// The reference behavior scans `e = 2, 3, 4, …` until `gcd(e, φ) = 1`,
/// which reproduces the documented `keygen(61, 53)` example. Callers who
/// prefer the conventional fixed exponent can start the search at 65537.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentSearch {
    /// First candidate tried.
    pub start: BigUint,
    /// Increment between candidates. Must be ≥ 1.
    pub step: BigUint,
}

impl Default for ExponentSearch {
    fn default() -> Self {
        Self {
            start: BigUint::from(2u32),
            step: BigUint::one(),
        }
    }
}

pub struct Rsa;

impl Rsa {
    /// Generates the key pair for the prime factors `p` and `q` using the
    /// default exponent search.
    ///
    /// Deterministic: the same `(p, q)` always yield the same key pair.
    /// Primality of the inputs is a documented precondition, not a runtime
    /// check.
    pub fn keygen(p: &BigUint, q: &BigUint) -> Result<(PublicKey, SecretKey)> {
        Self::keygen_with(p, q, &ExponentSearch::default())
    }

    /// Key generation with caller-controlled exponent search.
    ///
    /// Scans from `search.start` in steps of `search.step` until a candidate
    /// coprime to `φ = (p-1)(q-1)` is found, then computes
    /// `d = modular_inverse(e, φ)`. The search guarantees coprimality before
    /// the inverse is taken, so the propagated `Result` never fails in
    /// practice; it exists because `modular_inverse` is fallible in general.
    pub fn keygen_with(
        p: &BigUint,
        q: &BigUint,
        search: &ExponentSearch,
    ) -> Result<(PublicKey, SecretKey)> {
        let n = p * q;
        let phi = (p - 1u32) * (q - 1u32);

        let mut e = search.start.clone();
        while !e.gcd(&phi).is_one() {
            e += &search.step;
        }

        let d = modular_inverse(&e, &phi)?;

        Ok((PublicKey::new(e, n.clone()), SecretKey::new(d, n)))
    }

    /// Encrypts `message` as `message^e mod n`.
    ///
    /// The plaintext must lie in `[0, n)`.
    pub fn encrypt(message: &BigUint, pk: &PublicKey) -> Ciphertext {
        Ciphertext::new(message.modpow(pk.e(), pk.n()))
    }

    /// Decrypts as `c^d mod n`. Handles unreduced ciphertexts from
    /// homomorphic combination, since `modpow` reduces its base.
    pub fn decrypt(ciphertext: &Ciphertext, sk: &SecretKey) -> BigUint {
        ciphertext.value().modpow(sk.d(), sk.n())
    }
}
