// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multiplicatively homomorphic ElGamal over the group of units modulo a
//! prime `p`.
//!
//! Encryption is probabilistic: each call draws a fresh ephemeral exponent,
//! so the same plaintext encrypts to a different ciphertext every time.
//! Multiplying two ciphertexts component-wise yields an encryption of the
//! product of the two plaintexts.

use std::ops::Mul;

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::Zero;
use num_traits::One;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound (inclusive) of the ephemeral exponent range used by
/// [`ElGamal::encrypt`].
///
/// Callers wanting a wider range for better semantic security can use
/// [`ElGamal::encrypt_with_bound`], at the cost of larger intermediate
/// values.
pub const DEFAULT_EPHEMERAL_BOUND: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    /// Prime modulus.
    p: BigUint,
    /// Group generator.
    a: BigUint,
    /// `a^d mod p` for the secret exponent `d`.
    b: BigUint,
}

impl PublicKey {
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Self {
        Self { p, a, b }
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }
}

/// Secret exponent with automatic erasure.
///
/// `Zeroize` and `ZeroizeOnDrop` wipe `d` from memory when the key is
/// dropped; `num-bigint-dig` implements `Zeroize` for `BigUint`, which
/// zeroes the underlying digit vector.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    d: BigUint,
}

impl SecretKey {
    pub fn new(d: BigUint) -> Self {
        Self { d }
    }

    #[inline]
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

/// ElGamal ciphertext `(r, t)` where `r = a^k mod p` masks the ephemeral
/// exponent and `t = b^k · m mod p` carries the masked message.
///
/// After homomorphic combination the components are **not** reduced modulo
/// `p`; see the `Mul` impls below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    r: BigUint,
    t: BigUint,
}

impl Ciphertext {
    pub fn new(r: BigUint, t: BigUint) -> Self {
        Self { r, t }
    }

    #[inline]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    #[inline]
    pub fn t(&self) -> &BigUint {
        &self.t
    }
}

// Homomorphic multiplication: E(m₁) · E(m₂) decrypts to m₁·m₂ mod p.
//
// The component-wise product is left unreduced so combination does not need
// the modulus; repeated combination grows the integers until the next
// decryption reduces them.
impl Mul for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(&self.r * &rhs.r, &self.t * &rhs.t)
    }
}

impl Mul for Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(self.r * rhs.r, self.t * rhs.t)
    }
}

pub struct ElGamal;

impl ElGamal {
    /// Generates a fresh key pair for the prime modulus `p`.
    ///
    /// The generator `a` is drawn uniformly from `[1, p-2]` and the secret
    /// exponent `d` from `[2, p-2]`, then `b = a^d mod p`.
    ///
    /// ## Preconditions
    ///
    /// `p` must be prime and `p ≥ 5` so both sampling ranges are non-empty.
    /// Neither is verified at runtime.
    pub fn keygen<R: Rng>(p: &BigUint, rng: &mut R) -> (PublicKey, SecretKey) {
        let upper = p - 1u32;

        let a = rng.gen_biguint_range(&BigUint::one(), &upper);
        let d = rng.gen_biguint_range(&BigUint::from(2u32), &upper);
        let b = a.modpow(&d, p);

        (PublicKey::new(p.clone(), a, b), SecretKey::new(d))
    }

    /// Encrypts `message` under `pk` with an ephemeral exponent drawn from
    /// `[0, DEFAULT_EPHEMERAL_BOUND]`.
    ///
    /// The plaintext must lie in `[0, p)`.
    pub fn encrypt<R: Rng>(message: &BigUint, pk: &PublicKey, rng: &mut R) -> Ciphertext {
        Self::encrypt_with_bound(message, pk, DEFAULT_EPHEMERAL_BOUND, rng)
    }

    /// Encrypts with an ephemeral exponent drawn from `[0, bound]`.
    pub fn encrypt_with_bound<R: Rng>(
        message: &BigUint,
        pk: &PublicKey,
        bound: u32,
        rng: &mut R,
    ) -> Ciphertext {
        let k = rng.gen_biguint_range(&BigUint::zero(), &BigUint::from(u64::from(bound) + 1));

        let r = pk.a().modpow(&k, pk.p());
        let t = (message * pk.b().modpow(&k, pk.p())) % pk.p();

        Ciphertext::new(r, t)
    }

    /// Recovers the plaintext as `t · (r^d)^(p-2) mod p`.
    ///
    /// The mask inverse is computed via Fermat's little theorem
    /// (`x^(p-2) ≡ x⁻¹ mod p` for prime `p`), which keeps decryption
    /// infallible. Unreduced ciphertext components from homomorphic
    /// combination are handled here, since `modpow` reduces its base.
    pub fn decrypt(ciphertext: &Ciphertext, pk: &PublicKey, sk: &SecretKey) -> BigUint {
        let p = pk.p();

        let mask = ciphertext.r().modpow(sk.d(), p);
        let mask_inv = mask.modpow(&(p - 2u32), p);

        (ciphertext.t() * mask_inv) % p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::OsRng;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    // p = 47 with primitive root 5; d = 7 gives b = 5^7 mod 47 = 11.
    fn fixed_key() -> (PublicKey, SecretKey) {
        (
            PublicKey::new(uint(47), uint(5), uint(11)),
            SecretKey::new(uint(7)),
        )
    }

    #[test]
    fn roundtrip_small_prime() {
        let mut rng = OsRng;
        let p = uint(47);
        let (pk, sk) = ElGamal::keygen(&p, &mut rng);

        let message = uint(42);
        let ciphertext = ElGamal::encrypt(&message, &pk, &mut rng);

        assert_eq!(ElGamal::decrypt(&ciphertext, &pk, &sk), message);
    }

    #[test]
    fn roundtrip_zero_message() {
        let mut rng = OsRng;
        let (pk, sk) = ElGamal::keygen(&uint(47), &mut rng);

        let ciphertext = ElGamal::encrypt(&BigUint::zero(), &pk, &mut rng);

        assert_eq!(ElGamal::decrypt(&ciphertext, &pk, &sk), BigUint::zero());
    }

    #[test]
    fn homomorphic_multiplication() {
        let mut rng = OsRng;
        let (pk, sk) = ElGamal::keygen(&uint(47), &mut rng);

        let c1 = ElGamal::encrypt(&uint(6), &pk, &mut rng);
        let c2 = ElGamal::encrypt(&uint(5), &pk, &mut rng);

        let product = &c1 * &c2;
        assert_eq!(ElGamal::decrypt(&product, &pk, &sk), uint(30));
    }

    #[test]
    fn homomorphic_product_wraps_modulus() {
        let mut rng = OsRng;
        let (pk, sk) = ElGamal::keygen(&uint(47), &mut rng);

        // 13 · 11 = 143 ≡ 2 (mod 47)
        let c1 = ElGamal::encrypt(&uint(13), &pk, &mut rng);
        let c2 = ElGamal::encrypt(&uint(11), &pk, &mut rng);

        assert_eq!(ElGamal::decrypt(&(&c1 * &c2), &pk, &sk), uint(2));
    }

    #[test]
    fn combination_is_unreduced() {
        let mut rng = OsRng;
        let (pk, _sk) = ElGamal::keygen(&uint(47), &mut rng);

        let c1 = ElGamal::encrypt(&uint(6), &pk, &mut rng);
        let c2 = ElGamal::encrypt(&uint(5), &pk, &mut rng);

        let product = &c1 * &c2;
        assert_eq!(product.r(), &(c1.r() * c2.r()));
        assert_eq!(product.t(), &(c1.t() * c2.t()));
    }

    #[test]
    fn repeated_combination_survives_growth() {
        let mut rng = OsRng;
        let (pk, sk) = ElGamal::keygen(&uint(47), &mut rng);

        // three-way product: 3 · 4 · 5 = 60 ≡ 13 (mod 47)
        let c1 = ElGamal::encrypt(&uint(3), &pk, &mut rng);
        let c2 = ElGamal::encrypt(&uint(4), &pk, &mut rng);
        let c3 = ElGamal::encrypt(&uint(5), &pk, &mut rng);

        let product = &(&c1 * &c2) * &c3;
        assert_eq!(ElGamal::decrypt(&product, &pk, &sk), uint(13));
    }

    #[test]
    fn probabilistic_encryption() {
        let mut rng = OsRng;
        let (pk, _) = fixed_key();
        let message = uint(42);

        let ciphertexts: Vec<Ciphertext> = (0..16)
            .map(|_| ElGamal::encrypt(&message, &pk, &mut rng))
            .collect();

        // independent ephemeral draws must (overwhelmingly) disagree somewhere
        assert!(ciphertexts.iter().any(|c| c != &ciphertexts[0]));
    }

    #[test]
    fn fixed_randomness_reproduces_ciphertext() {
        let (pk, sk) = fixed_key();
        let message = uint(42);

        // a constant rng pins the ephemeral exponent, so the usual
        // non-determinism disappears
        let c1 = ElGamal::encrypt(&message, &pk, &mut StepRng::new(42, 0));
        let c2 = ElGamal::encrypt(&message, &pk, &mut StepRng::new(42, 0));

        assert_eq!(c1, c2);
        assert_eq!(ElGamal::decrypt(&c1, &pk, &sk), message);
    }

    #[test]
    fn widened_ephemeral_bound_roundtrips() {
        let mut rng = OsRng;
        let (pk, sk) = fixed_key();

        let message = uint(19);
        let ciphertext = ElGamal::encrypt_with_bound(&message, &pk, 10_000, &mut rng);

        assert_eq!(ElGamal::decrypt(&ciphertext, &pk, &sk), message);
    }

    #[test]
    fn keygen_respects_sampling_ranges() {
        let mut rng = OsRng;
        let p = uint(5);

        for _ in 0..20 {
            let (pk, sk) = ElGamal::keygen(&p, &mut rng);
            assert!(*pk.a() >= uint(1) && *pk.a() <= uint(3));
            assert!(*sk.d() >= uint(2) && *sk.d() <= uint(3));
            assert!(*pk.b() < p);
        }
    }
}
