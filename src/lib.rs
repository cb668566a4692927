// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Multiplicatively Homomorphic ElGamal & RSA
//!
//! Reference implementations of two textbook partially-homomorphic
//! public-key cryptosystems: ElGamal over the multiplicative group modulo a
//! prime, and plain (unpadded) RSA modulo a composite. In both, multiplying
//! two ciphertexts yields a ciphertext that decrypts to the product of the
//! original plaintexts, without either party learning the plaintexts.
//!
//! The two cryptosystems are structurally parallel but share no types; the
//! only shared logic is the extended-Euclidean / modular-inverse layer in
//! [`arith`].
//!
//! ## Security
//!
//! This is a teaching implementation of the mathematical protocol, not a
//! hardened library: callers supply the primes (no primality testing is
//! performed), moduli are small, operations are not constant-time, and RSA
//! carries no padding scheme. Do not use it to protect real data.
//!
//! ## Example
//!
//! ```rust
//! use homomult::elgamal::ElGamal;
//! use homomult::rsa::Rsa;
//! use num_bigint_dig::BigUint;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//!
//! // ElGamal: probabilistic encryption, homomorphic via ciphertext `*`
//! let p = BigUint::from(467u32);
//! let (pk, sk) = ElGamal::keygen(&p, &mut rng);
//! let c1 = ElGamal::encrypt(&BigUint::from(6u32), &pk, &mut rng);
//! let c2 = ElGamal::encrypt(&BigUint::from(5u32), &pk, &mut rng);
//! assert_eq!(ElGamal::decrypt(&(&c1 * &c2), &pk, &sk), BigUint::from(30u32));
//!
//! // RSA: deterministic, same homomorphic property
//! let (pk, sk) = Rsa::keygen(&BigUint::from(61u32), &BigUint::from(53u32))?;
//! let c1 = Rsa::encrypt(&BigUint::from(6u32), &pk);
//! let c2 = Rsa::encrypt(&BigUint::from(5u32), &pk);
//! assert_eq!(Rsa::decrypt(&(&c1 * &c2), &sk), BigUint::from(30u32));
//! # Ok::<(), homomult::Error>(())
//! ```

pub mod arith;
pub mod elgamal;
mod error;
pub mod rsa;

pub use error::*;
