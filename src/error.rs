// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// Errors that can occur during cryptographic operations.
///
/// The only failure in this crate is a missing modular inverse, surfaced by
/// [`crate::arith::modular_inverse`] when its arguments are not coprime.
/// Everything else (non-prime moduli, out-of-range plaintexts) is a
/// documented precondition, not a checked fault.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no modular inverse: {operand} is not coprime to modulus {modulus}")]
    NoInverse { operand: BigUint, modulus: BigUint },
}

pub type Result<T> = std::result::Result<T, Error>;
