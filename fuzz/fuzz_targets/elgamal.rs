#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use rand::rngs::OsRng;
use std::sync::OnceLock;

use homomult::elgamal::{ElGamal, PublicKey, SecretKey};

// 2^61 - 1, a Mersenne prime
const PRIME: u64 = 2_305_843_009_213_693_951;

static KEYS: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (pk, sk) = KEYS.get_or_init(|| ElGamal::keygen(&BigUint::from(PRIME), &mut OsRng));
    let p = BigUint::from(PRIME);

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let m1 = BigUint::from_bytes_be(m1_bytes) % &p;
    let m2 = BigUint::from_bytes_be(m2_bytes) % &p;

    let c1 = ElGamal::encrypt(&m1, pk, &mut OsRng);
    let c2 = ElGamal::encrypt(&m2, pk, &mut OsRng);

    assert_eq!(ElGamal::decrypt(&c1, pk, sk), m1, "round-trip failed");

    let product = ElGamal::decrypt(&(&c1 * &c2), pk, sk);
    assert_eq!(product, (&m1 * &m2) % &p, "homomorphism failed");
});
