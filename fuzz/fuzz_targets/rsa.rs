#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use std::sync::OnceLock;

use homomult::rsa::{PublicKey, Rsa, SecretKey};

static KEYS: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (pk, sk) = KEYS.get_or_init(|| {
        Rsa::keygen(&BigUint::from(1_000_003u64), &BigUint::from(1_000_033u64))
            .expect("exponent search always finds a coprime e")
    });

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let m1 = BigUint::from_bytes_be(m1_bytes) % pk.n();
    let m2 = BigUint::from_bytes_be(m2_bytes) % pk.n();

    let c1 = Rsa::encrypt(&m1, pk);
    let c2 = Rsa::encrypt(&m2, pk);

    assert_eq!(Rsa::decrypt(&c1, sk), m1, "round-trip failed");

    // unpadded RSA is deterministic
    assert_eq!(c1, Rsa::encrypt(&m1, pk));

    let product = Rsa::decrypt(&(&c1 * &c2), sk);
    assert_eq!(product, (&m1 * &m2) % pk.n(), "homomorphism failed");
});
