#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::{BigInt, BigUint};

use homomult::arith::{extended_gcd, modular_inverse};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let a = u64::from_le_bytes(data[..8].try_into().unwrap());
    let b = u64::from_le_bytes(data[8..16].try_into().unwrap());

    let a_int = BigInt::from(a);
    let b_int = BigInt::from(b);

    // Bézout identity must hold for arbitrary non-negative inputs
    let (g, x, y) = extended_gcd(&a_int, &b_int);
    assert_eq!(
        &a_int * &x + &b_int * &y,
        g,
        "Bézout identity violated for ({a}, {b})"
    );

    // When an inverse exists it must actually invert, normalized into [0, m)
    if b >= 2 {
        let a_big = BigUint::from(a);
        let m_big = BigUint::from(b);
        if let Ok(inv) = modular_inverse(&a_big, &m_big) {
            assert!(inv < m_big);
            assert_eq!((a_big * inv) % &m_big, BigUint::from(1u32));
        }
    }
});
