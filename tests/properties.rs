use std::thread;

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use strmath::limb::{BASE, DIGITS_PER_LIMB};
use strmath::{add, parse, render, BigInt, ErrorKind};

/// A canonical digit sequence: no leading zeros unless it is "0".
fn random_digits(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    let mut s = String::with_capacity(len);
    s.push(char::from(b'0' + rng.gen_range(1..=9u8)));
    for _ in 1..len {
        s.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
    if rng.gen_bool(0.05) {
        s = "0".to_string();
    }
    s
}

/// Digits made mostly of nines, to hit long carry chains.
fn nines_heavy(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| if rng.gen_bool(0.9) { '9' } else { '8' })
        .collect()
}

fn big(s: &str) -> BigInt {
    parse(s).unwrap()
}

#[test]
fn test_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let s = random_digits(&mut rng, 120);
        assert_eq!(render(&big(&s)), s);
    }
}

#[test]
fn test_sum_matches_biguint() {
    let mut rng = StdRng::seed_from_u64(7);
    for i in 0..500 {
        let (a, b) = if i % 2 == 0 {
            (random_digits(&mut rng, 100), random_digits(&mut rng, 100))
        } else {
            (nines_heavy(&mut rng, 80), random_digits(&mut rng, 20))
        };
        let expected = a.parse::<BigUint>().unwrap() + b.parse::<BigUint>().unwrap();
        let sum = add(&big(&a), &big(&b));
        assert_eq!(render(&sum), expected.to_string(), "{} + {}", a, b);
        assert_eq!(BigUint::from(&sum), expected);
    }
}

#[test]
fn test_commutativity() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let a = big(&random_digits(&mut rng, 90));
        let b = big(&nines_heavy(&mut rng, 90));
        assert_eq!(render(&add(&a, &b)), render(&add(&b, &a)));
    }
}

#[test]
fn test_additive_identity() {
    let mut rng = StdRng::seed_from_u64(13);
    let zero = big("0");
    for _ in 0..200 {
        let a = big(&random_digits(&mut rng, 90));
        assert_eq!(render(&add(&a, &zero)), render(&a));
    }
}

#[test]
fn test_leading_zero_normalization() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let s = random_digits(&mut rng, 60);
        let zeros = "0".repeat(rng.gen_range(1..40));
        assert_eq!(big(&format!("{}{}", zeros, s)), big(&s));
    }
}

#[test]
fn test_limb_invariants_hold_after_add() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..300 {
        let a = big(&nines_heavy(&mut rng, 100));
        let b = big(&random_digits(&mut rng, 100));
        let sum = add(&a, &b);
        let limbs = sum.limbs();
        assert!(!limbs.is_empty());
        assert!(limbs.iter().all(|&l| l < BASE));
        assert!(limbs.len() == 1 || *limbs.last().unwrap() != 0);

        let longest = a.len().max(b.len());
        assert!(sum.len() == longest || sum.len() == longest + 1);
    }
}

#[test]
fn test_length_grows_only_on_final_carry() {
    for limbs in 1..6 {
        let max = big(&"9".repeat(DIGITS_PER_LIMB * limbs));
        assert_eq!(add(&max, &max).len(), limbs + 1);
        assert_eq!(add(&max, &big("1")).len(), limbs + 1);

        let half = big(&"4".repeat(DIGITS_PER_LIMB * limbs));
        assert_eq!(add(&half, &half).len(), limbs);
    }
}

#[test]
fn test_concrete_scenarios() {
    let cases = [
        ("123", "456", "579"),
        ("999", "1", "1000"),
        ("0", "0", "0"),
        (
            "123456789012345678901234567890",
            "1",
            "123456789012345678901234567891",
        ),
        ("999999999999999999", "1", "1000000000000000000"),
    ];
    for (a, b, expected) in cases {
        assert_eq!(render(&add(&big(a), &big(b))), expected);
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse("").unwrap_err().kind(), ErrorKind::EmptyInput);
    assert_eq!(parse("12a3").unwrap_err().kind(), ErrorKind::InvalidDigit);
}

#[test]
fn test_parallel_calls_are_independent() {
    let shared = big("123456789012345678901234567890123456789");
    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let base = shared.clone();
            thread::spawn(move || {
                let step = BigInt::from(t + 1);
                let mut acc = base.clone();
                for _ in 0..1000 {
                    acc = add(&acc, &step);
                }
                (t, render(&add(&acc, &base)))
            })
        })
        .collect();

    let expected_base = "123456789012345678901234567890123456789"
        .parse::<BigUint>()
        .unwrap();
    for handle in handles {
        let (t, got) = handle.join().unwrap();
        let expected = &expected_base * 2u32 + BigUint::from(1000 * (t + 1));
        assert_eq!(got, expected.to_string());
    }
    assert_eq!(render(&shared), "123456789012345678901234567890123456789");
}
