//! Conformance: code determinism and window behaviour.
//!
//! - Same secret and instant → same code
//! - Instants in one window → same code
//! - Instants in adjacent windows → different code, with high probability
//! - `check_code(s, generate_code(s, t), t)` is always true

use totp_core::{
    check_code, derive_code, generate_code, generate_secret, verify_code, Derivation, TotpConfig,
};

const SECRET: &str = "ABCDEFGHIJKLMNOPQRST";
const BASE_INSTANT: i64 = 1_700_000_000;

fn keyed(window: u32) -> TotpConfig {
    TotpConfig::new(window)
        .unwrap()
        .with_derivation(Derivation::Keyed)
}

#[test]
fn conformance_code_is_deterministic() {
    for at in [0, 1, 14, 15, -1, BASE_INSTANT, i64::MAX, i64::MIN] {
        let first = generate_code(SECRET, Some(at)).unwrap();
        let second = generate_code(SECRET, Some(at)).unwrap();
        assert_eq!(first, second, "non-deterministic code at {at}");
    }
}

#[test]
fn conformance_code_stable_within_window() {
    for window in [1u32, 15, 30, 60] {
        let config = TotpConfig::new(window).unwrap();
        let w = i64::from(window);
        let start = BASE_INSTANT - BASE_INSTANT.rem_euclid(w);
        let expected = derive_code(&config, SECRET, Some(start)).unwrap();
        for offset in 0..w {
            assert_eq!(
                derive_code(&config, SECRET, Some(start + offset)).unwrap(),
                expected,
                "window {window}, offset {offset}"
            );
        }
    }
}

#[test]
fn conformance_code_changes_across_windows() {
    let config = TotpConfig::default();
    let samples = 2_000;
    let mut collisions = 0;

    for i in 0..samples {
        let boundary = BASE_INSTANT - BASE_INSTANT.rem_euclid(15) + 15 * i;
        let before = derive_code(&config, SECRET, Some(boundary - 1)).unwrap();
        let after = derive_code(&config, SECRET, Some(boundary)).unwrap();
        if before == after {
            collisions += 1;
        }
    }

    // Uniform 4-digit codes collide with probability 1/10_000 per pair.
    assert!(
        collisions <= 5,
        "{collisions} collisions across {samples} window boundaries"
    );
}

#[test]
fn conformance_keyed_code_changes_across_windows() {
    let config = keyed(15);
    let mut collisions = 0;
    for step in 0..2_000i64 {
        let a = derive_code(&config, SECRET, Some(step * 15)).unwrap();
        let b = derive_code(&config, SECRET, Some((step + 1) * 15)).unwrap();
        if a == b {
            collisions += 1;
        }
    }
    assert!(collisions <= 5, "{collisions} keyed collisions");
}

#[test]
fn conformance_round_trip_validation() {
    for i in 0..200i64 {
        let secret = generate_secret();
        let at = BASE_INSTANT + i * 7;
        let code = generate_code(&secret, Some(at)).unwrap();
        assert!(check_code(&secret, &code, Some(at)).unwrap());

        let config = keyed(30);
        let code = derive_code(&config, &secret, Some(at)).unwrap();
        assert!(verify_code(&config, &secret, &code, Some(at)).unwrap());
    }
}

#[test]
fn conformance_round_trip_at_current_time() {
    let secret = generate_secret();
    // A window boundary can fall between the two clock reads; retry once.
    let validated = (0..2).any(|_| {
        let code = generate_code(&secret, None).unwrap();
        check_code(&secret, &code, None).unwrap()
    });
    assert!(validated);
}

#[test]
fn conformance_code_format() {
    for i in 0..500i64 {
        let code = generate_code(SECRET, Some(i * 15)).unwrap();
        assert!(code.len() <= 4, "code too long: {code}");
        assert!(code.bytes().all(|b| b.is_ascii_digit()), "non-digit: {code}");
    }
}

#[test]
fn conformance_codes_are_thread_safe() {
    let expected = generate_code(SECRET, Some(BASE_INSTANT)).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| generate_code(SECRET, Some(BASE_INSTANT)).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
