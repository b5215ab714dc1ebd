//! Integration tests for hashing, verification and inspection.

mod helpers;

use std::time::Duration;

use keysmith::{
    CredentialHasher, HashAlgorithm, HashParams, LengthMode, PasswordEngine, estimate_cost,
};

#[test]
fn test_generated_password_roundtrip_every_algorithm() {
    for algorithm in HashAlgorithm::ALL {
        let engine = PasswordEngine::new(helpers::fast_policy(algorithm));
        let password = engine.generate(LengthMode::Random).expect("generate");
        let hash = engine.hash(&password).expect("hash");

        assert!(engine.verify(&password, &hash), "{algorithm}");

        let mut variant = password.clone();
        variant.push('x');
        assert!(!engine.verify(&variant, &hash), "{algorithm}");
    }
}

#[test]
fn test_inspect_reports_embedded_parameters() {
    let bcrypt_hash = CredentialHasher::from_policy(&helpers::fast_policy(HashAlgorithm::Bcrypt))
        .hash("pw")
        .expect("hash");
    let argon_hash = CredentialHasher::from_policy(&helpers::fast_policy(HashAlgorithm::Argon2i))
        .hash("pw")
        .expect("hash");

    let hasher = CredentialHasher::from_policy(&helpers::fast_policy(HashAlgorithm::Argon2i));

    let info = hasher.inspect(&bcrypt_hash);
    assert_eq!(info.params, HashParams::Bcrypt { cost: 4 });
    assert!(info.needs_rehash);

    let info = hasher.inspect(&argon_hash);
    assert_eq!(info.algorithm, Some(HashAlgorithm::Argon2i));
    assert!(!info.needs_rehash);
}

#[test]
fn test_rehash_after_cost_upgrade() {
    let mut policy = helpers::fast_policy(HashAlgorithm::Argon2id);
    let engine = PasswordEngine::new(policy.clone());
    let hash = engine.hash("correct horse").expect("hash");
    assert!(!engine.inspect(&hash).needs_rehash);

    policy.set_argon2_time_cost(2);
    let upgraded = PasswordEngine::new(policy);
    assert!(upgraded.inspect(&hash).needs_rehash);
    assert!(upgraded.verify("correct horse", &hash));
}

#[test]
fn test_estimate_cost() {
    let cost = estimate_cost(Duration::from_millis(50), 8).expect("estimate");
    assert!(cost > 8);

    let cheapest = estimate_cost(Duration::ZERO, 8).expect("estimate");
    assert_eq!(cheapest, 9);
    assert!(cost >= cheapest);
}

#[test]
fn test_estimate_cost_grows_with_target() {
    let modest = estimate_cost(Duration::from_millis(20), 4).expect("estimate");
    // Every cost below `modest` hashed in under 20ms, so an eight times
    // larger target cannot stop earlier unless timings swing by that much.
    let generous = estimate_cost(Duration::from_millis(160), 4).expect("estimate");
    assert!(modest <= generous, "{modest} > {generous}");

    let floor = estimate_cost(Duration::ZERO, modest - 1).expect("estimate");
    assert_eq!(floor, modest);
}
