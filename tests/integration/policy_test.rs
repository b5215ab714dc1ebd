//! Integration tests for generation and validation against shared policies.

mod helpers;

use keysmith::{LengthMode, PasswordPolicy, ViolationKind, validate};

const MODES: [LengthMode; 3] = [LengthMode::Min, LengthMode::Max, LengthMode::Random];

#[test]
fn test_generated_passwords_always_validate() {
    for (index, policy) in helpers::satisfiable_policies().iter().enumerate() {
        policy.check_consistency().expect("fixture policy is consistent");
        for seed in 0..50 {
            let mut generator = helpers::seeded_generator(seed);
            for mode in MODES {
                let password = generator.generate(policy, mode).expect("generate");
                let result = validate(policy, &password);
                assert!(
                    result.passed(),
                    "policy #{index}, {mode:?}: {password:?} failed with {:?}",
                    result.messages()
                );
            }
        }
    }
}

#[test]
fn test_generated_length_lower_bound() {
    for policy in helpers::satisfiable_policies() {
        let floor = policy.min_length().max(policy.mandatory_length());
        let mut generator = helpers::seeded_generator(42);
        for mode in MODES {
            for _ in 0..20 {
                let password = generator.generate(&policy, mode).expect("generate");
                assert!(password.chars().count() >= floor);
            }
        }
    }
}

#[test]
fn test_short_passwords_always_fail() {
    let policy = PasswordPolicy::default();
    for candidate in ["", "a", "aB3#", "aB3#aB"] {
        let result = validate(&policy, candidate);
        assert!(!result.passed());
        assert!(result.has(ViolationKind::TooShort), "{candidate:?}");
    }
}

#[test]
fn test_validation_is_pure() {
    let policy = PasswordPolicy::default();
    let first = validate(&policy, "abcd");
    for noise in ["", "zzzzzzzzzzzzzzzzzzzzzz", "abcDEF12#", "!!!!"] {
        let _ = validate(&policy, noise);
    }
    assert_eq!(validate(&policy, "abcd"), first);
}

#[test]
fn test_default_policy_abcd_example() {
    let result = validate(&PasswordPolicy::default(), "abcd");
    let kinds: Vec<_> = result.violations().iter().map(|v| v.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ViolationKind::TooShort,
            ViolationKind::TooFewNumbers,
            ViolationKind::TooFewUppercase,
            ViolationKind::TooFewSymbols,
        ]
    );
    assert_eq!(
        result.to_string(),
        "The password must be at least 7 characters long.\n\
         The password must contain at least 1 numbers.\n\
         The password must contain at least 1 uppercase characters.\n\
         The password must contain at least 1 symbols."
    );
}

#[test]
fn test_symbol_forbidding_policy() {
    let mut policy = PasswordPolicy::default();
    policy.set_min_symbols(0).set_max_symbols(0);

    assert!(validate(&policy, "abcDEF123").passed());

    let result = validate(&policy, "abcDEF123!");
    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.violations()[0].kind, ViolationKind::SymbolsNotAllowed);
}

#[test]
fn test_disallowed_symbol_detection() {
    let mut policy = PasswordPolicy::default();
    policy.set_allowed_symbols(['#']);

    let result = validate(&policy, "abcDEF1#@");
    assert!(!result.passed());

    let disallowed: Vec<_> = result
        .violations()
        .iter()
        .filter(|v| v.kind == ViolationKind::DisallowedSymbol)
        .collect();
    assert_eq!(disallowed.len(), 1);
    assert!(disallowed[0].message.contains('@'));
    assert!(!disallowed[0].message.contains('#'));
}

#[test]
fn test_generate_uses_legacy_use_max_flag() {
    let policy = PasswordPolicy::default();
    let mut generator = helpers::seeded_generator(8);

    let long = generator
        .generate(&policy, Some(true).into())
        .expect("generate");
    assert_eq!(long.chars().count(), policy.max_length());

    let short = generator
        .generate(&policy, Some(false).into())
        .expect("generate");
    assert_eq!(short.chars().count(), policy.min_length());
}
