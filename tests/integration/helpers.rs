//! Shared test helpers for integration tests.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use keysmith::{HashAlgorithm, PasswordGenerator, PasswordPolicy};

/// Generator with a reproducible CSPRNG.
pub fn seeded_generator(seed: u64) -> PasswordGenerator<StdRng> {
    PasswordGenerator::with_rng(StdRng::seed_from_u64(seed))
}

/// Policy with the cheapest cost parameters each primitive accepts.
pub fn fast_policy(algorithm: HashAlgorithm) -> PasswordPolicy {
    let mut policy = PasswordPolicy::default();
    policy
        .set_algorithm(algorithm)
        .set_work_cost(4)
        .set_argon2_memory_cost(8)
        .set_argon2_time_cost(1)
        .set_argon2_threads(1);
    policy
}

/// A spread of satisfiable policies.
pub fn satisfiable_policies() -> Vec<PasswordPolicy> {
    let mut policies = vec![PasswordPolicy::default()];

    let mut no_symbols = PasswordPolicy::default();
    no_symbols.set_min_symbols(0).set_max_symbols(0);
    policies.push(no_symbols);

    let mut optional_symbols = PasswordPolicy::default();
    optional_symbols.set_min_symbols(0).set_max_symbols(5);
    policies.push(optional_symbols);

    let mut exact = PasswordPolicy::default();
    exact.set_min_length(4).set_max_length(4);
    policies.push(exact);

    let mut heavy = PasswordPolicy::default();
    heavy
        .set_min_length(20)
        .set_max_length(64)
        .set_min_numbers(4)
        .set_min_lowercase(4)
        .set_min_uppercase(4)
        .set_min_symbols(4)
        .set_max_symbols(8)
        .set_allowed_symbols("!#$%&*+-=?@^_~".chars());
    policies.push(heavy);

    let mut letters_only = PasswordPolicy::default();
    letters_only
        .set_min_numbers(0)
        .set_min_symbols(0)
        .set_max_symbols(0)
        .set_digit_alphabet("");
    policies.push(letters_only);

    let mut zero_minimums = PasswordPolicy::default();
    zero_minimums
        .set_min_length(0)
        .set_max_length(3)
        .set_min_numbers(0)
        .set_min_lowercase(0)
        .set_min_uppercase(0)
        .set_min_symbols(0)
        .set_max_symbols(1);
    policies.push(zero_minimums);

    policies
}
