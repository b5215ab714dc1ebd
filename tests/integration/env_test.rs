//! Integration tests for environment-driven configuration loading.
//!
//! Kept in its own binary because it mutates process environment variables.

use keysmith::load_configuration;

#[test]
fn test_invalid_env_override_reports_single_configuration_error() {
    // SAFETY: this binary runs a single test, so no other thread reads the
    // environment concurrently.
    unsafe {
        std::env::set_var("KEYSMITH__POLICY__MIN_LENGTH", "not-a-number");
    }

    let err = load_configuration().unwrap_err();

    unsafe {
        std::env::remove_var("KEYSMITH__POLICY__MIN_LENGTH");
    }

    assert!(err.is_configuration());
    let rendered = err.to_string();
    assert_eq!(rendered.matches("CONFIGURATION").count(), 1, "{rendered}");
}
