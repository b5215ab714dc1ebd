//! Integration tests for configuration-driven engines.

use std::io::Write;

use keysmith::{
    AppConfig, HashAlgorithm, LengthMode, LoggingConfig, PasswordEngine, ViolationKind,
    init_logging,
};

#[test]
fn test_engine_from_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(
        br#"
[policy]
min_length = 10
max_length = 12
min_symbols = 2
allowed_symbols = ["$", "%", "&"]

[policy.error_messages]
too_few_symbols = "Use {} or more of $ % &."

[hashing]
algorithm = "bcrypt"
work_cost = 4
"#,
    )
    .expect("write");

    let config = AppConfig::from_file(file.path()).expect("load");
    let engine = PasswordEngine::from_config(&config);

    for _ in 0..20 {
        let password = engine.generate(LengthMode::Random).expect("generate");
        let length = password.chars().count();
        assert!((10..=12).contains(&length));
        assert!(engine.validate(&password).passed());
    }

    let result = engine.validate("abcdEFGH12#");
    assert!(result.has(ViolationKind::TooFewSymbols));
    assert!(result.has(ViolationKind::DisallowedSymbol));
    assert!(result.messages().contains(&"Use 2 or more of $ % &."));

    assert_eq!(engine.policy().algorithm(), HashAlgorithm::Bcrypt);
    let hash = engine.hash("abc").expect("hash");
    assert!(hash.starts_with("$2b$04$"));
}

#[test]
fn test_engine_from_option_map() {
    let options = serde_json::json!({
        "min_length": 9,
        "max_length": 9,
        "min_symbols": 0,
        "max_symbols": 0,
        "pass_cost": 4,
        "algorithm": 3,
        "legacy_flag": true,
    });
    let engine =
        PasswordEngine::from_options(options.as_object().expect("object")).expect("options");

    assert_eq!(engine.policy().algorithm(), HashAlgorithm::Argon2id);
    assert_eq!(engine.policy().work_cost(), 4);

    let password = engine.generate(LengthMode::Random).expect("generate");
    assert_eq!(password.chars().count(), 9);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

    let result = engine.validate("abcDEF12#");
    assert_eq!(result.violations().len(), 1);
    assert!(result.has(ViolationKind::SymbolsNotAllowed));
}

#[test]
fn test_engine_from_default_config() {
    let engine = PasswordEngine::from_config(&AppConfig::default());
    assert_eq!(engine.policy(), &keysmith::PasswordPolicy::default());
}

#[test]
fn test_init_logging_only_installs_once() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "pretty".to_string(),
    };
    init_logging(&config);
    assert!(!init_logging(&config));
}
