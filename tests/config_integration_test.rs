//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use sheetdash::config::{load_config, load_from_env, Environment};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "ENVIRONMENT",
        "GOOGLE_SPREADSHEET_ID",
        "CACHE_TTL",
        "DEBUG",
        "SHEETDASH_APPLICATION_LOG_LEVEL",
        "SHEETDASH_GOOGLE_SHEETS_API_BASE_URL",
        "SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS",
        "SHEETDASH_CACHE_METADATA_TTL_SECONDS",
        "SHEETDASH_GOOGLE_SHEETS_TIMEOUT_SECONDS",
        "TEST_SHEET_ID",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
environment = "production"

[application]
log_level = "warn"

[google_sheets]
spreadsheet_id = "15k4L7Sib0ZRTWfeo"
api_base_url = "http://localhost:8080/v4"
credentials_secret = "DASH_CREDS"
timeout_seconds = 10

[cache]
ttl_seconds = 60
metadata_ttl_seconds = 120
min_request_interval_ms = 250

[[sheets]]
name = "Cohort"
display_name = "Cohort Analysis"
icon = "📈"
range = "A1:G100"
required_columns = ["COHORT", "USERS"]

[logging]
local_enabled = false
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.google_sheets.spreadsheet_id, "15k4L7Sib0ZRTWfeo");
    assert_eq!(config.google_sheets.credentials_secret, "DASH_CREDS");
    assert_eq!(config.cache.ttl_seconds, 60);
    assert_eq!(config.cache.min_request_interval_ms, 250);
    assert_eq!(config.sheets.len(), 1);

    let cohort = config.sheet("Cohort").unwrap();
    assert_eq!(cohort.range, "A1:G100");
    assert_eq!(cohort.title(), "Cohort Analysis");
    assert!(cohort.required_columns.contains("USERS"));
    assert!(config.sheet("Monetization").is_none());
}

#[test]
fn test_minimal_config_uses_default_sheets() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[google_sheets]
spreadsheet_id = "abc"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cache.ttl_seconds, 300);
    assert_eq!(config.cache.metadata_ttl_seconds, 600);
    assert_eq!(config.cache.min_request_interval_ms, 100);

    let names: Vec<&str> = config.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Cohort", "Monetization", "Convertion"]);

    let unknown = config.sheet_or_default("Notes");
    assert_eq!(unknown.range, "A1:Z1000");
    assert!(unknown.required_columns.is_empty());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_SHEET_ID", "from-env");

    let file = write_config(
        r#"
[google_sheets]
# spreadsheet_id = "${NOT_SUBSTITUTED_IN_COMMENTS}"
spreadsheet_id = "${TEST_SHEET_ID}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.google_sheets.spreadsheet_id, "from-env");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[google_sheets]
spreadsheet_id = "${TEST_SHEET_ID}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_SHEET_ID"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("ENVIRONMENT", "production");
    std::env::set_var("GOOGLE_SPREADSHEET_ID", "override-id");
    std::env::set_var("CACHE_TTL", "42");
    std::env::set_var("DEBUG", "true");
    std::env::set_var("SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS", "0");

    let file = write_config(
        r#"
environment = "development"

[google_sheets]
spreadsheet_id = "file-id"

[cache]
ttl_seconds = 300
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.google_sheets.spreadsheet_id, "override-id");
    assert_eq!(config.cache.ttl_seconds, 42);
    assert_eq!(config.cache.min_request_interval_ms, 0);
    assert!(config.application.debug);
    assert_eq!(config.effective_log_level(), "debug");

    cleanup_env_vars();
}

#[test]
fn test_invalid_cache_ttl_env() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GOOGLE_SPREADSHEET_ID", "id");
    std::env::set_var("CACHE_TTL", "five minutes");

    let err = load_from_env().unwrap_err();
    assert!(err.to_string().contains("CACHE_TTL"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_numeric_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    for var in [
        "SHEETDASH_GOOGLE_SHEETS_TIMEOUT_SECONDS",
        "SHEETDASH_CACHE_METADATA_TTL_SECONDS",
        "SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS",
    ] {
        cleanup_env_vars();
        std::env::set_var("GOOGLE_SPREADSHEET_ID", "id");
        std::env::set_var(var, "soon");

        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains(var), "expected '{var}' in '{err}'");
    }

    cleanup_env_vars();
    std::env::set_var("GOOGLE_SPREADSHEET_ID", "id");
    std::env::set_var("SHEETDASH_GOOGLE_SHEETS_TIMEOUT_SECONDS", " 12 ");
    std::env::set_var("SHEETDASH_CACHE_METADATA_TTL_SECONDS", "900");
    let config = load_from_env().unwrap();
    assert_eq!(config.google_sheets.timeout_seconds, 12);
    assert_eq!(config.cache.metadata_ttl_seconds, 900);

    cleanup_env_vars();
}

#[test]
fn test_load_from_env_requires_spreadsheet_id() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let err = load_from_env().unwrap_err();
    assert!(err.to_string().contains("spreadsheet_id"));

    std::env::set_var("GOOGLE_SPREADSHEET_ID", "env-only");
    let config = load_from_env().unwrap();
    assert_eq!(config.google_sheets.spreadsheet_id, "env-only");
    assert_eq!(config.sheets.len(), 3);

    cleanup_env_vars();
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        (
            r#"
[google_sheets]
spreadsheet_id = "id"
api_base_url = "ftp://example.com"
"#,
            "api_base_url",
        ),
        (
            r#"
[google_sheets]
spreadsheet_id = "id"

[cache]
ttl_seconds = 0
"#,
            "ttl_seconds",
        ),
        (
            r#"
[google_sheets]
spreadsheet_id = "id"

[[sheets]]
name = "Cohort"
range = "A1:B2"

[[sheets]]
name = "Cohort"
range = "A1:C3"
"#,
            "Duplicate sheet",
        ),
    ];

    for (toml, expected) in cases {
        let file = write_config(toml);
        let err = load_config(file.path()).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }
}

#[test]
fn test_missing_config_file() {
    let result = load_config("/nonexistent/sheetdash.toml");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}
