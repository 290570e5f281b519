//! Environment-driven configuration layers.
//!
//! Environment variables are process-wide, so this binary holds a single
//! test that sets them.

use japi_config::{ConfigLoader, ENVIRONMENT_VAR};
use japi_core::LinkStyle;
use std::fs;
use tempfile::TempDir;

const LIMIT_OVERRIDE_VAR: &str = "JAPI__PAGINATION__DEFAULT_LIMIT";

#[test]
fn test_environment_file_and_variables_override_defaults() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("default.toml"),
        "[pagination]\ndefault_limit = 50\nlink_style = \"plain\"\n",
    )
    .expect("write default config");
    fs::write(
        dir.path().join("staging.toml"),
        "[pagination]\nlink_style = \"object\"\n",
    )
    .expect("write staging config");

    std::env::set_var(ENVIRONMENT_VAR, "staging");
    std::env::set_var(LIMIT_OVERRIDE_VAR, "7");
    let loaded = ConfigLoader::new(dir.path());
    std::env::remove_var(LIMIT_OVERRIDE_VAR);
    std::env::remove_var(ENVIRONMENT_VAR);

    let config = loaded.expect("load config").get();
    assert_eq!(config.pagination.link_style, LinkStyle::Object);
    assert_eq!(config.pagination.default_limit, 7);

    // with the overrides gone only default.toml applies
    let config = ConfigLoader::new(dir.path()).expect("load config").get();
    assert_eq!(config.pagination.link_style, LinkStyle::Plain);
    assert_eq!(config.pagination.default_limit, 50);
}
