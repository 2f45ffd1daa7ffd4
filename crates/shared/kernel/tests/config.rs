use allergo_kernel::config::{load_app_config, load_config};
use allergo_kernel::domain::Language;
use allergo_kernel::domain::config::AppConfig;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let file = toml_file(
        r#"
        [localization]
        preferred_languages = ["en", "fr"]

        [limits]
        free_product_searches_per_30_days = 10
        "#,
    );

    let cfg: AppConfig = load_config(Some(file.path())).expect("load config");
    assert_eq!(cfg.localization.preferred_languages, [Language::English, Language::French]);
    assert_eq!(cfg.limits.free_product_searches_per_30_days, 10);
    assert_eq!(cfg.limits.token_validity_days, 30);
}

#[test]
#[serial]
fn defaults_without_file() {
    let cfg = load_app_config(None).expect("defaults");
    assert_eq!(cfg.limits.min_experience, 50);
    assert_eq!(cfg.localization.preferred_languages, [Language::Swedish, Language::English]);
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let err = load_app_config(Some(std::path::Path::new("/nonexistent/allergo.toml"))).unwrap_err();
    assert!(err.to_string().starts_with("Config error (Failed to build config)"), "{err}");
}
