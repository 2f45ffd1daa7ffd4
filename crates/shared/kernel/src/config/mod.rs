use allergo_domain::config::AppConfig;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `ALLERGO__LIMITS__MIN_EXPERIENCE`.
pub const ENV_PREFIX: &str = "ALLERGO";

/// Override keys holding comma-separated lists, e.g. `ALLERGO__LOCALIZATION__PREFERRED_LANGUAGES=en,de`.
pub const ENV_LIST_KEYS: [&str; 1] = ["localization.preferred_languages"];

/// Custom error type for config loading.
#[allergo_derive::allergo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn environment() -> Environment {
    ENV_LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

fn finish<T>(builder: ConfigBuilder<DefaultState>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads a configuration file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `allergo` (any supported extension) in the working
///    directory when `None`. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `ALLERGO__`, nested with
///    double underscores (`ALLERGO__API__SERVER_URL` maps to `api.server_url`).
///    Numbers and booleans are parsed; [`ENV_LIST_KEYS`] split on commas.
///
/// # Errors
/// Fails when the file is missing or its content does not match `T`.
///
/// # Example
/// ```rust
/// use allergo_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("allergo"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment());

    info!("Loading config from {}", effective_path.display());

    finish(builder)
}

/// Application config from an optional file.
///
/// Without a file only defaults and environment overrides apply.
///
/// # Errors
/// Fails when the given file is missing or malformed, or an override has the wrong type.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(Some(path));
    }

    info!("No config file given, using defaults");
    finish(Config::builder().add_source(environment()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use allergo_domain::Language;

    fn with_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: config::Map<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        finish(Config::builder().add_source(environment().source(Some(vars))))
    }

    #[test]
    fn numeric_overrides_are_parsed() {
        let cfg = with_vars(&[
            ("ALLERGO__LIMITS__MIN_EXPERIENCE", "10"),
            ("ALLERGO__LIMITS__TOKEN_VALIDITY_DAYS", "7"),
        ])
        .unwrap();

        assert_eq!(cfg.limits.min_experience, 10);
        assert_eq!(cfg.limits.token_validity_days, 7);
        assert_eq!(cfg.limits.free_product_searches_per_30_days, 5);
    }

    #[test]
    fn language_lists_split_on_commas() {
        let cfg = with_vars(&[("ALLERGO__LOCALIZATION__PREFERRED_LANGUAGES", "en,de")]).unwrap();
        assert_eq!(cfg.localization.preferred_languages, [Language::English, Language::German]);

        let cfg = with_vars(&[("ALLERGO__LOCALIZATION__PREFERRED_LANGUAGES", "en")]).unwrap();
        assert_eq!(cfg.localization.preferred_languages, [Language::English]);
    }

    #[test]
    fn string_and_bool_overrides() {
        let cfg = with_vars(&[
            ("ALLERGO__LOGGING__LEVEL", "debug"),
            ("ALLERGO__LOGGING__JSON", "true"),
            ("ALLERGO__API__SERVER_URL", "http://localhost:8080"),
        ])
        .unwrap();

        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.json);
        assert_eq!(cfg.api.server_url, "http://localhost:8080");
    }

    #[test]
    fn malformed_number_is_an_error() {
        let err = with_vars(&[("ALLERGO__LIMITS__MIN_EXPERIENCE", "lots")]).unwrap_err();
        assert!(err.to_string().starts_with("Config error (Failed to deserialize config)"), "{err}");
    }
}
