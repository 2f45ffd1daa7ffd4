use crate::constants;
use crate::language::Language;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub localization: LocalizationConfig,
    pub api: ApiConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped config, cheap to clone into subsystems.
/// Has the same serialized shape as [`AppConfigInner`].
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AppConfig {
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Language preference used when resolving localized strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub preferred_languages: Vec<Language>,
}

/// Remote API endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server_url: String,
    pub apple_public_key_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub token_validity_days: u32,
    pub min_experience: i32,
    pub free_product_searches_per_30_days: u32,
}

/// Log output of the command-line tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level, e.g. `"warn"` or `"debug"`.
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self { preferred_languages: vec![Language::Swedish, Language::English] }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: constants::SERVER_URL.to_owned(),
            apple_public_key_url: constants::APPLE_PUBLIC_KEY_URL.to_owned(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            token_validity_days: constants::TOKEN_VALIDITY_DAYS,
            min_experience: constants::MIN_EXPERIENCE,
            free_product_searches_per_30_days: constants::FREE_PRODUCT_SEARCHES_PER_30_DAYS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}
