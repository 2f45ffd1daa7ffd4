use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

/// ISO 3166-1 alpha-2 country code (e.g. `"SE"`).
pub type CountryCode = &'static str;

/// Languages the application can display, tagged with their ISO 639-1 code.
///
/// [`FromStr`](std::str::FromStr) is strict. Deserialization is lenient: an unknown tag
/// decodes to [`Language::Swedish`], the home market of the app, and logs a warning.
/// Keys of [`LocalizedText`](crate::LocalizedText) are the exception: unknown ones are skipped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Language {
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "sv")]
    Swedish,
    #[strum(serialize = "de")]
    German,
    #[strum(serialize = "fr")]
    French,
    #[strum(serialize = "it")]
    Italian,
    #[strum(serialize = "es")]
    Spanish,
    #[strum(serialize = "pt")]
    Portuguese,
    #[strum(serialize = "nl")]
    Dutch,
    #[strum(serialize = "pl")]
    Polish,
    #[strum(serialize = "da")]
    Danish,
    #[strum(serialize = "no")]
    Norwegian,
    #[strum(serialize = "ru")]
    Russian,
    #[strum(serialize = "ja")]
    Japanese,
    #[strum(serialize = "ko")]
    Korean,
    #[strum(serialize = "zh")]
    Chinese,
    #[strum(serialize = "ar")]
    Arabic,
    #[strum(serialize = "tr")]
    Turkish,
    #[strum(serialize = "el")]
    Greek,
    #[strum(serialize = "he")]
    Hebrew,
    #[strum(serialize = "cs")]
    Czech,
    #[strum(serialize = "hu")]
    Hungarian,
    #[strum(serialize = "ro")]
    Romanian,
    #[strum(serialize = "bg")]
    Bulgarian,
    #[strum(serialize = "uk")]
    Ukrainian,
    #[strum(serialize = "th")]
    Thai,
    #[strum(serialize = "vi")]
    Vietnamese,
    #[strum(serialize = "id")]
    Indonesian,
    #[strum(serialize = "ms")]
    Malay,
    #[strum(serialize = "sr")]
    Serbian,
}

impl Language {
    /// Language assumed when a stored tag is not recognized.
    pub const DECODE_FALLBACK: Self = Self::Swedish;

    /// The ISO 639-1 tag, e.g. `"sv"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Parses a tag, falling back to [`Language::DECODE_FALLBACK`] for unknown input.
    #[must_use]
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag, fallback = Self::DECODE_FALLBACK.tag(), "Unknown language tag");
            Self::DECODE_FALLBACK
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag_lossy(&tag))
    }
}
