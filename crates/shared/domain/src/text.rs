//! Display strings keyed by language.

use crate::language::Language;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::marker::PhantomData;
use tracing::warn;

/// Mapping from language to display text.
///
/// May be partial. An empty string is stored as-is and treated as absent by the
/// resolvers in the kernel.
///
/// Decoding skips keys that are not a known language tag and keeps the first value
/// of a repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    pub fn insert(&mut self, language: Language, text: impl Into<String>) -> Option<String> {
        self.0.insert(language, text.into())
    }

    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        self.0.contains_key(&language)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in language order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.0.iter().map(|(lang, text)| (*lang, text.as_str()))
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(Language, &str); N]> for LocalizedText {
    fn from(entries: [(Language, &str); N]) -> Self {
        entries.into_iter().map(|(lang, text)| (lang, text.to_owned())).collect()
    }
}

/// Several names per language, e.g. the synonyms of an allergen.
///
/// Decodes like [`LocalizedText`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocalizedTextList(BTreeMap<Language, Vec<String>>);

impl LocalizedTextList {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &[String] {
        self.0.get(&language).map_or(&[], Vec::as_slice)
    }

    pub fn push(&mut self, language: Language, text: impl Into<String>) {
        self.0.entry(language).or_default().push(text.into());
    }

    /// First non-empty name of each language.
    #[must_use]
    pub fn primary(&self) -> LocalizedText {
        self.0
            .iter()
            .filter_map(|(lang, names)| {
                names.iter().find(|n| !n.is_empty()).map(|n| (*lang, n.clone()))
            })
            .collect()
    }
}

/// Language-keyed map with strict key parsing: unknown tags are skipped, not decoded
/// as [`Language::DECODE_FALLBACK`].
struct LanguageMapVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for LanguageMapVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = BTreeMap<Language, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by ISO 639-1 language tags")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BTreeMap::new();

        while let Some(tag) = access.next_key::<String>()? {
            let value = access.next_value::<V>()?;
            let Ok(language) = tag.parse::<Language>() else {
                warn!(tag = tag.as_str(), "Skipping text with unknown language tag");
                continue;
            };
            match map.entry(language) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                },
                Entry::Occupied(_) => warn!(tag = tag.as_str(), "Skipping repeated language tag"),
            }
        }

        Ok(map)
    }
}

fn deserialize_language_map<'de, D, V>(deserializer: D) -> Result<BTreeMap<Language, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(LanguageMapVisitor(PhantomData))
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_language_map(deserializer).map(Self)
    }
}

impl<'de> Deserialize<'de> for LocalizedTextList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_language_map(deserializer).map(Self)
    }
}

/// Fixed English/Swedish pair used by allergy descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub se: String,
}

impl From<&BilingualText> for LocalizedText {
    fn from(pair: &BilingualText) -> Self {
        [(Language::English, pair.en.as_str()), (Language::Swedish, pair.se.as_str())].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_do_not_replace_swedish() {
        let text: LocalizedText = serde_json::from_str(r#"{"sv":"mjölk","xx":"garbage"}"#).unwrap();
        assert_eq!(text.get(Language::Swedish), Some("mjölk"));
        assert_eq!(text.len(), 1);

        let text: LocalizedText = serde_json::from_str(r#"{"xx":"garbage","en":"milk"}"#).unwrap();
        assert_eq!(text.get(Language::Swedish), None);
        assert_eq!(text.get(Language::English), Some("milk"));
    }

    #[test]
    fn first_value_of_a_repeated_tag_wins() {
        let text: LocalizedText = serde_json::from_str(r#"{"sv":"mjölk","sv":"ost"}"#).unwrap();
        assert_eq!(text.get(Language::Swedish), Some("mjölk"));
    }

    #[test]
    fn name_lists_skip_unknown_tags() {
        let names: LocalizedTextList =
            serde_json::from_str(r#"{"sv":["jordnöt"],"klingon":["x"],"en":["peanut","groundnut"]}"#)
                .unwrap();
        assert_eq!(names.get(Language::Swedish), ["jordnöt"]);
        assert_eq!(names.get(Language::English), ["peanut", "groundnut"]);
        assert_eq!(names.primary().len(), 2);
    }

    #[test]
    fn values_must_still_be_well_typed() {
        assert!(serde_json::from_str::<LocalizedText>(r#"{"xx": 1}"#).is_err());
        assert!(serde_json::from_str::<LocalizedText>(r#"["sv"]"#).is_err());
    }
}
