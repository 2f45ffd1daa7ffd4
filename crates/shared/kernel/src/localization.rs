//! Picking display strings from partially translated text.

use allergo_domain::{Language, LocalizedText};

/// Preference used when the caller has none.
pub const DEFAULT_PREFERENCE: [Language; 2] = [Language::Swedish, Language::English];

/// Primary and fallback language for a preference list.
///
/// Swedish is primary whenever it is listed. English is the fallback whenever it
/// is listed and not primary; otherwise the second entry is, if it differs from
/// the first. An empty list behaves like [`DEFAULT_PREFERENCE`].
///
/// ```rust
/// use allergo_kernel::domain::Language;
/// use allergo_kernel::localization::primary_and_fallback;
///
/// assert_eq!(primary_and_fallback(&[]), (Language::Swedish, Some(Language::English)));
/// assert_eq!(primary_and_fallback(&[Language::German]), (Language::German, None));
/// ```
#[must_use]
pub fn primary_and_fallback(languages: &[Language]) -> (Language, Option<Language>) {
    let available = if languages.is_empty() { &DEFAULT_PREFERENCE[..] } else { languages };

    let primary = if available.contains(&Language::Swedish) { Language::Swedish } else { available[0] };

    let fallback = if primary != Language::English && available.contains(&Language::English) {
        Some(Language::English)
    } else if available.len() > 1 && available[0] != available[1] {
        Some(available[1])
    } else {
        None
    };

    (primary, fallback)
}

/// First non-empty text in `preferred` order, else any non-empty text.
///
/// Remaining entries are scanned in language order.
#[must_use]
pub fn best_localized_string<'a>(text: &'a LocalizedText, preferred: &[Language]) -> Option<&'a str> {
    preferred
        .iter()
        .filter_map(|lang| text.get(*lang))
        .find(|value| !value.is_empty())
        .or_else(|| text.iter().map(|(_, value)| value).find(|value| !value.is_empty()))
}

/// Swedish/English text from optional inputs.
///
/// Empty inputs count as missing. When both are missing, a non-empty `fallback`
/// fills both languages.
#[must_use]
pub fn create_localized_text(
    swedish: Option<&str>,
    english: Option<&str>,
    fallback: Option<&str>,
) -> LocalizedText {
    let mut text = LocalizedText::new();

    if let Some(value) = swedish.filter(|v| !v.is_empty()) {
        text.insert(Language::Swedish, value);
    }
    if let Some(value) = english.filter(|v| !v.is_empty()) {
        text.insert(Language::English, value);
    }
    if text.is_empty()
        && let Some(value) = fallback.filter(|v| !v.is_empty())
    {
        text.insert(Language::Swedish, value);
        text.insert(Language::English, value);
    }

    text
}
