//! Language, country and locale resolution.

use allergo_domain::{CountryCode, Language};
use tracing::debug;

/// Preference order used when a user has not chosen any languages.
pub const DEFAULT_LANGUAGE_PREFERENCE: [Language; 4] =
    [Language::Swedish, Language::English, Language::German, Language::French];

/// ISO 639-1 tag of `language`.
#[must_use]
pub fn iso_code(language: Language) -> &'static str {
    language.tag()
}

/// Country whose market a language is associated with.
#[must_use]
pub const fn country_code(language: Language) -> CountryCode {
    match language {
        Language::English => "GB",
        Language::Swedish => "SE",
        Language::German => "DE",
        Language::French => "FR",
        Language::Italian => "IT",
        Language::Spanish => "ES",
        Language::Portuguese => "PT",
        Language::Dutch => "NL",
        Language::Polish => "PL",
        Language::Danish => "DK",
        Language::Norwegian => "NO",
        Language::Russian => "RU",
        Language::Japanese => "JP",
        Language::Korean => "KR",
        Language::Chinese => "CN",
        Language::Arabic => "AE",
        Language::Turkish => "TR",
        Language::Greek => "GR",
        Language::Hebrew => "IL",
        Language::Czech => "CZ",
        Language::Hungarian => "HU",
        Language::Romanian => "RO",
        Language::Bulgarian => "BG",
        Language::Ukrainian => "UA",
        Language::Thai => "TH",
        Language::Vietnamese => "VN",
        Language::Indonesian => "ID",
        Language::Malay => "MY",
        Language::Serbian => "RS",
    }
}

/// Locale string such as `"sv-SE"`.
#[must_use]
pub fn locale(language: Language) -> String {
    format!("{}-{}", iso_code(language), country_code(language))
}

/// Market (country) and locale for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketLocale {
    pub market: CountryCode,
    pub locale: String,
}

#[must_use]
pub fn market_and_locale(language: Language) -> MarketLocale {
    MarketLocale { market: country_code(language), locale: locale(language) }
}

#[must_use]
pub const fn default_language_preference() -> [Language; 4] {
    DEFAULT_LANGUAGE_PREFERENCE
}

/// Substring patterns per country, tested in order.
///
/// Order matters wherever one pattern occurs inside another text: `ukraine` is
/// tested before `uk`, and the Guinea family goes from most to least specific.
/// Known overlaps are left as they are: `america` also matches "South America" and
/// `india` matches "Indiana".
const COUNTRY_PATTERNS: &[(&[&str], CountryCode)] = &[
    // Europe
    (&["albania"], "AL"),
    (&["andorra"], "AD"),
    (&["austria", "österreich"], "AT"),
    (&["belarus"], "BY"),
    (&["belgium", "belgien"], "BE"),
    (&["bosnia", "herzegovina"], "BA"),
    (&["bulgaria"], "BG"),
    (&["croatia"], "HR"),
    (&["cyprus"], "CY"),
    (&["czech", "česká"], "CZ"),
    (&["denmark", "danmark"], "DK"),
    (&["estonia"], "EE"),
    (&["finland"], "FI"),
    (&["france", "frankrike"], "FR"),
    (&["germany", "deutschland"], "DE"),
    (&["greece", "elláda"], "GR"),
    (&["hungary", "magyarország"], "HU"),
    (&["iceland", "ísland"], "IS"),
    (&["ireland"], "IE"),
    (&["italy", "italien"], "IT"),
    (&["kosovo"], "XK"),
    (&["latvia"], "LV"),
    (&["liechtenstein"], "LI"),
    (&["lithuania"], "LT"),
    (&["luxembourg"], "LU"),
    (&["macedonia"], "MK"),
    (&["malta"], "MT"),
    (&["moldova"], "MD"),
    (&["monaco"], "MC"),
    (&["montenegro"], "ME"),
    (&["netherlands", "holland", "nederländerna"], "NL"),
    (&["norway", "norge"], "NO"),
    (&["poland", "polska"], "PL"),
    (&["portugal"], "PT"),
    (&["romania"], "RO"),
    (&["russia", "russian"], "RU"),
    (&["serbia"], "RS"),
    (&["slovakia"], "SK"),
    (&["slovenia"], "SI"),
    (&["spain", "españa", "spanien"], "ES"),
    (&["sweden", "sverige"], "SE"),
    (&["switzerland", "schweiz"], "CH"),
    (&["turkey", "türkiye"], "TR"),
    (&["ukraine"], "UA"),
    (&["uk", "united kingdom", "great britain"], "GB"),
    // North America
    (&["canada"], "CA"),
    (&["mexico"], "MX"),
    (&["usa", "united states", "america"], "US"),
    // Asia
    (&["china", "kina"], "CN"),
    (&["japan"], "JP"),
    (&["india", "indien"], "IN"),
    (&["south korea"], "KR"),
    (&["thailand"], "TH"),
    // Rest of world
    (&["australia"], "AU"),
    (&["brazil", "brasil"], "BR"),
    (&["new zealand"], "NZ"),
    (&["guinea-bissau"], "GW"),
    (&["equatorial guinea"], "GQ"),
    (&["papua new guinea"], "PG"),
    (&["guinea"], "GN"),
];

/// Maps a free-text country name (English, Swedish or native) to its ISO code.
///
/// The input is trimmed and lowercased; the first pattern contained in it wins.
#[must_use]
pub fn map_country_name_to_code(text: &str) -> Option<CountryCode> {
    let needle = text.trim().to_lowercase();

    let code = COUNTRY_PATTERNS
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| needle.contains(p)))
        .map(|(_, code)| *code);

    if code.is_none() {
        debug!(text, "No country matches text");
    }
    code
}
