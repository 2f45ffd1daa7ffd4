use allergo_derive::record;
use std::collections::BTreeMap;

/// ISO 3166-1 alpha-2 code used as the country document id.
pub type CountryId = String;

#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CountryStatus {
    OfficiallyAssigned,
    UserAssigned,
}

#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
pub enum Union {
    #[serde(rename = "")]
    None,
    #[serde(rename = "eu")]
    Eu,
}

#[record]
#[derive(PartialEq, Eq)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// Native names keyed by ISO 639-3 code (e.g. `"swe"`).
    pub native: BTreeMap<String, CountryTranslation>,
}

#[record]
#[derive(PartialEq, Eq)]
pub struct CountryTranslation {
    pub official: String,
    pub common: String,
}

#[record]
#[derive(PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// International dialing prefix.
#[record]
#[derive(PartialEq, Eq)]
pub struct Idd {
    pub root: String,
    pub suffixes: Vec<String>,
}

/// Full country descriptor as imported into the `Countries` collection.
#[record(collection = "Countries")]
#[derive(PartialEq)]
pub struct Country {
    #[serde(rename = "_id")]
    pub id: CountryId,
    pub name: CountryName,
    pub tld: Vec<String>,
    pub ccn3: String,
    pub cca3: String,
    pub cioc: String,
    pub independent: Option<bool>,
    pub status: CountryStatus,
    pub currencies: BTreeMap<String, Currency>,
    pub idd: Idd,
    pub capital: Vec<String>,
    pub alt_spellings: Vec<String>,
    pub region: Region,
    pub subregion: String,
    pub languages: BTreeMap<String, String>,
    pub translations: BTreeMap<String, CountryTranslation>,
    pub latlng: Vec<f64>,
    pub demonym: String,
    pub landlocked: bool,
    pub borders: Vec<String>,
    pub area: f64,
    pub flag: String,
    #[serde(rename = "union")]
    pub union_membership: Union,
    pub unionflag: String,
}

impl Country {
    /// Compact projection; the Swedish name falls back to the English common name.
    #[must_use]
    pub fn simple(&self) -> CountrySimple {
        let swedish = self
            .name
            .native
            .get("swe")
            .map_or_else(|| self.name.common.clone(), |t| t.common.clone());

        CountrySimple {
            id: self.id.clone(),
            english: self.name.common.clone(),
            swedish,
            flag: self.flag.clone(),
        }
    }
}

#[record]
pub struct CountryRef {
    pub id: CountryId,
}

#[record]
#[derive(Default, PartialEq, Eq, Hash)]
pub struct CountrySimple {
    #[serde(rename = "_id")]
    pub id: CountryId,
    pub english: String,
    pub swedish: String,
    pub flag: String,
}

impl CountrySimple {
    /// Placeholder used when no origin is set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

#[record]
pub struct CountrySimpleList {
    pub items: Vec<CountrySimple>,
}

/// Flat country row used by the import scripts.
#[record(rename_all = "snake_case")]
pub struct CountrySummary {
    pub name_en: String,
    pub name_se: String,
    pub flag: String,
    #[serde(rename = "alpha2Code")]
    pub alpha2_code: String,
    #[serde(rename = "alpha3Code")]
    pub alpha3_code: String,
    #[serde(rename = "numCode")]
    pub num_code: String,
    pub region: String,
    #[serde(rename = "isEU")]
    pub is_eu: bool,
}
