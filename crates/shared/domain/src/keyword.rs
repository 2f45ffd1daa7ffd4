use crate::allergy::{AllergyAssociation, Associated, same_associations};
use crate::user::UserId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

/// The keyword itself.
pub type KeywordId = String;

/// A word found in ingredient lists, flagged as ingredient or not.
#[record(collection = "Keywords")]
pub struct Keyword {
    #[serde(rename = "_id")]
    pub id: KeywordId,
    pub is_ingredient: bool,
    pub allergies: Vec<AllergyAssociation>,
    pub updated: DateTime<Utc>,
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.is_ingredient == other.is_ingredient
            && same_associations(&self.allergies, &other.allergies)
    }
}

impl Eq for Keyword {}

impl Associated for Keyword {
    fn associations(&self) -> &[AllergyAssociation] {
        &self.allergies
    }
}

#[record]
pub struct KeywordList {
    pub items: Vec<Keyword>,
}

#[record]
pub struct KeywordName {
    pub name: KeywordId,
}

#[record]
pub struct KeywordSearch {
    pub limit: u32,
    pub excluded_ids: Vec<KeywordId>,
    pub string: Option<String>,
}

/// A user's proposed change to a keyword.
///
/// `is_ingredient: None` leaves the flag alone. `allergies` holds only the edited
/// associations.
#[record(collection = "KeywordCorrections")]
#[derive(PartialEq, Eq)]
pub struct KeywordCorrection {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserId,
    pub keyword: KeywordId,
    pub is_ingredient: Option<bool>,
    pub allergies: Vec<AllergyAssociation>,
    pub updated: DateTime<Utc>,
}

impl KeywordCorrection {
    #[must_use]
    pub fn new(
        user: UserId,
        keyword: KeywordId,
        is_ingredient: Option<bool>,
        allergies: Vec<AllergyAssociation>,
        updated: DateTime<Utc>,
    ) -> Self {
        let id = format!("{user}+{keyword}");
        Self { id, user, keyword, is_ingredient, allergies, updated }
    }
}

/// A keyword as stored, plus the requesting user's correction if any.
#[record]
pub struct KeywordWithCorrection {
    pub keyword_id: KeywordId,
    pub keyword: Keyword,
    pub correction: Option<KeywordCorrection>,
}
