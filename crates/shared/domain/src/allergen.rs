use crate::allergy::{AllergyAssociation, Associated, same_associations};
use crate::text::LocalizedTextList;
use allergo_derive::record;
use chrono::{DateTime, Utc};

pub type AllergenId = String;

/// How an allergen's associations were produced.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AllergenSource {
    Ai,
    Manual,
}

/// A substance (identified by its code) known to trigger one or more allergies.
///
/// Two allergens are equal when their names match and their association sets hold the
/// same `allergyId -> probability` pairs, in any order.
#[record(collection = "Allergens")]
pub struct Allergen {
    #[serde(rename = "_id")]
    pub id: AllergenId,
    pub name: LocalizedTextList,
    pub allergies: Vec<AllergyAssociation>,
    pub updated: DateTime<Utc>,
    pub source: AllergenSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<DateTime<Utc>>,
}

impl PartialEq for Allergen {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && same_associations(&self.allergies, &other.allergies)
    }
}

impl Eq for Allergen {}

impl Associated for Allergen {
    fn associations(&self) -> &[AllergyAssociation] {
        &self.allergies
    }
}

#[record]
pub struct AllergenList {
    pub items: Vec<Allergen>,
}
