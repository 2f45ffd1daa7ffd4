use crate::allergy::{AllergyAssociation, Associated, same_associations};
use crate::language::Language;
use allergo_derive::record;
use chrono::{DateTime, Utc};

/// The ingredient word itself, e.g. `"jordnötter"`.
pub type IngredientId = String;

/// An ingredient word with the allergies it is associated with.
///
/// Allergies that are not relevant are simply absent from `allergies`.
#[record(collection = "Ingredients")]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: IngredientId,
    pub allergies: Vec<AllergyAssociation>,
    pub language: Language,
    pub updated: DateTime<Utc>,
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.language == other.language
            && same_associations(&self.allergies, &other.allergies)
    }
}

impl Eq for Ingredient {}

impl Associated for Ingredient {
    fn associations(&self) -> &[AllergyAssociation] {
        &self.allergies
    }
}

#[record]
pub struct IngredientList {
    pub items: Vec<Ingredient>,
}

/// Request body naming a single ingredient.
#[record]
pub struct IngredientName {
    pub name: IngredientId,
}

/// Paginated ingredient search.
#[record]
pub struct IngredientSearch {
    pub limit: u32,
    pub excluded_ids: Vec<IngredientId>,
    pub string: Option<String>,
}
