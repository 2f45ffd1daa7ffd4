use allergo_domain::{AllergyAssociation, Associated};
use serde::Deserialize;

/// Any document carrying an `allergies` association list.
///
/// Ingredients, keywords and allergens all fit; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct EntityDoc {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub allergies: Vec<AllergyAssociation>,
}

impl EntityDoc {
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| format!("#{index}"))
    }
}

impl Associated for EntityDoc {
    fn associations(&self) -> &[AllergyAssociation] {
        &self.allergies
    }
}
