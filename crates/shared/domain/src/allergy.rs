use crate::proba::Proba;
use crate::text::BilingualText;
use allergo_derive::record;
use std::collections::HashMap;

pub type AllergyId = String;

/// An allergy the app can screen for (e.g. peanut, gluten).
#[record(collection = "Allergies")]
#[derive(PartialEq, Eq, Hash)]
pub struct Allergy {
    #[serde(rename = "_id")]
    pub id: AllergyId,
    pub name: BilingualText,
    pub info: BilingualText,
    pub web: BilingualText,
    pub beta: bool,
}

/// An allergy together with the user's on/off choice for it.
#[record]
pub struct AllergySelection {
    pub allergy: Allergy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl AllergySelection {
    /// Only an explicit `true` counts as active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.active, Some(true))
    }
}

/// Probability that an entity triggers one allergy.
///
/// Older documents use `allergy`/`proba` as field names; both spellings are accepted.
#[record]
#[derive(PartialEq, Eq, Hash)]
pub struct AllergyAssociation {
    #[serde(alias = "allergy")]
    pub allergy_id: AllergyId,
    #[serde(alias = "proba")]
    pub probability: Proba,
}

impl AllergyAssociation {
    pub fn new(allergy_id: impl Into<AllergyId>, probability: Proba) -> Self {
        Self { allergy_id: allergy_id.into(), probability }
    }

    /// Association stating that `allergy_id` carries no risk.
    pub fn none(allergy_id: impl Into<AllergyId>) -> Self {
        Self::new(allergy_id, Proba::None)
    }
}

/// An edited association next to the value it was edited from.
#[record]
#[derive(PartialEq, Eq, Hash)]
pub struct AllergyAssociationWithOriginal {
    #[serde(alias = "allergyProba")]
    pub current: AllergyAssociation,
    pub original: AllergyAssociation,
}

impl AllergyAssociationWithOriginal {
    /// Starts an edit: `current` is a copy of `original`.
    #[must_use]
    pub fn new(original: AllergyAssociation) -> Self {
        Self { current: original.clone(), original }
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.current != self.original
    }
}

/// Entities that carry a set of allergy associations (allergens, ingredients, keywords).
pub trait Associated {
    fn associations(&self) -> &[AllergyAssociation];
}

impl Associated for [AllergyAssociation] {
    fn associations(&self) -> &[AllergyAssociation] {
        self
    }
}

impl Associated for Vec<AllergyAssociation> {
    fn associations(&self) -> &[AllergyAssociation] {
        self
    }
}

/// Views an association collection as `allergyId -> probability`.
///
/// On duplicate ids the first association wins, matching lookup semantics elsewhere.
#[must_use]
pub fn association_map(associations: &[AllergyAssociation]) -> HashMap<&str, Proba> {
    let mut map = HashMap::with_capacity(associations.len());
    for association in associations {
        map.entry(association.allergy_id.as_str()).or_insert(association.probability);
    }
    map
}

/// Order-independent comparison of two association collections.
#[must_use]
pub fn same_associations(lhs: &[AllergyAssociation], rhs: &[AllergyAssociation]) -> bool {
    association_map(lhs) == association_map(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assoc(id: &str, p: Proba) -> AllergyAssociation {
        AllergyAssociation::new(id, p)
    }

    #[test]
    fn same_associations_ignores_order() {
        let a = [assoc("peanut", Proba::Low), assoc("gluten", Proba::High)];
        let b = [assoc("gluten", Proba::High), assoc("peanut", Proba::Low)];
        assert!(same_associations(&a, &b));
    }

    #[test]
    fn same_length_different_ids_are_not_equal() {
        let a = [assoc("peanut", Proba::Low)];
        let b = [assoc("gluten", Proba::Low)];
        assert!(!same_associations(&a, &b));
    }

    #[test]
    fn subset_is_not_equal() {
        let a = [assoc("peanut", Proba::Low)];
        let b = [assoc("peanut", Proba::Low), assoc("milk", Proba::None)];
        assert!(!same_associations(&a, &b));
        assert!(!same_associations(&b, &a));
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let legacy: AllergyAssociation =
            serde_json::from_str(r#"{"allergy":"milk","proba":"medium"}"#).unwrap();
        assert_eq!(legacy, assoc("milk", Proba::Medium));

        let json = serde_json::to_string(&legacy).unwrap();
        assert_eq!(json, r#"{"allergyId":"milk","probability":"medium"}"#);
    }

    #[test]
    fn with_original_tracks_changes() {
        let mut edit = AllergyAssociationWithOriginal::new(assoc("egg", Proba::Low));
        assert!(!edit.changed());
        edit.current.probability = Proba::High;
        assert!(edit.changed());
    }

    #[test]
    fn selection_active_requires_explicit_true() {
        let allergy = Allergy {
            id: "egg".into(),
            name: BilingualText::default(),
            info: BilingualText::default(),
            web: BilingualText::default(),
            beta: false,
        };
        let mut selection = AllergySelection { allergy, active: None };
        assert!(!selection.is_active());
        selection.active = Some(false);
        assert!(!selection.is_active());
        selection.active = Some(true);
        assert!(selection.is_active());
    }
}
