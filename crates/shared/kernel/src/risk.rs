//! Risk aggregation over allergy associations.
//!
//! Single-association lookups use first-match semantics: when a collection holds the
//! same allergy id twice, only the first association is considered.

use allergo_domain::{AllergyAssociation, Associated, Proba};

fn is_member<S: AsRef<str>>(relevant: &[S], allergy_id: &str) -> bool {
    relevant.iter().any(|id| id.as_ref() == allergy_id)
}

/// Highest probability among associations whose id is in `relevant`.
///
/// Returns [`Proba::None`] when nothing matches, including for empty input.
#[must_use]
pub fn max_probability<S: AsRef<str>>(associations: &[AllergyAssociation], relevant: &[S]) -> Proba {
    associations
        .iter()
        .filter(|a| is_member(relevant, &a.allergy_id))
        .map(|a| a.probability)
        .max()
        .unwrap_or_default()
}

/// True when at least one association concerns an allergy in `relevant`.
#[must_use]
pub fn is_relevant<S: AsRef<str>>(associations: &[AllergyAssociation], relevant: &[S]) -> bool {
    associations.iter().any(|a| is_member(relevant, &a.allergy_id))
}

/// True when an association with the candidate's id exists and carries a different
/// probability. A missing id is not a customization.
#[must_use]
pub fn is_customized(associations: &[AllergyAssociation], candidate: &AllergyAssociation) -> bool {
    associations
        .iter()
        .any(|a| a.allergy_id == candidate.allergy_id && a.probability != candidate.probability)
}

/// First association for `allergy_id`, if any.
#[must_use]
pub fn association_for<'a>(
    associations: &'a [AllergyAssociation],
    allergy_id: &str,
) -> Option<&'a AllergyAssociation> {
    associations.iter().find(|a| a.allergy_id == allergy_id)
}

/// Strongest association for one allergy across several (possibly missing) entities.
///
/// Each entity contributes its first association for `allergy_id`, or a
/// [`Proba::None`] association when it is absent or has none. On equal
/// probabilities the earlier entity wins.
#[must_use]
pub fn max_probability_across_entities<E>(entities: &[Option<&E>], allergy_id: &str) -> AllergyAssociation
where
    E: Associated + ?Sized,
{
    let mut best: Option<&AllergyAssociation> = None;

    for entity in entities.iter().flatten() {
        let Some(candidate) = association_for(entity.associations(), allergy_id) else {
            continue;
        };
        if best.is_none_or(|current| candidate.probability > current.probability) {
            best = Some(candidate);
        }
    }

    best.cloned().unwrap_or_else(|| AllergyAssociation::none(allergy_id))
}

/// Risk helpers on anything that carries associations.
pub trait RiskExt {
    fn max_probability<S: AsRef<str>>(&self, relevant: &[S]) -> Proba;
    fn is_relevant<S: AsRef<str>>(&self, relevant: &[S]) -> bool;
    fn is_customized(&self, candidate: &AllergyAssociation) -> bool;
    fn association_for(&self, allergy_id: &str) -> Option<&AllergyAssociation>;
}

impl<T> RiskExt for T
where
    T: Associated + ?Sized,
{
    fn max_probability<S: AsRef<str>>(&self, relevant: &[S]) -> Proba {
        max_probability(self.associations(), relevant)
    }

    fn is_relevant<S: AsRef<str>>(&self, relevant: &[S]) -> bool {
        is_relevant(self.associations(), relevant)
    }

    fn is_customized(&self, candidate: &AllergyAssociation) -> bool {
        is_customized(self.associations(), candidate)
    }

    fn association_for(&self, allergy_id: &str) -> Option<&AllergyAssociation> {
        association_for(self.associations(), allergy_id)
    }
}
