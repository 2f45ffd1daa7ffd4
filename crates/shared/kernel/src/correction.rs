use allergo_domain::allergy::AllergyAssociationWithOriginal;
use allergo_domain::keyword::{Keyword, KeywordWithCorrection};
use allergo_domain::product::{Product, ProductSource, ProductWithCorrection};
use allergo_domain::AllergyAssociation;
use tracing::trace;

/// Applies `overrides` on top of `base`.
///
/// Base entries keep their position and take the probability of the first override
/// with the same id. Overrides for ids not yet present are appended in override
/// order, each id at most once.
#[must_use]
pub fn merge_associations(
    base: &[AllergyAssociation],
    overrides: &[AllergyAssociation],
) -> Vec<AllergyAssociation> {
    let mut merged: Vec<AllergyAssociation> = base
        .iter()
        .map(|entry| {
            overrides
                .iter()
                .find(|o| o.allergy_id == entry.allergy_id)
                .map_or_else(|| entry.clone(), |o| AllergyAssociation::new(entry.allergy_id.clone(), o.probability))
        })
        .collect();

    for candidate in overrides {
        if !merged.iter().any(|a| a.allergy_id == candidate.allergy_id) {
            merged.push(candidate.clone());
        }
    }

    trace!(base = base.len(), overrides = overrides.len(), merged = merged.len(), "Merged associations");
    merged
}

/// True when the edited association differs from the one it started from.
#[must_use]
pub fn changed(pair: &AllergyAssociationWithOriginal) -> bool {
    pair.changed()
}

/// A stored record paired with a user's pending correction.
pub trait Corrected {
    type Output: PartialEq;

    /// The record as it looks with the correction applied.
    fn corrected(&self) -> Self::Output;

    /// The record as stored.
    fn original(&self) -> Self::Output;

    fn is_corrected(&self) -> bool {
        self.corrected() != self.original()
    }
}

impl Corrected for KeywordWithCorrection {
    type Output = Keyword;

    /// A correction that marks the keyword as not being an ingredient clears all
    /// associations.
    fn corrected(&self) -> Keyword {
        let Some(correction) = &self.correction else {
            return Keyword { id: self.keyword_id.clone(), ..self.keyword.clone() };
        };

        let allergies = if correction.is_ingredient == Some(false) {
            Vec::new()
        } else {
            merge_associations(&self.keyword.allergies, &correction.allergies)
        };

        Keyword {
            id: self.keyword_id.clone(),
            is_ingredient: correction.is_ingredient.unwrap_or(self.keyword.is_ingredient),
            allergies,
            updated: correction.updated,
        }
    }

    fn original(&self) -> Keyword {
        self.keyword.clone()
    }
}

/// Empty string clears the field, `None` keeps the stored value.
fn override_field<T>(correction: Option<&T>, stored: Option<&T>) -> Option<T>
where
    T: AsRef<str> + Clone,
{
    match correction {
        Some(value) if value.as_ref().is_empty() => None,
        Some(value) => Some(value.clone()),
        None => stored.cloned(),
    }
}

impl Corrected for ProductWithCorrection {
    type Output = Option<Product>;

    /// Yields `None` only when there is neither a stored product nor a corrected name.
    fn corrected(&self) -> Option<Product> {
        let stored = self.product.as_ref();
        let Some(correction) = &self.correction else {
            return self.product.clone();
        };
        let Some(name) = correction.name.clone().or_else(|| stored.map(|p| p.name.clone())) else {
            return self.product.clone();
        };

        Some(Product {
            id: self.ean.clone(),
            name,
            producer: override_field(correction.producer.as_ref(), stored.and_then(|p| p.producer.as_ref())),
            origin: override_field(correction.origin.as_ref(), stored.and_then(|p| p.origin.as_ref())),
            ingredients: override_field(
                correction.ingredients.as_ref(),
                stored.and_then(|p| p.ingredients.as_ref()),
            ),
            image: correction.image.clone().or_else(|| stored.and_then(|p| p.image.clone())),
            updated: correction.updated,
            data_source: ProductSource::App,
        })
    }

    fn original(&self) -> Option<Product> {
        self.product.clone()
    }
}
