use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString, IntoStaticStr};

/// Probability that something triggers an allergy.
///
/// The variants are declared in wire order, which is *not* the risk order.
/// Comparisons always go through [`Proba::ALL`]:
///
/// ```rust
/// use allergo_domain::Proba;
///
/// assert!(Proba::None < Proba::Low);
/// assert!(Proba::Medium < Proba::High);
/// assert_eq!([Proba::High, Proba::None].iter().max(), Some(&Proba::High));
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Proba {
    Low,
    Medium,
    High,
    #[default]
    None,
}

impl Proba {
    /// Canonical risk order, lowest first.
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Position of `self` in [`Proba::ALL`].
    #[must_use]
    pub fn rank(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or_default()
    }
}

impl Ord for Proba {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Proba {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_follows_canonical_sequence() {
        assert!(Proba::None < Proba::Low);
        assert!(Proba::Low < Proba::Medium);
        assert!(Proba::Medium < Proba::High);
        assert!(Proba::None < Proba::High);
    }

    #[test]
    fn text_form_matches_wire_form() {
        assert_eq!(Proba::Medium.to_string(), "medium");
        assert_eq!("high".parse::<Proba>().unwrap(), Proba::High);
        assert!("severe".parse::<Proba>().is_err());
    }

    #[test]
    fn wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Proba::None).unwrap(), r#""none""#);
        let high: Proba = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(high, Proba::High);
    }
}
