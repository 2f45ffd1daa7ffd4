//! Display labels as static data.
//!
//! Each table row is `(key, language, label)`. Supporting another language means
//! adding rows; no code changes.

use crate::localization::best_localized_string;
use allergo_domain::user::Role;
use allergo_domain::{Language, LocalizedText, Proba};

#[derive(Debug, Clone, Copy)]
pub struct LabelTable<K: 'static> {
    rows: &'static [(K, Language, &'static str)],
}

impl<K> LabelTable<K>
where
    K: Copy + PartialEq + 'static,
{
    #[must_use]
    pub const fn new(rows: &'static [(K, Language, &'static str)]) -> Self {
        Self { rows }
    }

    /// Label for `key` in exactly `language`.
    #[must_use]
    pub fn get(&self, key: K, language: Language) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|(k, lang, _)| *k == key && *lang == language)
            .map(|(_, _, label)| *label)
    }

    /// All labels for `key`.
    #[must_use]
    pub fn localized(&self, key: K) -> LocalizedText {
        self.rows
            .iter()
            .filter(|(k, _, _)| *k == key)
            .map(|(_, lang, label)| (*lang, (*label).to_owned()))
            .collect()
    }

    /// Best label for a preference list, see [`best_localized_string`].
    #[must_use]
    pub fn resolve(&self, key: K, preferred: &[Language]) -> Option<String> {
        best_localized_string(&self.localized(key), preferred).map(str::to_owned)
    }
}

pub const PROBA_LABELS: LabelTable<Proba> = LabelTable::new(&[
    (Proba::None, Language::English, "No risk"),
    (Proba::Low, Language::English, "Low risk"),
    (Proba::Medium, Language::English, "Medium risk"),
    (Proba::High, Language::English, "High risk!"),
    (Proba::None, Language::Swedish, "Ingen risk"),
    (Proba::Low, Language::Swedish, "Låg risk"),
    (Proba::Medium, Language::Swedish, "Medelhög risk"),
    (Proba::High, Language::Swedish, "Hög risk!"),
]);

pub const ROLE_LABELS: LabelTable<Role> = LabelTable::new(&[
    (Role::Normal, Language::English, "User"),
    (Role::Superuser, Language::English, "Superuser"),
    (Role::Admin, Language::English, "Admin"),
    (Role::Owner, Language::English, "Owner"),
    (Role::Invalid, Language::English, "Invalid"),
    (Role::Normal, Language::Swedish, "Användare"),
    (Role::Superuser, Language::Swedish, "Superuser"),
    (Role::Admin, Language::Swedish, "Admin"),
    (Role::Owner, Language::Swedish, "Ägare"),
    (Role::Invalid, Language::Swedish, "Ogiltig"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_proba_has_english_and_swedish() {
        for proba in Proba::ALL {
            assert!(PROBA_LABELS.get(proba, Language::English).is_some(), "{proba:?}");
            assert!(PROBA_LABELS.get(proba, Language::Swedish).is_some(), "{proba:?}");
        }
    }

    #[test]
    fn every_role_has_english_and_swedish() {
        for role in [Role::Normal, Role::Superuser, Role::Admin, Role::Owner, Role::Invalid] {
            assert_eq!(ROLE_LABELS.localized(role).len(), 2, "{role:?}");
        }
    }

    #[test]
    fn resolve_follows_preferences() {
        assert_eq!(PROBA_LABELS.resolve(Proba::High, &[Language::Swedish]).as_deref(), Some("Hög risk!"));
        assert_eq!(PROBA_LABELS.resolve(Proba::Low, &[Language::English]).as_deref(), Some("Low risk"));
        // No German row: falls through to the first available label.
        assert_eq!(PROBA_LABELS.resolve(Proba::None, &[Language::German]).as_deref(), Some("No risk"));
        assert_eq!(ROLE_LABELS.get(Role::Owner, Language::Swedish), Some("Ägare"));
        assert_eq!(ROLE_LABELS.get(Role::Owner, Language::German), None);
    }
}
