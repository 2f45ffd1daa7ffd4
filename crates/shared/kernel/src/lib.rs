//! Decision logic over the shared model.
//! Every function here is pure and total; errors only exist at the config edge.
//!
//! ## Risk
//! ```rust
//! use allergo_kernel::risk::RiskExt;
//! use allergo_kernel::domain::{AllergyAssociation, Proba};
//!
//! let associations = vec![
//!     AllergyAssociation::new("peanut", Proba::Low),
//!     AllergyAssociation::new("gluten", Proba::High),
//! ];
//! assert_eq!(associations.max_probability(&["peanut"]), Proba::Low);
//! assert!(!associations.is_relevant(&["milk"]));
//! ```
//!
//! ## Locale
//! ```rust
//! use allergo_kernel::locale;
//! use allergo_kernel::domain::Language;
//!
//! assert_eq!(locale::locale(Language::Swedish), "sv-SE");
//! assert_eq!(locale::map_country_name_to_code(" Sverige "), Some("SE"));
//! ```
pub mod cache;
pub mod config;
pub mod correction;
pub mod labels;
pub mod locale;
pub mod localization;
pub mod risk;

pub use allergo_domain as domain;
