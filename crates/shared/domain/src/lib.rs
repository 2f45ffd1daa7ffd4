//! # Domain Models
//!
//! Record types shared by the Allergomat client and server, with the minimal helpers
//! that belong to the data itself (ordering of [`Proba`], entity equality over
//! association sets, language tags).
//! Keep it lean: no I/O, networking, or decision logic. Aggregation and resolution
//! live in the kernel crate.

pub mod allergen;
pub mod allergy;
pub mod api_error;
pub mod config;
pub mod constants;
pub mod country;
pub mod ingredient;
pub mod keyword;
pub mod language;
pub mod picture;
pub mod proba;
pub mod product;
pub mod review;
pub mod settings;
pub mod text;
pub mod transaction;
pub mod user;

pub use allergy::{AllergyAssociation, AllergyId, Associated};
pub use language::{CountryCode, Language};
pub use proba::Proba;
pub use text::{BilingualText, LocalizedText, LocalizedTextList};
