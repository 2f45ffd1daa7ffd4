pub mod label;
pub mod locale;
pub mod merge;
pub mod risk;
