pub mod args;
pub mod entity;
