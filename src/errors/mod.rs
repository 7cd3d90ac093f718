//! Error handling for racedeck

pub mod types;

pub use types::*;
