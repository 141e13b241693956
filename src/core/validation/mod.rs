//! Validation of player payloads and request input
//!
//! Validators run before any mutation reaches the store, so a rejected write
//! never partially applies.

pub mod extractor;
pub mod rules;
pub mod validators;

pub use extractor::{PlayerId, ValidJson, ValidQuery};
pub use rules::{validate_full, validate_partial};
