//! Validation of import inputs.

mod validate;

pub use validate::{validate_inputs, validate_profile, validate_sections, ValidationResult};
