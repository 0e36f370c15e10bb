//! Sanity checks on parsed blade and airfoil data.

use crate::config::EPS;
use crate::model::{AirfoilProfile, BladeSection};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate the parsed stations.
///
/// Out-of-order stations are reported but never re-sorted.
pub fn validate_sections(sections: &[BladeSection]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, section) in sections.iter().enumerate() {
        let fields = [
            section.position_along_span,
            section.chord_length,
            section.twist_angle,
            section.thread_axis_offset,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            result.add_error(format!("Section {}: Non-finite value", idx + 1));
            continue;
        }

        if section.chord_length <= 0.0 {
            result.add_error(format!(
                "Section {}: Invalid chord length {} cm",
                idx + 1,
                section.chord_length
            ));
        }

        if !(0.0..=1.0).contains(&section.thread_axis_offset) {
            result.add_warning(format!(
                "Section {}: Thread axis {} lies outside the chord",
                idx + 1,
                section.thread_axis_offset
            ));
        }
    }

    for (idx, pair) in sections.windows(2).enumerate() {
        if pair[1].position_along_span <= pair[0].position_along_span {
            result.add_warning(format!(
                "Section {}: Span position {} cm does not increase (previous {} cm)",
                idx + 2,
                pair[1].position_along_span,
                pair[0].position_along_span
            ));
        }
    }

    result
}

/// Validate the airfoil outline.
pub fn validate_profile(profile: &AirfoilProfile) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if profile.len() < 3 {
        result.add_error(format!(
            "Airfoil: {} point(s), at least 3 are required",
            profile.len()
        ));
        return result;
    }

    if profile.points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        result.add_error("Airfoil: Non-finite coordinate");
    }

    if !profile.is_closed(EPS) {
        result.add_warning("Airfoil: Outline is not closed (first and last points differ)");
    }

    result
}

/// Validate both inputs of an import.
pub fn validate_inputs(sections: &[BladeSection], profile: &AirfoilProfile) -> ValidationResult {
    let mut result = validate_sections(sections);
    result.merge(validate_profile(profile));
    result
}
