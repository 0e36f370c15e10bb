//! Pitch offset calibration from the airfoil thickness envelope.

use crate::error::{ImportError, Result};
use crate::model::{AirfoilProfile, BladeSection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Offset derived from the airfoil, as a fraction of chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub offset_fraction: f64,
}

impl Calibration {
    /// Offset (cm) for a section with the given chord.
    pub fn chord_offset(&self, chord_length: f64) -> f64 {
        -self.offset_fraction * chord_length
    }
}

/// Index of the value nearest `target`.
///
/// Scans left to right and only moves on a strictly smaller distance, so
/// the earliest of equally near values wins.
pub fn nearest_index(target: f64, values: &[f64]) -> Option<usize> {
    let mut best_value = *values.first()?;
    let mut best_idx = 0;

    for (idx, &value) in values.iter().enumerate() {
        if (target - value).abs() < (target - best_value).abs() {
            best_value = value;
            best_idx = idx;
        }
    }

    Some(best_idx)
}

/// Mid-thickness of the airfoil at the chordwise position `thread_axis`.
///
/// Picks the upper-side and lower-side points nearest in x to the axis and
/// averages their y.
pub fn deduce_offset(profile: &AirfoilProfile, thread_axis: f64) -> Result<Calibration> {
    let upper = profile.upper_side();
    let lower = profile.lower_side();

    if upper.is_empty() || lower.is_empty() {
        return Err(ImportError::Calibration {
            message: format!(
                "airfoil has {} point(s) above and {} below the chord line",
                upper.len(),
                lower.len()
            ),
        });
    }

    let upper_x: Vec<f64> = upper.iter().map(|p| p.x).collect();
    let lower_x: Vec<f64> = lower.iter().map(|p| p.x).collect();

    // Both sides are non-empty, so both lookups succeed.
    let (Some(up), Some(low)) = (
        nearest_index(thread_axis, &upper_x),
        nearest_index(thread_axis, &lower_x),
    ) else {
        return Err(ImportError::Calibration {
            message: "no points near the thread axis".to_string(),
        });
    };

    let offset_fraction = (upper[up].y + lower[low].y) / 2.0;
    debug!(
        "Calibration at x={}: upper {:?}, lower {:?}, offset fraction {}",
        thread_axis, upper[up], lower[low], offset_fraction
    );

    Ok(Calibration { offset_fraction })
}

/// Overwrite every section's offset with the calibrated one.
pub fn apply_calibration(sections: &mut [BladeSection], calibration: &Calibration) {
    for section in sections {
        section.chord_offset_cm = calibration.chord_offset(section.chord_length);
    }
}

/// Calibrate against the first section's thread axis and apply to all sections.
pub fn calibrate_sections(
    sections: &mut [BladeSection],
    profile: &AirfoilProfile,
) -> Result<Calibration> {
    let thread_axis = sections
        .first()
        .map(|s| s.thread_axis_offset)
        .ok_or_else(|| ImportError::Calibration {
            message: "no blade sections".to_string(),
        })?;

    let calibration = deduce_offset(profile, thread_axis)?;
    apply_calibration(sections, &calibration);
    Ok(calibration)
}

/// Shift span positions so the smallest one becomes zero.
pub fn zero_hub(sections: &mut [BladeSection]) {
    let Some(min) = sections
        .iter()
        .map(|s| s.position_along_span)
        .reduce(f64::min)
    else {
        return;
    };

    for section in sections {
        section.position_along_span -= min;
    }
}
