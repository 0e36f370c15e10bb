//! Removal of near-duplicate consecutive stations.

use crate::config::{MERGE_CHORD_TOLERANCE_CM, MERGE_TWIST_TOLERANCE_DEG};
use crate::model::BladeSection;

/// Indices of the stations that get their own section plane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetainedSections {
    pub indices: Vec<usize>,
}

impl RetainedSections {
    /// Number of retained stations.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was retained.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Copy the retained stations out of `sections`.
    pub fn select(&self, sections: &[BladeSection]) -> Vec<BladeSection> {
        self.indices
            .iter()
            .filter_map(|&i| sections.get(i).cloned())
            .collect()
    }
}

/// Pick the stations to keep using the default chord/twist tolerances.
pub fn merge_sections(sections: &[BladeSection]) -> RetainedSections {
    merge_sections_with(sections, MERGE_CHORD_TOLERANCE_CM, MERGE_TWIST_TOLERANCE_DEG)
}

/// Pick the stations to keep.
///
/// A station is dropped when both its chord and twist differ from the last
/// kept station by less than the tolerances. The first and the last station
/// are always kept.
pub fn merge_sections_with(
    sections: &[BladeSection],
    chord_tol: f64,
    twist_tol: f64,
) -> RetainedSections {
    let mut indices = Vec::with_capacity(sections.len());
    let Some(first) = sections.first() else {
        return RetainedSections { indices };
    };

    indices.push(0);
    let last_idx = sections.len() - 1;
    let mut kept = first;

    for (idx, section) in sections.iter().enumerate().skip(1) {
        let similar = (section.chord_length - kept.chord_length).abs() < chord_tol
            && (section.twist_angle - kept.twist_angle).abs() < twist_tol;

        if similar && idx != last_idx {
            continue;
        }

        indices.push(idx);
        kept = section;
    }

    RetainedSections { indices }
}
