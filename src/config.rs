//! Configuration constants and settings for the importer.

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Meters to centimeters.
pub const M_TO_CM: f64 = 100.0;

/// Millimeters to centimeters.
pub const MM_TO_CM: f64 = 0.1;

/// Chord change (cm) below which a station is merged into the previous kept one.
pub const MERGE_CHORD_TOLERANCE_CM: f64 = 1.0;

/// Twist change (deg) below which a station is merged into the previous kept one.
pub const MERGE_TWIST_TOLERANCE_DEG: f64 = 1.0;

/// Default simplification tolerance for auxiliary outlines (chord-normalized units).
pub const DEFAULT_SIMPLIFICATION_TOLERANCE: f64 = 0.005;

/// Default shell thickness in millimeters.
pub const DEFAULT_SHELL_THICKNESS_MM: f64 = 1.0;

/// Maximum recursion depth for polyline simplification.
pub const MAX_SIMPLIFY_DEPTH: usize = 256;

/// Number of preamble lines in the legacy blade format.
pub const LEGACY_HEADER_LINES: usize = 3;

/// Marker identifying the newer (v2.x) blade format.
pub const V2_MARKER: &str = "Blade Data";

/// Marker of the table header line in the newer blade format.
pub const V2_TABLE_HEADER: &str = "POS_[m]";

/// Options for a single import run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// RDP tolerance for auxiliary outlines, in airfoil coordinates.
    pub simplification_tolerance: f64,
    /// Shift span positions so the root sits at zero.
    pub zero_hub: bool,
    /// Ask the kernel to center the finished solid on its center of mass.
    pub center_by_mass: bool,
    /// Shell wall thickness in millimeters.
    pub shell_thickness_mm: f64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            simplification_tolerance: DEFAULT_SIMPLIFICATION_TOLERANCE,
            zero_hub: false,
            center_by_mass: false,
            shell_thickness_mm: DEFAULT_SHELL_THICKNESS_MM,
        }
    }
}

impl ImportOptions {
    /// Check the numeric options.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("simplification_tolerance", self.simplification_tolerance)?;
        check_non_negative("shell_thickness_mm", self.shell_thickness_mm)?;
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ImportError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
