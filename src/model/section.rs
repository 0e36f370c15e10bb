//! Spanwise blade station definition.

use serde::{Deserialize, Serialize};

/// Airfoil name attached to a blade station.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileTag {
    /// Station names its polar/airfoil file.
    Named(String),
    /// No per-station name (legacy files, or a v2 row without the column).
    #[default]
    Untagged,
}

impl ProfileTag {
    /// The profile name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            ProfileTag::Named(name) => Some(name),
            ProfileTag::Untagged => None,
        }
    }

    /// Check if this names a circular root/fillet placeholder.
    pub fn is_circular(&self) -> bool {
        self.name().is_some_and(is_circular_name)
    }
}

/// Check if a profile name denotes a circular placeholder (case-insensitive).
pub fn is_circular_name(name: &str) -> bool {
    name.to_lowercase().contains("circular")
}

/// A single cross-section station along the blade.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BladeSection {
    /// Distance from the root along the span (cm).
    pub position_along_span: f64,
    /// Chord length (cm).
    pub chord_length: f64,
    /// Twist angle (deg).
    pub twist_angle: f64,
    /// Pitch axis offset as read from the file (cm).
    pub pitch_axis_offset: f64,
    /// Chordwise fraction of the thread (rotation) axis.
    pub thread_axis_offset: f64,
    /// Offset applied perpendicular to the chord (cm), set by calibration.
    pub chord_offset_cm: f64,
    /// Per-station airfoil name.
    pub profile: ProfileTag,
}

impl BladeSection {
    /// Create a new station. The calibrated offset starts at the file offset.
    pub fn new(
        position_along_span: f64,
        chord_length: f64,
        twist_angle: f64,
        pitch_axis_offset: f64,
        thread_axis_offset: f64,
    ) -> Self {
        Self {
            position_along_span,
            chord_length,
            twist_angle,
            pitch_axis_offset,
            thread_axis_offset,
            chord_offset_cm: pitch_axis_offset,
            profile: ProfileTag::Untagged,
        }
    }

    /// Attach a profile tag.
    pub fn with_profile(mut self, profile: ProfileTag) -> Self {
        self.profile = profile;
        self
    }

    /// Check if this station's profile name matches `name` exactly.
    pub fn uses_profile(&self, name: &str) -> bool {
        self.profile.name() == Some(name)
    }
}
