//! Data model types for blade import.

mod geometry;
mod profile;
mod section;

use serde::{Deserialize, Serialize};

pub use geometry::{
    BladeGeometry, GuideRail, ImportReport, KernelOptions, PlacedSection, RailKind, SweepAxis,
};
pub use profile::AirfoilProfile;
pub use section::{is_circular_name, BladeSection, ProfileTag};

/// Chord-normalized airfoil coordinate.
pub type Point2D = nalgebra::Point2<f64>;

/// Blade or section-plane coordinate (cm).
pub type Point3D = nalgebra::Point3<f64>;

/// Blade file layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BladeFormat {
    /// QBlade v0.963: three preamble lines, five columns.
    #[default]
    Legacy,
    /// QBlade CE v2.x: "Blade Data" block with a POS_[m] table header.
    V2,
}

impl std::fmt::Display for BladeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BladeFormat::Legacy => write!(f, "legacy"),
            BladeFormat::V2 => write!(f, "v2"),
        }
    }
}
