//! Blade geometry handed to the modeling kernel.

use serde::{Deserialize, Serialize};

use super::{BladeFormat, Point3D};

/// Which guide curve a rail describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailKind {
    /// Through the pitch axis of every kept section, seed (0, 0).
    PitchAxis,
    /// Through the trailing edge reference of every kept section, seed (1, 0).
    TrailingEdge,
    /// Leftmost point of each inner (shell-offset) outline.
    InfillLeft,
    /// Rightmost point of each inner (shell-offset) outline.
    InfillRight,
}

impl RailKind {
    /// Interpolated rails are fitted with a spline, the others drawn as linestrings.
    pub fn is_interpolated(&self) -> bool {
        matches!(self, RailKind::PitchAxis | RailKind::TrailingEdge)
    }
}

/// A longitudinal curve through corresponding points of the kept sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideRail {
    pub kind: RailKind,
    /// Points in blade coordinates (Z = span position).
    pub points: Vec<Point3D>,
}

/// Straight line along the span used as the sweep path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub root: Point3D,
    pub tip: Point3D,
}

impl SweepAxis {
    /// Axis length (cm).
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.root, &self.tip)
    }
}

/// A kept section with its outlines placed in the section plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSection {
    /// Index of the station in the parsed section list.
    pub source_index: usize,
    /// Plane offset along the span (cm).
    pub span_position: f64,
    /// Full outline, plane-local (Z = 0).
    pub outline: Vec<Point3D>,
    /// Simplified outline for construction lines, plane-local (Z = 0).
    /// Drawn closed: the last point connects back to the first.
    pub auxiliary_outline: Vec<Point3D>,
    /// Pitch-axis guide point in blade coordinates.
    pub pitch_axis_point: Point3D,
    /// Trailing-edge guide point in blade coordinates.
    pub trailing_edge_point: Point3D,
}

/// Options the kernel applies itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelOptions {
    pub center_by_mass: bool,
    pub shell_thickness_mm: f64,
}

/// Diagnostics gathered during one import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub format: BladeFormat,
    /// Data rows dropped because they could not be read.
    pub skipped_rows: usize,
    /// Placeholder stations dropped by the main-profile filter.
    pub discarded_placeholders: usize,
    pub main_profile: Option<String>,
    pub offset_fraction: f64,
    pub sections_parsed: usize,
    pub sections_kept: usize,
    pub profile_points: usize,
    pub auxiliary_points: usize,
}

/// Complete result of an import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BladeGeometry {
    pub sections: Vec<PlacedSection>,
    pub rails: Vec<GuideRail>,
    pub sweep_axis: SweepAxis,
    pub options: KernelOptions,
    pub report: ImportReport,
}

impl BladeGeometry {
    /// Find a rail by kind.
    pub fn rail(&self, kind: RailKind) -> Option<&GuideRail> {
        self.rails.iter().find(|r| r.kind == kind)
    }
}
