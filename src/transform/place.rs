//! Placement of airfoil points into section planes and blade coordinates.
//!
//! Every point goes through the same recipe: scale by chord, shift so the
//! thread axis sits on the origin and the calibrated offset is applied, then
//! rotate by the twist angle about the spanwise (Z) axis.

use crate::model::{BladeSection, Point2D, Point3D, SweepAxis};
use nalgebra::{Rotation3, Vector3};

/// Seed of the pitch-axis guide rail.
pub fn pitch_axis_seed() -> Point2D {
    Point2D::new(0.0, 0.0)
}

/// Seed of the trailing-edge guide rail.
pub fn trailing_edge_seed() -> Point2D {
    Point2D::new(1.0, 0.0)
}

/// Scale, translation and rotation of one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionFrame {
    chord: f64,
    translation: Vector3<f64>,
    rotation: Rotation3<f64>,
}

impl SectionFrame {
    /// Build the frame of a section.
    pub fn new(section: &BladeSection) -> Self {
        let chord = section.chord_length;
        Self {
            chord,
            translation: Vector3::new(
                -chord * section.thread_axis_offset,
                section.chord_offset_cm,
                0.0,
            ),
            rotation: Rotation3::from_axis_angle(
                &Vector3::z_axis(),
                section.twist_angle.to_radians(),
            ),
        }
    }

    /// Place a chord-normalized point at height `z`.
    pub fn place(&self, point: &Point2D, z: f64) -> Point3D {
        let scaled = Point3D::new(point.x * self.chord, point.y * self.chord, z);
        self.rotation * (scaled + self.translation)
    }

    /// Place a chord-normalized point in the section's own plane (Z = 0).
    pub fn place_local(&self, point: &Point2D) -> Point3D {
        self.place(point, 0.0)
    }
}

/// Outline of a section in its own plane.
pub fn section_outline(points: &[Point2D], section: &BladeSection) -> Vec<Point3D> {
    let frame = SectionFrame::new(section);
    points.iter().map(|p| frame.place_local(p)).collect()
}

/// Point of a guide rail for one section, in blade coordinates.
pub fn guide_point(section: &BladeSection, seed: &Point2D) -> Point3D {
    SectionFrame::new(section).place(seed, section.position_along_span)
}

/// Guide rail through `seed` of every section, in blade coordinates.
pub fn guide_rail(sections: &[BladeSection], seed: &Point2D) -> Vec<Point3D> {
    sections.iter().map(|s| guide_point(s, seed)).collect()
}

/// Straight spanwise line from the first to the last section.
pub fn sweep_axis(sections: &[BladeSection]) -> Option<SweepAxis> {
    let root = sections.first()?;
    let tip = sections.last()?;
    Some(SweepAxis {
        root: Point3D::new(0.0, 0.0, root.position_along_span),
        tip: Point3D::new(0.0, 0.0, tip.position_along_span),
    })
}
