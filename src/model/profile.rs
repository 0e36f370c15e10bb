//! Airfoil outline.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Chord-normalized airfoil outline, in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirfoilProfile {
    /// Outline points.
    pub points: Vec<Point2D>,
}

impl AirfoilProfile {
    /// Create a profile from outline points.
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Number of outline points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points strictly above the chord line (y > 0), in outline order.
    pub fn upper_side(&self) -> Vec<Point2D> {
        self.points.iter().filter(|p| p.y > 0.0).copied().collect()
    }

    /// Points strictly below the chord line (y < 0), in outline order.
    pub fn lower_side(&self) -> Vec<Point2D> {
        self.points.iter().filter(|p| p.y < 0.0).copied().collect()
    }

    /// Check if the first and last points coincide within `tol`.
    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                nalgebra::distance(first, last) <= tol
            }
            _ => false,
        }
    }
}
