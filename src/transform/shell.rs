//! Shell offset and infill rails.

use geo::orient::{Direction, Orient};
use geo::{LineString, MultiPolygon, Polygon, RemoveRepeatedPoints};
use geo_buf::buffer_polygon;

use crate::config::MM_TO_CM;
use crate::error::{ImportError, Result};
use crate::model::{PlacedSection, Point3D};

/// Point with the smallest x. The first one wins on ties.
pub fn leftmost_point(points: &[Point3D]) -> Option<Point3D> {
    let mut iter = points.iter();
    let mut best = *iter.next()?;
    for p in iter {
        if p.x < best.x {
            best = *p;
        }
    }
    Some(best)
}

/// Point with the largest x. The first one wins on ties.
pub fn rightmost_point(points: &[Point3D]) -> Option<Point3D> {
    let mut iter = points.iter();
    let mut best = *iter.next()?;
    for p in iter {
        if p.x > best.x {
            best = *p;
        }
    }
    Some(best)
}

/// Shrink a plane-local outline by `distance` (cm) with mitred corners.
///
/// The outline is treated as a closed ring and a non-positive distance keeps
/// it as is. Returns every vertex of the offset region at height `z`, or
/// nothing when the wall consumes the section.
pub fn inner_outline(outline: &[Point3D], distance: f64, z: f64) -> Vec<Point3D> {
    if distance <= 0.0 {
        return outline.iter().map(|p| Point3D::new(p.x, p.y, z)).collect();
    }

    let ring: LineString<f64> = outline.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into();
    let polygon = Polygon::new(ring, vec![])
        .remove_repeated_points()
        .orient(Direction::Default);

    let inner: MultiPolygon<f64> = buffer_polygon(&polygon, -distance);
    inner
        .iter()
        .flat_map(|poly| poly.exterior().coords())
        .map(|c| Point3D::new(c.x, c.y, z))
        .collect()
}

/// Left and right rails bounding the inner (infill) volume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfillRails {
    pub left: Vec<Point3D>,
    pub right: Vec<Point3D>,
}

/// Trace the chordwise extremes of every section's auxiliary outline after
/// the shell wall has been taken off.
pub fn infill_rails(sections: &[PlacedSection], shell_thickness_mm: f64) -> Result<InfillRails> {
    let wall = shell_thickness_mm * MM_TO_CM;
    let mut rails = InfillRails::default();

    for section in sections {
        let inner = inner_outline(&section.auxiliary_outline, wall, section.span_position);

        let (Some(l), Some(r)) = (leftmost_point(&inner), rightmost_point(&inner)) else {
            return Err(ImportError::InvalidOption {
                name: "shell_thickness_mm".to_string(),
                value: format!(
                    "{} (no infill left in section {})",
                    shell_thickness_mm, section.source_index
                ),
            });
        };
        rails.left.push(l);
        rails.right.push(r);
    }

    Ok(rails)
}
