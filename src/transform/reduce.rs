//! Ramer-Douglas-Peucker polyline simplification.

use crate::config::MAX_SIMPLIFY_DEPTH;
use crate::model::Point2D;

/// Simplify a polyline, dropping points closer than `tolerance` to the
/// chord of their span.
///
/// For a closed polyline (first point equal to last) the baseline runs from
/// the first point to the second-to-last one, so it never has zero length.
pub fn simplify(line: &[Point2D], tolerance: f64) -> Vec<Point2D> {
    simplify_at_depth(line, tolerance * tolerance, 0)
}

fn simplify_at_depth(line: &[Point2D], tol_sq: f64, depth: usize) -> Vec<Point2D> {
    let n = line.len();
    if n < 3 || depth >= MAX_SIMPLIFY_DEPTH {
        return line.to_vec();
    }

    let (begin, end) = if line[0] != line[n - 1] {
        (line[0], line[n - 1])
    } else {
        (line[0], line[n - 2])
    };

    let mut max_sq = f64::NEG_INFINITY;
    let mut max_pos = 0;
    for (pos, point) in line[1..n - 1].iter().enumerate() {
        let d = distance_sq_to_line(point, &begin, &end);
        if d > max_sq {
            max_sq = d;
            max_pos = pos;
        }
    }

    if max_sq < tol_sq {
        return vec![begin, end];
    }

    let split = max_pos + 1;
    let mut result = simplify_at_depth(&line[..=split], tol_sq, depth + 1);
    let tail = simplify_at_depth(&line[split..], tol_sq, depth + 1);
    result.extend_from_slice(&tail[1..]);
    result
}

/// Squared distance from `point` to the infinite line through `begin` and `end`.
pub fn distance_sq_to_line(point: &Point2D, begin: &Point2D, end: &Point2D) -> f64 {
    let along = end - begin;
    let offset = point - begin;
    let len_sq = along.norm_squared();

    if len_sq == 0.0 {
        return offset.norm_squared();
    }

    let projection = along.dot(&offset);
    offset.norm_squared() - projection * projection / len_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    fn airfoil() -> Vec<Point2D> {
        // Coarse cambered outline, trailing edge to trailing edge
        pts(&[
            (1.0, 0.0),
            (0.9, 0.02),
            (0.75, 0.05),
            (0.5, 0.08),
            (0.3, 0.085),
            (0.15, 0.07),
            (0.05, 0.04),
            (0.0, 0.0),
            (0.05, -0.025),
            (0.15, -0.035),
            (0.3, -0.035),
            (0.5, -0.025),
            (0.75, -0.012),
            (0.9, -0.005),
            (1.0, 0.0),
        ])
    }

    #[test]
    fn test_collinear_collapse() {
        let line = pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        assert_eq!(simplify(&line, 0.5), pts(&[(0.0, 0.0), (0.0, 2.0)]));
    }

    #[test]
    fn test_short_lines_unchanged() {
        assert_eq!(simplify(&[], 1.0), vec![]);
        let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(simplify(&two, 10.0), two);
    }

    #[test]
    fn test_keeps_corner() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.01), (2.0, 0.0), (2.0, 1.0), (2.0, 2.0)]);
        assert_eq!(
            simplify(&line, 0.1),
            pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)])
        );
    }

    #[test]
    fn test_zero_tolerance_keeps_off_line_points() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.5), (2.0, 0.0)]);
        assert_eq!(simplify(&line, 0.0), line);
    }

    #[test]
    fn test_closed_outline_uses_second_to_last_baseline() {
        // Square traced back to its start
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        let reduced = simplify(&square, 0.1);
        assert_eq!(reduced.first(), Some(&Point2D::new(0.0, 0.0)));
        assert_eq!(reduced.last(), Some(&Point2D::new(0.0, 0.0)));
        assert_eq!(reduced.len(), 5);
    }

    #[test]
    fn test_degenerate_closed_line() {
        let line = pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&line, 0.1), pts(&[(0.0, 0.0), (0.0, 0.0)]));
    }

    #[test]
    fn test_airfoil_never_grows_and_keeps_endpoints() {
        let outline = airfoil();
        for tol in [0.0, 0.001, 0.005, 0.02, 0.1, 1.0] {
            let reduced = simplify(&outline, tol);
            assert!(reduced.len() <= outline.len());
            assert_eq!(reduced.first(), outline.first());
            // A fully collapsed closed outline ends on its second-to-last point,
            // but the closing point is the same as the first one.
            assert!(reduced.contains(&outline[outline.len() - 1]));
        }
    }

    #[test]
    fn test_closed_outline_collapse_ends_on_baseline() {
        let outline = airfoil();
        let reduced = simplify(&outline, 1.0);
        assert_eq!(reduced, vec![outline[0], outline[outline.len() - 2]]);
    }

    #[test]
    fn test_idempotent_on_open_polylines() {
        let upper: Vec<Point2D> = airfoil()[..8].to_vec();
        let wave: Vec<Point2D> = (0..40)
            .map(|i| {
                let x = i as f64 * 0.1;
                Point2D::new(x, (x * 3.0).sin() * 0.2)
            })
            .collect();

        for line in [upper, wave] {
            for tol in [0.001, 0.01, 0.05, 0.3] {
                let once = simplify(&line, tol);
                let twice = simplify(&once, tol);
                assert_eq!(once, twice);
                assert_eq!(once.first(), line.first());
                assert_eq!(once.last(), line.last());
            }
        }
    }

    #[test]
    fn test_idempotent_on_closed_outline() {
        let outline = airfoil();
        for tol in [0.001, 0.002, 0.005, 0.01, 0.02, 0.03, 0.05, 0.075, 0.1] {
            let once = simplify(&outline, tol);
            let twice = simplify(&once, tol);
            assert_eq!(once, twice, "tolerance {}", tol);
            // Still closed: the closing point survives the second-to-last baseline.
            assert_eq!(once.first(), outline.first());
            assert_eq!(once.last(), outline.last());
        }
        assert_eq!(simplify(&outline, 0.01).len(), 10);
        assert_eq!(simplify(&outline, 0.1).len(), 4);
    }

    #[test]
    fn test_distance_sq_to_line() {
        let begin = Point2D::new(0.0, 0.0);
        let end = Point2D::new(2.0, 0.0);
        assert!((distance_sq_to_line(&Point2D::new(1.0, 3.0), &begin, &end) - 9.0).abs() < 1e-12);
        // Beyond the segment still measures to the infinite line
        assert!((distance_sq_to_line(&Point2D::new(5.0, 1.0), &begin, &end) - 1.0).abs() < 1e-12);
        // Zero-length baseline falls back to point distance
        assert!((distance_sq_to_line(&Point2D::new(3.0, 4.0), &begin, &begin) - 25.0).abs() < 1e-12);
    }
}
