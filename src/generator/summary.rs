//! Plain-text import summary.

use std::fmt;

use crate::model::BladeGeometry;

/// Human-readable report of an import, printed with `{}`.
pub struct Summary<'a> {
    geometry: &'a BladeGeometry,
}

impl<'a> Summary<'a> {
    pub fn new(geometry: &'a BladeGeometry) -> Self {
        Self { geometry }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.geometry;
        let r = &g.report;

        writeln!(f, "; Format: {}", r.format)?;
        if let Some(main) = &r.main_profile {
            writeln!(f, "; Main profile: {}", main)?;
        }
        writeln!(
            f,
            "; Sections: {} parsed, {} kept, {} row(s) skipped, {} placeholder(s) dropped",
            r.sections_parsed, r.sections_kept, r.skipped_rows, r.discarded_placeholders
        )?;
        writeln!(f, "; Offset fraction: {:.6}", r.offset_fraction)?;
        writeln!(
            f,
            "; Airfoil: {} points, {} after simplification",
            r.profile_points, r.auxiliary_points
        )?;
        writeln!(
            f,
            "; Sweep axis: z={:.3} .. z={:.3} ({:.3} cm)",
            g.sweep_axis.root.z,
            g.sweep_axis.tip.z,
            g.sweep_axis.length()
        )?;

        writeln!(f, "{:>5} {:>10} {:>10} {:>10}", "IDX", "Z[cm]", "PITCH_X", "PITCH_Y")?;
        for s in &g.sections {
            writeln!(
                f,
                "{:>5} {:>10.3} {:>10.3} {:>10.3}",
                s.source_index, s.span_position, s.pitch_axis_point.x, s.pitch_axis_point.y
            )?;
        }

        for rail in &g.rails {
            let style = if rail.kind.is_interpolated() {
                "spline"
            } else {
                "polyline"
            };
            writeln!(f, "; Rail {:?}: {} points ({})", rail.kind, rail.points.len(), style)?;
        }

        if g.options.center_by_mass {
            writeln!(f, "; Center by mass requested")?;
        }
        Ok(())
    }
}
