//! Hand-off of finished blade geometry to a solid-modeling kernel.

use crate::error::Result;
use crate::model::{BladeGeometry, GuideRail, KernelOptions, PlacedSection, SweepAxis};

/// Receiver of blade geometry.
///
/// Implementations build planes, sketches, splines, lofts and sweeps from
/// the point sequences. Calls arrive in a fixed order: every section root to
/// tip, then every rail, then the sweep axis, then `finish` once.
pub trait GeometryKernel {
    /// A kept section: plane offset, outlines and guide points.
    fn add_section(&mut self, section: &PlacedSection) -> Result<()>;

    /// A guide rail through all kept sections.
    fn add_rail(&mut self, rail: &GuideRail) -> Result<()>;

    /// The spanwise sweep path.
    fn add_sweep_axis(&mut self, axis: &SweepAxis) -> Result<()>;

    /// All geometry delivered; build the solid.
    fn finish(&mut self, options: &KernelOptions) -> Result<()>;
}

/// Feed a complete geometry to a kernel.
pub fn emit_geometry<K: GeometryKernel + ?Sized>(
    geometry: &BladeGeometry,
    kernel: &mut K,
) -> Result<()> {
    for section in &geometry.sections {
        kernel.add_section(section)?;
    }
    for rail in &geometry.rails {
        kernel.add_rail(rail)?;
    }
    kernel.add_sweep_axis(&geometry.sweep_axis)?;
    kernel.finish(&geometry.options)
}
