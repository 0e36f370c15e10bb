//! JSON document sink for blade geometry.
//!
//! Writes what a modeling kernel would receive, so an external CAD script can
//! rebuild the blade without linking this crate.

use serde::Serialize;

use super::kernel::{emit_geometry, GeometryKernel};
use crate::error::{ImportError, Result};
use crate::model::{BladeGeometry, GuideRail, KernelOptions, PlacedSection, SweepAxis};

/// Everything a kernel received during one emission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KernelDocument {
    pub sections: Vec<PlacedSection>,
    pub rails: Vec<GuideRail>,
    pub sweep_axis: Option<SweepAxis>,
    pub options: Option<KernelOptions>,
}

/// Kernel that records calls into a [`KernelDocument`].
#[derive(Debug, Default)]
pub struct JsonKernel {
    document: KernelDocument,
    finished: bool,
}

impl JsonKernel {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded document.
    pub fn document(&self) -> &KernelDocument {
        &self.document
    }

    /// Check if `finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Serialize the recorded document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.document).map_err(|e| ImportError::Kernel {
            message: format!("Failed to serialize geometry: {}", e),
        })
    }
}

impl GeometryKernel for JsonKernel {
    fn add_section(&mut self, section: &PlacedSection) -> Result<()> {
        self.document.sections.push(section.clone());
        Ok(())
    }

    fn add_rail(&mut self, rail: &GuideRail) -> Result<()> {
        if rail.points.len() < 2 {
            return Err(ImportError::Kernel {
                message: format!("{:?} rail needs at least 2 points", rail.kind),
            });
        }
        self.document.rails.push(rail.clone());
        Ok(())
    }

    fn add_sweep_axis(&mut self, axis: &SweepAxis) -> Result<()> {
        self.document.sweep_axis = Some(*axis);
        Ok(())
    }

    fn finish(&mut self, options: &KernelOptions) -> Result<()> {
        self.document.options = Some(*options);
        self.finished = true;
        Ok(())
    }
}

/// Emit `geometry` into a fresh [`JsonKernel`] and serialize it.
pub fn generate_json(geometry: &BladeGeometry) -> Result<String> {
    let mut kernel = JsonKernel::new();
    emit_geometry(geometry, &mut kernel)?;
    kernel.to_json()
}
