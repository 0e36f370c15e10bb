//! Output generation for the modeling kernel.

mod json;
mod kernel;
mod summary;

pub use json::{generate_json, JsonKernel, KernelDocument};
pub use kernel::{emit_geometry, GeometryKernel};
pub use summary::Summary;
