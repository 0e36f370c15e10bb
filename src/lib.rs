//! qblade-import - Turn QBlade blade definitions into blade section geometry.
//!
//! This library reads a QBlade blade file (v0.963 or CE v2.x layout) and a
//! single airfoil coordinate file, and produces the point sequences a
//! solid-modeling kernel needs to build the blade: one placed outline per
//! kept spanwise section, guide rails through the pitch axis and trailing
//! edge, infill rails, and a sweep axis.
//!
//! # Example
//!
//! ```no_run
//! use qblade_import::{generate_json, import_blade, ImportOptions, ProfileCache};
//! use std::path::Path;
//!
//! let cache = ProfileCache::new();
//! let geometry = import_blade(
//!     Path::new("blade.bld"),
//!     Path::new("naca4412.dat"),
//!     &ImportOptions::default(),
//!     &cache,
//! )
//! .unwrap();
//! println!("{}", generate_json(&geometry).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::ImportOptions;
pub use error::{ErrorCode, ImportError, Result};
pub use generator::{emit_geometry, generate_json, GeometryKernel, JsonKernel, Summary};
pub use model::{
    AirfoilProfile, BladeFormat, BladeGeometry, BladeSection, GuideRail, ImportReport,
    KernelOptions, PlacedSection, Point2D, Point3D, ProfileTag, RailKind, SweepAxis,
};
pub use parser::{parse_blade_file, parse_profile_file, ParsedBlade, ProfileCache};
pub use validation::{validate_inputs, ValidationResult};

use std::path::Path;
use tracing::{debug, error, info, warn};

/// Pipeline stage, reported to an [`ImportObserver`] as it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    ParseProfile,
    ParseBlade,
    Calibrate,
    ZeroHub,
    Merge,
    Reduce,
    Transform,
    Done,
}

/// Progress listener. It only observes; it cannot alter the import.
pub trait ImportObserver {
    fn on_stage(&mut self, _stage: ImportStage) {}
}

impl ImportObserver for () {}

/// Import a blade.
///
/// Performs the full pipeline:
/// 1. Load the airfoil (through `cache`)
/// 2. Parse the blade file
/// 3. Calibrate the pitch offset from the airfoil thickness
/// 4. Optionally move the hub to zero
/// 5. Merge near-duplicate sections
/// 6. Simplify the airfoil for auxiliary curves
/// 7. Place outlines and rails
///
/// Any failure aborts the whole import; no partial geometry is returned.
pub fn import_blade(
    blade_path: &Path,
    profile_path: &Path,
    options: &ImportOptions,
    cache: &ProfileCache,
) -> Result<BladeGeometry> {
    import_blade_with(blade_path, profile_path, options, cache, &mut ())
}

/// Same as [`import_blade`], reporting stages to `observer`.
pub fn import_blade_with(
    blade_path: &Path,
    profile_path: &Path,
    options: &ImportOptions,
    cache: &ProfileCache,
    observer: &mut dyn ImportObserver,
) -> Result<BladeGeometry> {
    options.validate()?;

    observer.on_stage(ImportStage::ParseProfile);
    let profile = cache.load(profile_path)?;

    observer.on_stage(ImportStage::ParseBlade);
    let parsed = parse_blade_file(blade_path)?;
    info!(
        "Parsed {} section(s) from {} ({} format)",
        parsed.sections.len(),
        blade_path.display(),
        parsed.format
    );

    build_geometry(parsed, &profile, options, observer)
}

/// Run the geometric stages on already parsed inputs.
pub fn build_geometry(
    parsed: ParsedBlade,
    profile: &AirfoilProfile,
    options: &ImportOptions,
    observer: &mut dyn ImportObserver,
) -> Result<BladeGeometry> {
    let ParsedBlade {
        format,
        mut sections,
        skipped_rows,
        discarded_placeholders,
        main_profile,
    } = parsed;

    if sections.len() < 2 {
        return Err(ImportError::TooFewSections {
            found: sections.len(),
        });
    }

    if skipped_rows > 0 {
        warn!("Skipped {} unreadable blade row(s)", skipped_rows);
    }

    let validation = validate_inputs(&sections, profile);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    for err in &validation.errors {
        error!("{}", err);
    }

    observer.on_stage(ImportStage::Calibrate);
    let calibration = transform::calibrate_sections(&mut sections, profile)?;
    info!("Offset fraction: {:.6}", calibration.offset_fraction);

    if options.zero_hub {
        observer.on_stage(ImportStage::ZeroHub);
        transform::zero_hub(&mut sections);
    }

    observer.on_stage(ImportStage::Merge);
    let retained = transform::merge_sections(&sections);
    let kept = retained.select(&sections);
    debug!(
        "Keeping {} of {} section(s): {:?}",
        retained.len(),
        sections.len(),
        retained.indices
    );

    observer.on_stage(ImportStage::Reduce);
    let reduced = transform::simplify(&profile.points, options.simplification_tolerance);
    debug!(
        "Simplified airfoil from {} to {} point(s)",
        profile.len(),
        reduced.len()
    );

    observer.on_stage(ImportStage::Transform);
    let pitch_seed = transform::pitch_axis_seed();
    let trailing_seed = transform::trailing_edge_seed();

    let placed: Vec<PlacedSection> = retained
        .indices
        .iter()
        .zip(&kept)
        .map(|(&source_index, section)| PlacedSection {
            source_index,
            span_position: section.position_along_span,
            outline: transform::section_outline(&profile.points, section),
            auxiliary_outline: transform::section_outline(&reduced, section),
            pitch_axis_point: transform::guide_point(section, &pitch_seed),
            trailing_edge_point: transform::guide_point(section, &trailing_seed),
        })
        .collect();

    let infill = transform::infill_rails(&placed, options.shell_thickness_mm)?;
    let rails = vec![
        GuideRail {
            kind: RailKind::PitchAxis,
            points: transform::guide_rail(&kept, &pitch_seed),
        },
        GuideRail {
            kind: RailKind::TrailingEdge,
            points: transform::guide_rail(&kept, &trailing_seed),
        },
        GuideRail {
            kind: RailKind::InfillLeft,
            points: infill.left,
        },
        GuideRail {
            kind: RailKind::InfillRight,
            points: infill.right,
        },
    ];

    let sweep_axis =
        transform::sweep_axis(&sections).ok_or(ImportError::TooFewSections { found: 0 })?;

    let report = ImportReport {
        format,
        skipped_rows,
        discarded_placeholders,
        main_profile,
        offset_fraction: calibration.offset_fraction,
        sections_parsed: sections.len(),
        sections_kept: placed.len(),
        profile_points: profile.len(),
        auxiliary_points: reduced.len(),
    };

    observer.on_stage(ImportStage::Done);
    info!(
        "Placed {} section(s), sweep length {:.3} cm",
        placed.len(),
        sweep_axis.length()
    );

    Ok(BladeGeometry {
        sections: placed,
        rails,
        sweep_axis,
        options: KernelOptions {
            center_by_mass: options.center_by_mass,
            shell_thickness_mm: options.shell_thickness_mm,
        },
        report,
    })
}
