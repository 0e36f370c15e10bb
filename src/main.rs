//! qblade-import - CLI tool to convert QBlade blades into section geometry.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use qblade_import::config::{DEFAULT_SHELL_THICKNESS_MM, DEFAULT_SIMPLIFICATION_TOLERANCE};
use qblade_import::{
    generate_json, import_blade_with, parse_blade_file, validate_inputs, ImportObserver,
    ImportOptions, ImportStage, ProfileCache, Summary,
};

/// Convert QBlade blade definitions into blade section geometry.
#[derive(Parser, Debug)]
#[command(name = "qblade-import")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Blade definition file (QBlade v0.963 or CE v2.x)
    #[arg(short, long)]
    blade: PathBuf,

    /// Airfoil coordinate file
    #[arg(short, long)]
    profile: PathBuf,

    /// Output geometry JSON path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Simplification tolerance for auxiliary outlines
    #[arg(short, long, default_value_t = DEFAULT_SIMPLIFICATION_TOLERANCE)]
    tolerance: f64,

    /// Shift span positions so the hub sits at zero
    #[arg(long)]
    zero_hub: bool,

    /// Center the finished solid on its center of mass
    #[arg(long)]
    center_by_mass: bool,

    /// Shell wall thickness in millimeters
    #[arg(long, default_value_t = DEFAULT_SHELL_THICKNESS_MM)]
    shell_thickness: f64,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output parsed sections as JSON
    #[arg(long)]
    debug: bool,

    /// Print a text summary of the import
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Logs each pipeline stage at debug level.
struct StageLogger;

impl ImportObserver for StageLogger {
    fn on_stage(&mut self, stage: ImportStage) {
        debug!("Stage: {:?}", stage);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let options = ImportOptions {
        simplification_tolerance: args.tolerance,
        zero_hub: args.zero_hub,
        center_by_mass: args.center_by_mass,
        shell_thickness_mm: args.shell_thickness,
    };
    options.validate()?;

    info!("Processing: {}", args.blade.display());

    let cache = ProfileCache::new();

    if args.debug || args.validate {
        let parsed = parse_blade_file(&args.blade)
            .with_context(|| format!("Failed to parse {}", args.blade.display()))?;
        let profile = cache
            .load(&args.profile)
            .with_context(|| format!("Failed to parse {}", args.profile.display()))?;

        info!(
            "Parsed {} section(s), {} airfoil point(s)",
            parsed.sections.len(),
            profile.len()
        );
        if parsed.skipped_rows > 0 {
            warn!("Skipped {} unreadable row(s)", parsed.skipped_rows);
        }

        let validation = validate_inputs(&parsed.sections, &profile);
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        for err in &validation.errors {
            error!("{}", err);
        }
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }

        // Debug output
        if args.debug {
            let json = serde_json::to_string_pretty(&parsed.sections)?;
            println!("{}", json);
            return Ok(());
        }

        info!("Validation passed");
        return Ok(());
    }

    let geometry = import_blade_with(
        &args.blade,
        &args.profile,
        &options,
        &cache,
        &mut StageLogger,
    )
    .with_context(|| format!("Failed to import {}", args.blade.display()))?;

    if args.summary {
        print!("{}", Summary::new(&geometry));
    }

    let json = generate_json(&geometry)?;

    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.blade.clone();
        path.set_extension("json");
        path
    });

    std::fs::write(&output_path, &json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
