use crate::cli::CheckDistanceArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::utils::paths::{resolve_format, resolve_mapping};
use lmekit::workflows::check_distance::{self, DistanceCheckConfig};
use tracing::info;

pub fn run(args: CheckDistanceArgs, settings: &Settings) -> Result<()> {
    let config = DistanceCheckConfig {
        format: resolve_format(args.format.as_deref(), &args.input, "input")?,
        mapping: resolve_mapping(args.mapping.as_deref(), &args.input),
        input: args.input,
        atom_a: args.atom_a,
        atom_b: args.atom_b,
        min: args.min,
        max: args.max,
    };
    config.validate()?;

    let report = check_distance::run(&config, &settings.toolkit())?;
    info!(
        "'{}' ({}) to '{}' ({}) measured {:.4} Å.",
        config.atom_a, report.atoms[0], config.atom_b, report.atoms[1], report.distance
    );
    println!("{:.6}", report.distance);
    Ok(())
}
