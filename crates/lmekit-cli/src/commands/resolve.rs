use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use lmekit::core::mapping::MappingRecord;
use lmekit::workflows::WorkflowError;
use lmekit::workflows::resolve::{render_json, render_plain, resolve_names};
use tracing::info;

pub fn run(args: ResolveArgs) -> Result<()> {
    info!("Resolving {} name(s) against {:?}", args.names.len(), args.mapping);
    let mapping = MappingRecord::load(&args.mapping)?;
    let resolutions = resolve_names(&mapping, &args.names).map_err(WorkflowError::from)?;

    let output = if args.plain {
        render_plain(&resolutions, args.one_based)
    } else {
        render_json(&resolutions, args.one_based).map_err(|e| CliError::Other(e.into()))?
    };
    println!("{}", output);
    Ok(())
}
