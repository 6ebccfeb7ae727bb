use crate::cli::ChargesArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::utils::paths::{resolve_format, resolve_mapping};
use lmekit::workflows::charges::{self, ChargesConfig};
use tracing::info;

pub fn run(args: ChargesArgs, settings: &Settings) -> Result<()> {
    let config = ChargesConfig {
        format: resolve_format(args.format.as_deref(), &args.input, "input")?,
        mapping: resolve_mapping(args.mapping.as_deref(), &args.input),
        queries: args.queries,
        input: args.input,
        output: args.output,
    };
    config.validate()?;

    let selected = charges::run(&config, &settings.toolkit())?;
    info!("Extracted {} Gasteiger charge(s).", selected.len());
    Ok(())
}
