use crate::cli::SubstituteArgs;
use crate::error::Result;
use lmekit::workflows::substitute::{self, SubstituteConfig};
use tracing::debug;

pub fn run(args: SubstituteArgs) -> Result<()> {
    let config = SubstituteConfig {
        input: args.input,
        pattern: args.pattern,
        separator: args.separator,
        name: args.name,
        mapping: args.mapping,
        one_based: args.one_based,
    };
    let count = substitute::run(&config)?;
    debug!("{} replacement(s) made in {:?}", count, config.input);
    Ok(())
}
