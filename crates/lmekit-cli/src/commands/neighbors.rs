use crate::cli::NeighborsArgs;
use crate::error::Result;
use lmekit::workflows::neighbors::{self, NeighborsConfig};

pub fn run(args: NeighborsArgs) -> Result<()> {
    let config = NeighborsConfig {
        input: args.input,
        output: args.output,
    };
    neighbors::run(&config)?;
    Ok(())
}
