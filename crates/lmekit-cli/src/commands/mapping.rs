use crate::cli::{MappingArgs, MappingView};
use crate::error::{CliError, Result};
use lmekit::core::mapping::{MappingRecord, render_indices};
use serde::Serialize;
use tracing::info;

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CliError::Other(e.into()))
}

/// Renders one view of a mapping record. Scalar views are always JSON.
pub fn render(mapping: &MappingRecord, view: MappingView, plain: bool) -> Result<String> {
    match view {
        MappingView::Ids if plain => Ok(mapping
            .ids
            .iter()
            .map(|(name, index)| format!("{} {}", name, index))
            .collect::<Vec<_>>()
            .join("\n")),
        MappingView::Ids => to_json(&mapping.ids),
        MappingView::Groups if plain => Ok(mapping
            .groups
            .iter()
            .map(|(name, indices)| format!("{} {}", name, render_indices(indices, " ", false)))
            .collect::<Vec<_>>()
            .join("\n")),
        MappingView::Groups => to_json(&mapping.groups),
        MappingView::Size => to_json(&mapping.len),
        MappingView::Collisions if plain => Ok(mapping.collisions().join("\n")),
        MappingView::Collisions => to_json(&mapping.collisions()),
        MappingView::Translate { index } => to_json(&mapping.translate(index)),
    }
}

pub fn run(args: MappingArgs) -> Result<()> {
    info!("Inspecting {:?} ({:?})", args.mapping, args.view);
    let mapping = MappingRecord::load(&args.mapping)?;
    println!("{}", render(&mapping, args.view, args.plain)?);
    Ok(())
}
