use phf::{Map, phf_map};
use std::path::Path;

/// File extensions mapped to the format codes understood by the toolkit.
static EXTENSION_FORMATS: Map<&'static str, &'static str> = phf_map! {
    "mol2" => "mol2",
    "ml2" => "mol2",
    "sy2" => "mol2",
    "xyz" => "xyz",
    "pdb" => "pdb",
    "ent" => "pdb",
    "sdf" => "sdf",
    "sd" => "sdf",
    "mol" => "mol",
    "mdl" => "mol",
    "cif" => "cif",
    "mmcif" => "mmcif",
    "cml" => "cml",
    "gjf" => "gjf",
    "gau" => "gjf",
    "com" => "com",
    "mop" => "mop",
    "gro" => "gro",
    "car" => "car",
    "bgf" => "bgf",
    "smi" => "smi",
    "smiles" => "smi",
};

/// Infers the toolkit format code from a path's extension, case-insensitively.
pub fn infer_format(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_FORMATS.get(ext.as_str()).copied()
}
