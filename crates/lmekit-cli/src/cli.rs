use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Qi Hexiang",
    version,
    about = "lmekit - Resolve named atoms and groups, and drive the chemistry toolkit steps of a molecular-modeling workflow.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output; failures are still reported
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML file configuring the external chemistry toolkit.
    #[arg(long, global = true, value_name = "PATH")]
    pub toolkit_config: Option<PathBuf>,

    /// Override the Open Babel executable used for all toolkit calls.
    #[arg(long, global = true, value_name = "PATH")]
    pub obabel: Option<PathBuf>,

    /// Override the Python interpreter that runs Open Babel minimizations.
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Set a toolkit configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S toolkit.forcefield=UFF
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve atom or group names to atom indices.
    Resolve(ResolveArgs),
    /// Inspect the tables of a mapping record.
    Mapping(MappingArgs),
    /// Fail unless the distance between two atoms lies within a window.
    CheckDistance(CheckDistanceArgs),
    /// Run a force-field geometry optimization with named constraints.
    Minimize(MinimizeArgs),
    /// Write the Gasteiger partial charges of queried atoms to a file.
    Charges(ChargesArgs),
    /// Replace a placeholder in a file with the indices of an atom or group.
    Substitute(SubstituteArgs),
    /// Write an xtb `$ffnb` neighbor-list block from an exported bond list.
    Neighbors(NeighborsArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the mapping record (`*.map.json`).
    #[arg(required = true, value_name = "MAPPING")]
    pub mapping: PathBuf,

    /// Names to resolve. Integer literals are taken as indices.
    #[arg(required = true, num_args = 1.., value_name = "NAME")]
    pub names: Vec<String>,

    /// Print 1-based indices.
    #[arg(long)]
    pub one_based: bool,

    /// Print `name i j k` lines instead of JSON.
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the `mapping` subcommand.
#[derive(Args, Debug)]
pub struct MappingArgs {
    /// Path to the mapping record (`*.map.json`).
    #[arg(required = true, value_name = "MAPPING")]
    pub mapping: PathBuf,

    /// Print plain text instead of JSON.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub view: MappingView,
}

/// Views of a mapping record.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MappingView {
    /// List the atom-id table.
    Ids,
    /// List the group table.
    Groups,
    /// Print the declared atom count.
    Size,
    /// List names defined in both the ids and groups tables.
    Collisions,
    /// Translate a source index into the internal index.
    Translate {
        #[arg(required = true)]
        index: usize,
    },
}

/// Arguments for the `check-distance` subcommand.
#[derive(Args, Debug)]
pub struct CheckDistanceArgs {
    /// Path to the input molecule.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Input format code (inferred from the extension if omitted).
    #[arg(short, long, value_name = "FMT")]
    pub format: Option<String>,

    /// Mapping record (defaults to the input's `.map.json` side-car).
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// First atom: a name or an index.
    #[arg(required = true, value_name = "A")]
    pub atom_a: String,

    /// Second atom: a name or an index.
    #[arg(required = true, value_name = "B")]
    pub atom_b: String,

    /// Smallest accepted distance in Ångström.
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min: f64,

    /// Largest accepted distance in Ångström.
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max: f64,
}

/// Arguments for the `minimize` subcommand.
#[derive(Args, Debug)]
pub struct MinimizeArgs {
    /// Path to the input molecule.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Input format code (inferred from the extension if omitted).
    #[arg(short = 'f', long, value_name = "FMT")]
    pub input_format: Option<String>,

    /// Path for the minimized structure.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Output format code (inferred from the extension if omitted).
    #[arg(short = 'F', long, value_name = "FMT")]
    pub output_format: Option<String>,

    /// Mapping record (defaults to the input's `.map.json` side-car).
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// JSON file with `ignore`, `atom`, `distance`, `angle` and `torsion` constraints.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub constraints: PathBuf,

    /// Override the force field (e.g., 'MMFF94', 'UFF').
    #[arg(long, value_name = "NAME")]
    pub forcefield: Option<String>,

    /// Override the maximum number of minimization steps.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_steps: Option<usize>,

    /// Resolve and print the constraints without minimizing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `charges` subcommand.
#[derive(Args, Debug)]
pub struct ChargesArgs {
    /// JSON list of queries; integers are source indices, strings are names.
    #[arg(short = 'Q', long, required = true, value_name = "PATH")]
    pub queries: PathBuf,

    /// Path to the input molecule.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Input format code (inferred from the extension if omitted).
    #[arg(short, long, value_name = "FMT")]
    pub format: Option<String>,

    /// Mapping record (defaults to the input's `.map.json` side-car).
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// File receiving the comma-separated charges.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `substitute` subcommand.
#[derive(Args, Debug)]
pub struct SubstituteArgs {
    /// File rewritten in place.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Placeholder text to replace.
    #[arg(short, long, required = true, value_name = "TEXT")]
    pub pattern: String,

    /// Separator placed between indices.
    #[arg(short, long, default_value = ",", value_name = "TEXT")]
    pub separator: String,

    /// Mapping record (`*.map.json`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mapping: PathBuf,

    /// Atom or group name (or an integer index).
    #[arg(required = true, value_name = "NAME")]
    pub name: String,

    /// Write 1-based indices.
    #[arg(long)]
    pub one_based: bool,
}

/// Arguments for the `neighbors` subcommand.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Structure JSON with `atoms` and `bonds` arrays.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Control file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
