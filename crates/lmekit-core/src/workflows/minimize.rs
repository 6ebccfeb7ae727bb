use super::error::WorkflowError;
use super::files::{read_json, require_non_empty};
use crate::core::mapping::{MappingRecord, NameResolver, Query};
use crate::core::models::molecule::Molecule;
use crate::toolkit::{
    AngleConstraint, ConstraintSet, DistanceConstraint, ForceFieldEngine, MinimizationRequest,
    MoleculeStore, TorsionConstraint,
};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Constraints as written by hand, with symbolic atom references.
///
/// A `null` target means "keep the value measured on the input geometry".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintSpec {
    #[serde(default)]
    pub ignore: Vec<Query>,
    #[serde(default)]
    pub atom: Vec<Query>,
    #[serde(default)]
    pub distance: Vec<(Query, Query, Option<f64>)>,
    #[serde(default)]
    pub angle: Vec<(Query, Query, Query, Option<f64>)>,
    #[serde(default)]
    pub torsion: Vec<(Query, Query, Query, Query, Option<f64>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeConfig {
    pub forcefield: String,
    pub input: PathBuf,
    pub input_format: String,
    pub output: PathBuf,
    pub output_format: String,
    pub mapping: PathBuf,
    pub constraints: PathBuf,
    pub max_steps: usize,
    /// Resolve the constraints and stop before calling the force field.
    pub dry_run: bool,
}

impl MinimizeConfig {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        require_non_empty(&self.forcefield, "forcefield")?;
        require_non_empty(&self.input_format, "input_format")?;
        require_non_empty(&self.output_format, "output_format")?;
        if self.max_steps == 0 {
            return Err(WorkflowError::Config(
                "`max_steps` must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeReport {
    pub constraints: ConstraintSet,
    /// The written structure, `None` on a dry run.
    pub output: Option<PathBuf>,
}

/// Turns symbolic constraints into index constraints against `molecule`.
///
/// `ignore` and `atom` entries may name groups and are flattened; geometric
/// constraints need single atoms. Missing targets are measured on `molecule`,
/// and every index has to name one of its atoms.
pub fn resolve_constraints(
    spec: &ConstraintSpec,
    resolver: &NameResolver<'_>,
    molecule: &Molecule,
) -> Result<ConstraintSet, WorkflowError> {
    let flatten = |queries: &[Query]| -> Result<Vec<usize>, WorkflowError> {
        let mut indices = Vec::new();
        for query in queries {
            indices.extend(resolver.resolve_reference(query)?);
        }
        Ok(indices)
    };
    let atom = |query: &Query| resolver.resolve_reference_atom(query);

    let mut set = ConstraintSet {
        ignore: flatten(&spec.ignore)?,
        fixed: flatten(&spec.atom)?,
        ..ConstraintSet::default()
    };

    for (a, b, target) in &spec.distance {
        let atoms = [atom(a)?, atom(b)?];
        let target = match target {
            Some(value) => *value,
            None => molecule.distance(atoms[0], atoms[1])?,
        };
        set.distances.push(DistanceConstraint { atoms, target });
    }

    for (a, b, c, target) in &spec.angle {
        let atoms = [atom(a)?, atom(b)?, atom(c)?];
        let target = match target {
            Some(value) => *value,
            None => molecule.angle(atoms[0], atoms[1], atoms[2])?,
        };
        set.angles.push(AngleConstraint { atoms, target });
    }

    for (a, b, c, d, target) in &spec.torsion {
        let atoms = [atom(a)?, atom(b)?, atom(c)?, atom(d)?];
        let target = match target {
            Some(value) => *value,
            None => molecule.torsion(atoms[0], atoms[1], atoms[2], atoms[3])?,
        };
        set.torsions.push(TorsionConstraint { atoms, target });
    }

    for index in set.atoms() {
        molecule.atom(index)?;
    }
    Ok(set)
}

pub fn run<T>(config: &MinimizeConfig, toolkit: &T) -> Result<MinimizeReport, WorkflowError>
where
    T: MoleculeStore + ForceFieldEngine,
{
    config.validate()?;

    let mapping = MappingRecord::load(&config.mapping)?;
    let spec: ConstraintSpec = read_json(&config.constraints)?;
    let molecule = toolkit.read(&config.input_format, &config.input)?;
    debug!("Read {} atom(s) from {:?}", molecule.len(), config.input);

    let constraints = resolve_constraints(&spec, &mapping.resolver(), &molecule)?;
    info!(
        "Resolved {} constraint(s): {} ignored, {} fixed, {} distance, {} angle, {} torsion.",
        constraints.len(),
        constraints.ignore.len(),
        constraints.fixed.len(),
        constraints.distances.len(),
        constraints.angles.len(),
        constraints.torsions.len()
    );

    if config.dry_run {
        info!("Dry run requested; skipping minimization.");
        return Ok(MinimizeReport {
            constraints,
            output: None,
        });
    }

    let request = MinimizationRequest {
        input: &config.input,
        input_format: &config.input_format,
        output: &config.output,
        output_format: &config.output_format,
        forcefield: &config.forcefield,
        constraints: &constraints,
        max_steps: config.max_steps,
    };
    info!(
        "Minimizing with {} for at most {} step(s).",
        config.forcefield, config.max_steps
    );
    let minimized = toolkit.minimize(&request)?;
    if minimized.len() != molecule.len() {
        warn!(
            "Minimized structure has {} atom(s), the input had {}.",
            minimized.len(),
            molecule.len()
        );
    }
    info!("Minimized structure written to {:?}", config.output);

    Ok(MinimizeReport {
        constraints,
        output: Some(config.output.clone()),
    })
}
