//! Open Babel backend.
//!
//! Conversions and charges are single `obabel` invocations whose stdout is a
//! mol2 document. Minimization needs the force-field constraint interface, which
//! the `obabel` program does not expose, so it runs a small driver against the
//! Open Babel Python bindings. The driver receives the job as JSON on stdin,
//! writes the output file from the molecule it read and prints the minimized
//! coordinates as XYZ.

use super::{
    ChargeEngine, ConstraintSet, ForceFieldEngine, MinimizationRequest, MoleculeStore,
    ToolkitError,
};
use crate::core::io::mol2::{self, Mol2File};
use crate::core::io::traits::MolecularFile;
use crate::core::io::xyz::XyzFile;
use crate::core::models::molecule::Molecule;
use phf::{Set, phf_set};
use serde::Serialize;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

const DEFAULT_PROGRAM: &str = "obabel";
const DEFAULT_PYTHON: &str = "python3";
const CHARGE_MODEL: &str = "gasteiger";
const MINIMIZE_DRIVER: &str = include_str!("ob_minimize.py");

/// Force fields shipped with Open Babel, lower-cased.
static FORCEFIELDS: Set<&'static str> = phf_set! {
    "gaff", "ghemical", "mmff94", "mmff94s", "uff",
};

pub fn is_known_forcefield(name: &str) -> bool {
    FORCEFIELDS.contains(name.to_lowercase().as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObabelConfig {
    /// Executable name or path of `obabel`. Bare names are looked up on `PATH`.
    pub program: PathBuf,
    /// Python interpreter with the `openbabel` bindings installed.
    pub python: PathBuf,
}

impl Default for ObabelConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            python: PathBuf::from(DEFAULT_PYTHON),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObabelToolkit {
    config: ObabelConfig,
}

impl ObabelToolkit {
    pub fn new(config: ObabelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ObabelConfig {
        &self.config
    }

    fn execute(
        &self,
        executable: &Path,
        args: &[OsString],
        input: Option<&str>,
    ) -> Result<String, ToolkitError> {
        let program = executable.display().to_string();
        let mut command = Command::new(executable);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        debug!("Running toolkit command: {}", program);
        trace!("Toolkit arguments: {:?}", args);

        let mut child = command.spawn().map_err(|source| ToolkitError::Spawn {
            program: program.clone(),
            source,
        })?;

        if let Some(input) = input {
            if let Some(mut stdin) = child.stdin.take() {
                // A child that exits early is reported through its status and stderr.
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    if e.kind() != ErrorKind::BrokenPipe {
                        return Err(e.into());
                    }
                }
            }
        }

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            trace!("{} stderr: {}", program, stderr);
        }

        if !output.status.success() {
            return Err(ToolkitError::CommandFailed {
                program,
                code: output.status.code(),
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| ToolkitError::Utf8 { program, source })
    }

    fn obabel(&self, args: &[OsString]) -> Result<String, ToolkitError> {
        self.execute(&self.config.program, args, None)
    }
}

fn input_flag(format: &str) -> OsString {
    OsString::from(format!("-i{}", format))
}

fn output_flag(format: &str) -> OsString {
    OsString::from(format!("-o{}", format))
}

pub(crate) fn read_args(format: &str, path: &Path) -> Vec<OsString> {
    vec![input_flag(format), path.into(), output_flag("mol2")]
}

pub(crate) fn charge_args(format: &str, path: &Path) -> Vec<OsString> {
    vec![
        input_flag(format),
        path.into(),
        output_flag("mol2"),
        "--partialcharge".into(),
        CHARGE_MODEL.into(),
    ]
}

pub(crate) fn minimize_args() -> Vec<OsString> {
    vec!["-c".into(), MINIMIZE_DRIVER.into()]
}

/// The job handed to the minimization driver. Atom indices are 1-based.
#[derive(Debug, Serialize)]
pub(crate) struct MinimizeJob<'a> {
    input: &'a Path,
    input_format: &'a str,
    output: &'a Path,
    output_format: &'a str,
    forcefield: &'a str,
    max_steps: usize,
    constraints: ConstraintSet,
}

impl<'a> MinimizeJob<'a> {
    pub(crate) fn new(request: &MinimizationRequest<'a>) -> Result<Self, ToolkitError> {
        Ok(Self {
            input: request.input,
            input_format: request.input_format,
            output: request.output,
            output_format: request.output_format,
            forcefield: request.forcefield,
            max_steps: request.max_steps,
            constraints: request
                .constraints
                .offset_indices(1)
                .map_err(ToolkitError::IndexOverflow)?,
        })
    }

    pub(crate) fn to_json(&self) -> Result<String, ToolkitError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl MoleculeStore for ObabelToolkit {
    fn read(&self, format: &str, path: &Path) -> Result<Molecule, ToolkitError> {
        let stdout = self.obabel(&read_args(format, path))?;
        let mut reader = stdout.as_bytes();
        Ok(Mol2File::read_from(&mut reader)?)
    }
}

impl ForceFieldEngine for ObabelToolkit {
    fn minimize(&self, request: &MinimizationRequest<'_>) -> Result<Molecule, ToolkitError> {
        if !is_known_forcefield(request.forcefield) {
            return Err(ToolkitError::UnknownForceField(
                request.forcefield.to_string(),
            ));
        }

        let job = MinimizeJob::new(request)?.to_json()?;
        trace!("Minimization job: {}", job);
        let stdout = self.execute(&self.config.python, &minimize_args(), Some(&job))?;
        let mut reader = stdout.as_bytes();
        Ok(XyzFile::read_from(&mut reader)?)
    }
}

impl ChargeEngine for ObabelToolkit {
    fn partial_charges(&self, format: &str, path: &Path) -> Result<Vec<f64>, ToolkitError> {
        let stdout = self.obabel(&charge_args(format, path))?;
        let mut reader = stdout.as_bytes();
        Ok(mol2::read_partial_charges(&mut reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::{AngleConstraint, DistanceConstraint, TorsionConstraint};
    use serde_json::json;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn unreachable_toolkit() -> ObabelToolkit {
        ObabelToolkit::new(ObabelConfig {
            program: PathBuf::from("/nonexistent/lmekit-test/obabel"),
            python: PathBuf::from("/nonexistent/lmekit-test/python3"),
        })
    }

    fn request<'a>(constraints: &'a ConstraintSet, forcefield: &'a str) -> MinimizationRequest<'a> {
        MinimizationRequest {
            input: Path::new("work/input.mol2"),
            input_format: "mol2",
            output: Path::new("work/opt.pdb"),
            output_format: "pdb",
            forcefield,
            constraints,
            max_steps: 500,
        }
    }

    #[test]
    fn command_arguments_follow_obabel_conventions() {
        let path = Path::new("work/input.mol2");

        assert_eq!(
            strings(read_args("sdf", path)),
            vec!["-isdf", "work/input.mol2", "-omol2"]
        );
        assert_eq!(
            strings(charge_args("mol2", path)),
            vec![
                "-imol2",
                "work/input.mol2",
                "-omol2",
                "--partialcharge",
                "gasteiger"
            ]
        );

        let minimize = strings(minimize_args());
        assert_eq!(minimize[0], "-c");
        assert!(minimize[1].contains("OBFFConstraints"));
    }

    #[test]
    fn minimize_job_numbers_constraint_atoms_from_one() {
        let constraints = ConstraintSet {
            ignore: vec![4],
            fixed: vec![0, 2],
            distances: vec![DistanceConstraint {
                atoms: [0, 1],
                target: 2.05,
            }],
            angles: vec![AngleConstraint {
                atoms: [1, 0, 2],
                target: 90.0,
            }],
            torsions: vec![TorsionConstraint {
                atoms: [3, 0, 1, 2],
                target: 180.0,
            }],
        };

        let job = MinimizeJob::new(&request(&constraints, "MMFF94"))
            .unwrap()
            .to_json()
            .unwrap();
        let job: serde_json::Value = serde_json::from_str(&job).unwrap();

        assert_eq!(job["constraints"]["ignore"], json!([5]));
        assert_eq!(job["constraints"]["fixed"], json!([1, 3]));
        assert_eq!(
            job["constraints"]["distances"],
            json!([{"atoms": [1, 2], "target": 2.05}])
        );
        assert_eq!(job["constraints"]["angles"][0]["atoms"], json!([2, 1, 3]));
        assert_eq!(job["constraints"]["torsions"][0]["atoms"], json!([4, 1, 2, 3]));
        assert_eq!(job["forcefield"], "MMFF94");
        assert_eq!(job["max_steps"], 500);
    }

    #[test]
    fn minimize_job_carries_input_and_output_targets() {
        let constraints = ConstraintSet::default();
        let job = MinimizeJob::new(&request(&constraints, "UFF"))
            .unwrap()
            .to_json()
            .unwrap();
        let job: serde_json::Value = serde_json::from_str(&job).unwrap();

        assert_eq!(job["input"], "work/input.mol2");
        assert_eq!(job["input_format"], "mol2");
        assert_eq!(job["output"], "work/opt.pdb");
        assert_eq!(job["output_format"], "pdb");
    }

    #[test]
    fn minimize_job_rejects_indices_without_a_one_based_number() {
        let constraints = ConstraintSet {
            fixed: vec![usize::MAX],
            ..ConstraintSet::default()
        };

        assert!(matches!(
            MinimizeJob::new(&request(&constraints, "UFF")),
            Err(ToolkitError::IndexOverflow(usize::MAX))
        ));
    }

    #[test]
    fn forcefield_names_are_case_insensitive() {
        assert!(is_known_forcefield("MMFF94"));
        assert!(is_known_forcefield("uff"));
        assert!(is_known_forcefield("Ghemical"));
        assert!(!is_known_forcefield("amber99"));
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let result = unreachable_toolkit().read("xyz", Path::new("input.xyz"));
        assert!(matches!(result, Err(ToolkitError::Spawn { .. })));
    }

    #[test]
    fn constrained_minimization_runs_the_python_driver() {
        let constraints = ConstraintSet {
            fixed: vec![0],
            ..ConstraintSet::default()
        };

        match unreachable_toolkit().minimize(&request(&constraints, "MMFF94")) {
            Err(ToolkitError::Spawn { program, .. }) => {
                assert_eq!(program, "/nonexistent/lmekit-test/python3");
            }
            other => panic!("Expected a spawn error from the driver, got {:?}", other),
        }
    }

    #[test]
    fn unknown_forcefield_is_rejected_before_running() {
        let constraints = ConstraintSet::default();

        assert!(matches!(
            unreachable_toolkit().minimize(&request(&constraints, "amber99")),
            Err(ToolkitError::UnknownForceField(name)) if name == "amber99"
        ));
    }
}
