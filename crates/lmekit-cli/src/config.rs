pub mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use lmekit::toolkit::obabel::is_known_forcefield;
use lmekit::toolkit::{ObabelConfig, ObabelToolkit};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialToolkitConfig {
    obabel: Option<PathBuf>,
    python: Option<PathBuf>,
    forcefield: Option<String>,
    #[serde(rename = "max-steps")]
    max_steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    toolkit: Option<PartialToolkitConfig>,
}

/// Fully merged toolkit settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub obabel: ObabelConfig,
    pub forcefield: String,
    pub max_steps: usize,
}

impl Settings {
    pub fn toolkit(&self) -> ObabelToolkit {
        ObabelToolkit::new(self.obabel.clone())
    }
}

impl PartialSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading toolkit configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Precedence: command-line flags, then `-S` values, then the file, then defaults.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<Settings> {
        self.apply_set_values(&cli.set_values)?;

        let defaults = DefaultsConfig::default();
        let toolkit = self.toolkit.take().unwrap_or_default();

        let program = cli
            .obabel
            .clone()
            .or(toolkit.obabel)
            .unwrap_or_else(|| PathBuf::from(defaults.obabel));
        if program.as_os_str().is_empty() {
            return Err(CliError::Config(
                "`toolkit.obabel` must not be empty.".to_string(),
            ));
        }

        let python = cli
            .python
            .clone()
            .or(toolkit.python)
            .unwrap_or_else(|| PathBuf::from(defaults.python));
        if python.as_os_str().is_empty() {
            return Err(CliError::Config(
                "`toolkit.python` must not be empty.".to_string(),
            ));
        }

        let forcefield = toolkit.forcefield.unwrap_or(defaults.forcefield);
        if !is_known_forcefield(&forcefield) {
            warn!(
                "Configured force field '{}' is not one Open Babel ships; minimization will fail.",
                forcefield
            );
        }

        let max_steps = toolkit.max_steps.unwrap_or(defaults.max_steps);
        if max_steps == 0 {
            return Err(CliError::Config(
                "`toolkit.max-steps` must be greater than zero.".to_string(),
            ));
        }

        Ok(Settings {
            obabel: ObabelConfig { program, python },
            forcefield,
            max_steps,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            let toolkit = self.toolkit.get_or_insert_with(Default::default);
            match key {
                "toolkit.obabel" => toolkit.obabel = Some(PathBuf::from(value_str)),
                "toolkit.python" => toolkit.python = Some(PathBuf::from(value_str)),
                "toolkit.forcefield" => toolkit.forcefield = Some(value_str.to_string()),
                "toolkit.max-steps" => {
                    toolkit.max_steps = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: {}",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec!["lmekit"];
        args.extend_from_slice(extra);
        args.extend_from_slice(&["neighbors", "-i", "in.json", "-o", "xcontrol"]);
        Cli::parse_from(args)
    }

    #[test]
    fn defaults_apply_without_file() {
        let settings = PartialSettings::load(None)
            .unwrap()
            .merge_with_cli(&cli(&[]))
            .unwrap();

        assert_eq!(settings.obabel.program, PathBuf::from("obabel"));
        assert_eq!(settings.obabel.python, PathBuf::from("python3"));
        assert_eq!(settings.forcefield, "MMFF94");
        assert_eq!(settings.max_steps, 2500);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolkit.toml");
        fs::write(
            &path,
            r#"
            [toolkit]
            obabel = "/opt/openbabel/bin/obabel"
            python = "/opt/openbabel/bin/python"
            forcefield = "UFF"
            max-steps = 500
            "#,
        )
        .unwrap();

        let settings = PartialSettings::load(Some(&path))
            .unwrap()
            .merge_with_cli(&cli(&[]))
            .unwrap();

        assert_eq!(
            settings.obabel.program,
            PathBuf::from("/opt/openbabel/bin/obabel")
        );
        assert_eq!(
            settings.obabel.python,
            PathBuf::from("/opt/openbabel/bin/python")
        );
        assert_eq!(settings.forcefield, "UFF");
        assert_eq!(settings.max_steps, 500);
    }

    #[test]
    fn cli_flags_and_set_values_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolkit.toml");
        fs::write(
            &path,
            "[toolkit]\nobabel = \"from-file\"\npython = \"python-from-file\"\nmax-steps = 500\n",
        )
        .unwrap();

        let settings = PartialSettings::load(Some(&path))
            .unwrap()
            .merge_with_cli(&cli(&[
                "--obabel",
                "from-flag",
                "-S",
                "toolkit.python=python-from-set",
                "-S",
                "toolkit.max-steps=42",
                "-S",
                "toolkit.forcefield=GAFF",
            ]))
            .unwrap();

        assert_eq!(settings.obabel.program, PathBuf::from("from-flag"));
        assert_eq!(settings.obabel.python, PathBuf::from("python-from-set"));
        assert_eq!(settings.max_steps, 42);
        assert_eq!(settings.forcefield, "GAFF");
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolkit.toml");
        fs::write(&path, "[toolkit]\nobminimize = \"obminimize\"\n").unwrap();

        assert!(matches!(
            PartialSettings::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["toolkit.max-steps", "toolkit.max-steps=many", "toolkit.color=red"] {
            let result = PartialSettings::default().merge_with_cli(&cli(&["-S", bad]));
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected config error for {bad}"
            );
        }
    }

    #[test]
    fn zero_step_budget_is_rejected() {
        let result =
            PartialSettings::default().merge_with_cli(&cli(&["-S", "toolkit.max-steps=0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            PartialSettings::load(Some(&dir.path().join("absent.toml"))),
            Err(CliError::Io(_))
        ));
    }
}
