use crate::cli::MinimizeArgs;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::utils::paths::{resolve_format, resolve_mapping};
use crate::utils::progress::with_spinner;
use lmekit::workflows::minimize::{self, MinimizeConfig};
use tracing::{debug, info};

fn build_config(args: MinimizeArgs, settings: &Settings) -> Result<MinimizeConfig> {
    let config = MinimizeConfig {
        forcefield: args
            .forcefield
            .unwrap_or_else(|| settings.forcefield.clone()),
        input_format: resolve_format(args.input_format.as_deref(), &args.input, "input")?,
        output_format: resolve_format(args.output_format.as_deref(), &args.output, "output")?,
        mapping: resolve_mapping(args.mapping.as_deref(), &args.input),
        input: args.input,
        output: args.output,
        constraints: args.constraints,
        max_steps: args.max_steps.unwrap_or(settings.max_steps),
        dry_run: args.dry_run,
    };
    config.validate()?;
    debug!("Minimization configuration: {:?}", config);
    Ok(config)
}

pub fn run(args: MinimizeArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let config = build_config(args, settings)?;
    let toolkit = settings.toolkit();

    if config.dry_run {
        let report = minimize::run(&config, &toolkit)?;
        let json = serde_json::to_string_pretty(&report.constraints)
            .map_err(|e| CliError::Other(e.into()))?;
        println!("{}", json);
        return Ok(());
    }

    let message = format!("Minimizing with {}...", config.forcefield);
    let report = with_spinner(&message, "✓ Minimization finished", quiet, || {
        minimize::run(&config, &toolkit)
    })?;
    if let Some(output) = report.output {
        info!("Wrote minimized structure to {:?}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use lmekit::toolkit::ObabelConfig;
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            obabel: ObabelConfig::default(),
            forcefield: "MMFF94".to_string(),
            max_steps: 2500,
        }
    }

    fn args(extra: &[&str]) -> MinimizeArgs {
        let mut argv = vec![
            "lmekit",
            "minimize",
            "-i",
            "run/input.mol2",
            "-o",
            "run/opt.xyz",
            "-c",
            "constraints.json",
        ];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Minimize(args) => args,
            other => panic!("Expected 'minimize' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn settings_fill_unset_options() {
        let config = build_config(args(&[]), &settings()).unwrap();

        assert_eq!(config.forcefield, "MMFF94");
        assert_eq!(config.max_steps, 2500);
        assert_eq!(config.input_format, "mol2");
        assert_eq!(config.output_format, "xyz");
        assert_eq!(config.mapping, PathBuf::from("run/input.map.json"));
    }

    #[test]
    fn flags_override_settings() {
        let config = build_config(
            args(&["--forcefield", "UFF", "-n", "10", "-F", "pdb"]),
            &settings(),
        )
        .unwrap();

        assert_eq!(config.forcefield, "UFF");
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.output_format, "pdb");
    }

    #[test]
    fn zero_steps_fail_validation() {
        assert!(matches!(
            build_config(args(&["-n", "0"]), &settings()),
            Err(CliError::Workflow(_))
        ));
    }
}
