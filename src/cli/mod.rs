//! Command line interface for kodegen parcel resolution.
//!
//! This module wires argument parsing, the environment snapshot and the
//! resolvers together, and reports the result.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::parcel::{
    BuildConfiguration, BuildOptions, CliMap, ConfigResolver, Defaults, EntryPointTable,
    OutputPathResolver,
};
use path_absolutize::Absolutize;
use serde::Serialize;
use std::path::Path;

/// Everything the build invoker needs for one invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub configuration: BuildConfiguration,
    pub output_path: String,
    pub build_options: BuildOptions,
    pub define_symbols: String,
}

impl Resolution {
    /// Bundles a configuration with its output path.
    pub fn new(configuration: BuildConfiguration) -> Self {
        let output_path = OutputPathResolver::resolve(&configuration);
        let build_options = configuration.build_options();
        let define_symbols = configuration.define_symbols();
        Self {
            configuration,
            output_path,
            build_options,
            define_symbols,
        }
    }
}

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime_config = RuntimeConfig::from(&args);

    let resolution = resolve(&args)?;
    report(&args, &runtime_config, &resolution)?;

    Ok(0)
}

/// Resolves configuration and output path from parsed arguments.
pub fn resolve(args: &Args) -> Result<Resolution> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let defaults = build_defaults(args)?;
    let cli = CliMap::from_tokens(&args.build_args);
    let configuration = ConfigResolver::resolve(&args.explicit_overrides(), cli, &defaults)?;

    Ok(Resolution::new(configuration))
}

/// Snapshots the working directory and project location.
fn build_defaults(args: &Args) -> Result<Defaults> {
    let mut defaults = match &args.project_path {
        Some(path) => {
            let project_dir = path.absolutize()?.into_owned();
            Defaults::new(std::env::current_dir()?, project_dir)
        }
        None => Defaults::from_env()?,
    };
    log::debug!("Data root: {}", defaults.data_path().display());

    if let Some(path) = &args.entry_points {
        defaults = defaults.with_entry_points(load_entry_points(path)?);
    }
    Ok(defaults)
}

fn load_entry_points(path: &Path) -> Result<EntryPointTable> {
    EntryPointTable::load(path).map_err(|e| {
        log::error!("Failed to load entry point table {}: {}", path.display(), e);
        e
    })
}

fn report(args: &Args, runtime_config: &RuntimeConfig, resolution: &Resolution) -> Result<()> {
    let output = runtime_config.output();

    if args.json {
        output.result(&serde_json::to_string_pretty(resolution)?)?;
        return Ok(());
    }
    if output.is_quiet() {
        output.result(&resolution.output_path)?;
        return Ok(());
    }

    let config = &resolution.configuration;
    runtime_config.section("Build configuration")?;
    runtime_config.field("Parcel", config.parcel_kind().as_str())?;
    runtime_config.field("Target", config.target().as_str())?;
    runtime_config.field("TargetGroup", config.target_group().as_str())?;
    runtime_config.field("Phase", config.phase().as_str())?;
    runtime_config.field("ProjectName", config.project_name())?;
    runtime_config.field("BaseOutputDir", config.base_output_dir())?;
    runtime_config.field("OutputDir", config.output_dir())?;
    runtime_config.field("BuildOptions", &format!("{:?}", resolution.build_options))?;
    runtime_config.field("DefineSymbols", &resolution.define_symbols)?;

    if !config.residual_params().is_empty() {
        runtime_config.section("Residual parameters")?;
        for (key, value) in config.residual_params().iter() {
            runtime_config.indent(&format!("{key} = {value}"))?;
        }
    }

    runtime_config.verbose_println(&format!(
        "{} residual parameter(s) forwarded to the build invoker",
        config.residual_params().len()
    ))?;
    if config.target_group() == crate::parcel::TargetGroup::Unknown {
        runtime_config.warn(&format!(
            "{} has no target group; group-wide settings will not apply",
            config.target()
        ))?;
    }
    runtime_config.success(&format!("Output path: {}", resolution.output_path))?;
    output.result(&resolution.output_path)?;

    Ok(())
}
