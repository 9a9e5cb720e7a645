//! Layered build configuration resolution.
//!
//! Every field is resolved independently with the same precedence:
//! explicit value, then command-line entry, then computed default.

use super::output_path::with_trailing_separator;
use super::{BuildConfiguration, CliMap, Defaults, ParcelKind, PartialConfig, Phase, Target};
use crate::error::ConfigError;

/// Entry point method, `Namespace.Type.Method`.
pub const KEY_EXECUTE_METHOD: &str = "executeMethod";
/// Target name or alias.
pub const KEY_BUILD_TARGET: &str = "buildTarget";
/// `streamed` selects the streamed web variant.
pub const KEY_WEBPLAYER_TYPE: &str = "webplayer-type";
/// Phase keys, in lookup order.
pub const KEYS_PHASE: [&str; 2] = ["phase", "buildPhase"];
pub const KEY_BASE_OUTPUT_DIR: &str = "baseOutputDir";
pub const KEY_OUTPUT_DIR: &str = "outputDir";
pub const KEY_PROJECT_NAME: &str = "projectName";
/// Package file name override, read by the output path resolver.
pub const KEY_PACKAGE_NAME: &str = "packageName";
/// Build options, read from the residual parameters.
pub const KEY_BUILD_OPTIONS: &str = "buildOptions";

/// Keys removed from the residual parameters once resolution succeeds.
pub const CONSUMED_KEYS: [&str; 5] = [
    KEYS_PHASE[0],
    KEYS_PHASE[1],
    KEY_OUTPUT_DIR,
    KEY_BASE_OUTPUT_DIR,
    KEY_PROJECT_NAME,
];

/// Where a resolved value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Source {
    Explicit,
    CommandLine,
    Default,
}

/// Merges explicit overrides, command-line entries and defaults into a
/// [`BuildConfiguration`].
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolves a configuration in a single pass.
    ///
    /// The command-line map is consumed: recognised keys are dropped and
    /// everything else becomes the residual parameters.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] when the parcel kind, target
    ///   or project name cannot be determined from any source
    /// - [`ConfigError::UnknownParcelInference`] when `executeMethod` names an
    ///   owning type outside the inference table
    /// - [`ConfigError::UnknownTargetString`] when `buildTarget` is not an alias
    /// - [`ConfigError::InvalidEnumValue`] when the phase is not a phase name
    pub fn resolve(
        explicit: &PartialConfig,
        mut cli: CliMap,
        defaults: &Defaults,
    ) -> Result<BuildConfiguration, ConfigError> {
        let parcel = resolve_parcel(explicit, &cli, defaults)?;
        let target = resolve_target(explicit, &cli)?;
        let phase = resolve_phase(explicit, &cli)?;

        let base_output_dir = layered(KEY_BASE_OUTPUT_DIR, &explicit.base_output_dir, &cli)
            .unwrap_or_else(|| defaults.base_output_dir(parcel));

        let output_dir = layered(KEY_OUTPUT_DIR, &explicit.output_dir, &cli)
            .unwrap_or_else(|| default_output_dir(&base_output_dir, target));

        let project_name = layered(KEY_PROJECT_NAME, &explicit.project_name, &cli)
            .or_else(|| defaults.project_name())
            .ok_or(ConfigError::MissingRequiredField {
                field: KEY_PROJECT_NAME,
            })?;

        log::info!("Constructed parameters:");
        log::info!("  * Parcel        : {}", parcel);
        log::info!("  * Target        : {}", target);
        log::info!("  * TargetGroup   : {}", target.group());
        log::info!("  * BaseOutputDir : {}", base_output_dir);
        log::info!("  * ProjectName   : {}", project_name);
        log::info!("  * OutputDir     : {}", output_dir);
        log::info!("  * Phase         : {}", phase);

        for key in CONSUMED_KEYS {
            cli.remove(key);
        }

        Ok(BuildConfiguration::new(
            parcel,
            target,
            phase,
            project_name,
            base_output_dir,
            output_dir,
            cli,
        ))
    }
}

/// Default output directory: base directory plus the target subfolder.
pub fn default_output_dir(base_output_dir: &str, target: Target) -> String {
    let mut dir = with_trailing_separator(base_output_dir);
    dir.push_str(target.default_subfolder().unwrap_or_default());
    dir
}

fn resolve_parcel(
    explicit: &PartialConfig,
    cli: &CliMap,
    defaults: &Defaults,
) -> Result<ParcelKind, ConfigError> {
    if let Some(parcel) = explicit.parcel {
        trace_source("parcel", Source::Explicit);
        return Ok(parcel);
    }

    match cli.get(KEY_EXECUTE_METHOD) {
        Some(entry_point) => {
            trace_source("parcel", Source::CommandLine);
            defaults.entry_points().infer(&entry_point.to_string())
        }
        None => Err(ConfigError::MissingRequiredField {
            field: KEY_EXECUTE_METHOD,
        }),
    }
}

fn resolve_target(explicit: &PartialConfig, cli: &CliMap) -> Result<Target, ConfigError> {
    if let Some(target) = explicit.target {
        trace_source(KEY_BUILD_TARGET, Source::Explicit);
        return Ok(target);
    }

    let requested = cli
        .get_string(KEY_BUILD_TARGET)
        .ok_or(ConfigError::MissingRequiredField {
            field: KEY_BUILD_TARGET,
        })?;
    let streamed = cli
        .get_string(KEY_WEBPLAYER_TYPE)
        .is_some_and(|kind| kind.eq_ignore_ascii_case("streamed"));

    trace_source(KEY_BUILD_TARGET, Source::CommandLine);
    Target::parse_requested(&requested, streamed)
}

fn resolve_phase(explicit: &PartialConfig, cli: &CliMap) -> Result<Phase, ConfigError> {
    if let Some(phase) = explicit.phase {
        trace_source("phase", Source::Explicit);
        return Ok(phase);
    }

    match cli.first_of(&KEYS_PHASE) {
        Some((key, value)) => {
            trace_source(key, Source::CommandLine);
            Phase::parse(key, &value.to_string())
        }
        None => {
            trace_source("phase", Source::Default);
            Ok(Phase::default())
        }
    }
}

/// Resolves a text field from the explicit and command-line layers.
///
/// `None` means the caller's default applies.
fn layered(key: &str, explicit: &Option<String>, cli: &CliMap) -> Option<String> {
    if let Some(value) = explicit {
        trace_source(key, Source::Explicit);
        return Some(value.clone());
    }
    if let Some(value) = cli.get_string(key) {
        trace_source(key, Source::CommandLine);
        return Some(value);
    }
    trace_source(key, Source::Default);
    None
}

fn trace_source(key: &str, source: Source) {
    log::debug!("{} resolved from {:?}", key, source);
}
