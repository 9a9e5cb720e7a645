//! Core BuildConfiguration struct and implementations.

use super::{
    BuildOptions, CliMap, CliValue, KEY_BUILD_OPTIONS, KEY_PACKAGE_NAME, ParcelKind, Phase, Target,
    TargetGroup,
};
use serde::Serialize;

/// Fully resolved configuration for a single build invocation.
///
/// Constructed by [`ConfigResolver`](super::ConfigResolver) and never
/// mutated afterwards; resolving again produces a new value.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_parcel::parcel::{CliMap, ConfigResolver, Defaults, ParcelKind, PartialConfig};
///
/// # fn example() -> kodegen_bundler_parcel::Result<()> {
/// let cli = CliMap::from_tokens(["-buildTarget", "android", "-projectName", "Game"]);
/// let defaults = Defaults::from_env()?;
/// let config = ConfigResolver::resolve(&PartialConfig::new().parcel(ParcelKind::Client), cli, &defaults)?;
/// println!("{} -> {}", config.target(), config.output_dir());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    parcel_kind: ParcelKind,

    target: Target,

    /// Always `target.group()`.
    target_group: TargetGroup,

    phase: Phase,

    project_name: String,

    /// Base directory the per-target output folders live under.
    base_output_dir: String,

    /// Directory the artifact is written to.
    output_dir: String,

    /// Command-line entries not consumed during resolution.
    residual_params: CliMap,
}

impl BuildConfiguration {
    /// Creates a new configuration (used by ConfigResolver).
    pub(super) fn new(
        parcel_kind: ParcelKind,
        target: Target,
        phase: Phase,
        project_name: String,
        base_output_dir: String,
        output_dir: String,
        residual_params: CliMap,
    ) -> Self {
        Self {
            parcel_kind,
            target,
            target_group: target.group(),
            phase,
            project_name,
            base_output_dir,
            output_dir,
            residual_params,
        }
    }

    pub fn parcel_kind(&self) -> ParcelKind {
        self.parcel_kind
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Platform family derived from the target.
    pub fn target_group(&self) -> TargetGroup {
        self.target_group
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn base_output_dir(&self) -> &str {
        &self.base_output_dir
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Returns the unconsumed command-line entries.
    pub fn residual_params(&self) -> &CliMap {
        &self.residual_params
    }

    /// Returns a residual parameter.
    pub fn param(&self, key: &str) -> Option<&CliValue> {
        self.residual_params.get(key)
    }

    /// Package file name override from `-packageName`.
    ///
    /// Flags carry no name and are ignored.
    pub fn package_name(&self) -> Option<&str> {
        self.param(KEY_PACKAGE_NAME).and_then(CliValue::as_text)
    }

    /// Build options from `-buildOptions`.
    pub fn build_options(&self) -> BuildOptions {
        self.param(KEY_BUILD_OPTIONS)
            .map(|value| BuildOptions::from_value(&value.to_string()))
            .unwrap_or_default()
    }

    /// Scripting define symbols for the target group, e.g. `QA_BUILD`.
    pub fn define_symbols(&self) -> String {
        self.phase.define_symbol()
    }
}
