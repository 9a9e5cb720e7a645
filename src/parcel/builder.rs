//! Explicit overrides supplied by the caller.

use super::{ParcelKind, Phase, Target};

/// Caller-provided values that take precedence over the command line and
/// over computed defaults.
///
/// Every field is optional; unset fields fall through to the next source.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_parcel::parcel::{ParcelKind, PartialConfig, Phase, Target};
///
/// let explicit = PartialConfig::new()
///     .parcel(ParcelKind::Client)
///     .target(Target::Android)
///     .phase(Phase::Qa);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub parcel: Option<ParcelKind>,
    pub target: Option<Target>,
    pub phase: Option<Phase>,
    pub base_output_dir: Option<String>,
    pub output_dir: Option<String>,
    pub project_name: Option<String>,
}

impl PartialConfig {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the parcel kind, skipping entry point inference.
    pub fn parcel(mut self, parcel: ParcelKind) -> Self {
        self.parcel = Some(parcel);
        self
    }

    /// Sets the build target, ignoring `buildTarget` and `webplayer-type`.
    pub fn target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Sets the base output directory. Should be absolute.
    pub fn base_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_output_dir = Some(dir.into());
        self
    }

    /// Sets the complete output directory, bypassing the per-target subfolder.
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }
}
