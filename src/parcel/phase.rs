//! Build phases and build options.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage a build belongs to, ordered by severity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Continuous integration
    #[default]
    #[serde(rename = "CI")]
    Ci,
    /// Quality assurance
    #[serde(rename = "QA")]
    Qa,
    /// Release candidate
    #[serde(rename = "RC")]
    ReleaseCandidate,
}

impl Phase {
    /// All phases, lowest severity first.
    pub const ALL: [Phase; 3] = [Phase::Ci, Phase::Qa, Phase::ReleaseCandidate];

    /// Short phase name, e.g. `RC`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Ci => "CI",
            Phase::Qa => "QA",
            Phase::ReleaseCandidate => "RC",
        }
    }

    /// Long phase name, e.g. `ReleaseCandidate`.
    pub const fn long_name(&self) -> &'static str {
        match self {
            Phase::Ci => "ContinuousIntegration",
            Phase::Qa => "QualityAssurance",
            Phase::ReleaseCandidate => "ReleaseCandidate",
        }
    }

    /// Parses a short or long phase name, ignoring case.
    ///
    /// `key` names the argument the value came from and is only used for
    /// error context.
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|phase| {
                phase.as_str().eq_ignore_ascii_case(value)
                    || phase.long_name().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| ConfigError::InvalidEnumValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(Phase::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Scripting define symbol for the phase, e.g. `QA_BUILD`.
    pub fn define_symbol(&self) -> String {
        format!("{}_BUILD", self.as_str().to_uppercase())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options forwarded to the build invoker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildOptions {
    #[default]
    None,
    /// Development build (debug symbols, profiler connection)
    Development,
}

impl BuildOptions {
    /// Interprets a `buildOptions` value. Only `development` is recognised.
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            BuildOptions::Development
        } else {
            BuildOptions::None
        }
    }
}
