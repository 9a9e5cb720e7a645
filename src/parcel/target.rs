//! Build targets, target groups and the per-target lookup tables.
//!
//! Adding a platform is a table edit: a variant, its aliases in
//! [`TARGET_ALIASES`], and an arm in each exhaustive mapping below.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a build is produced for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Android APK
    Android,
    /// iOS (Xcode project)
    #[serde(rename = "iOS")]
    Ios,
    /// tvOS (Xcode project)
    #[serde(rename = "tvOS")]
    TvOs,
    /// Web player, standard delivery
    WebStandard,
    /// Web player, streamed delivery
    WebStreamed,
    /// WebGL
    #[serde(rename = "WebGL")]
    WebGl,
    /// Windows standalone, 32-bit
    Windows32,
    /// Windows standalone, 64-bit
    Windows64,
    /// macOS standalone (universal)
    #[serde(rename = "macOS")]
    MacOs,
}

/// Platform family used to scope group-wide settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TargetGroup {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Standalone,
    WebPlayer,
    #[serde(rename = "WebGL")]
    WebGl,
    Unknown,
}

/// How the final artifact path is derived from the output directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputStyle {
    /// Directory plus a package file name with a target suffix rule
    Package(SuffixRule),
    /// Bare directory, no trailing separator (post-processed targets)
    SingleDirectory,
    /// Output directory used as-is
    PassThrough,
}

/// Idempotent file name suffix normalization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SuffixRule {
    /// Append the suffix unless already present
    Append(&'static str),
    /// Remove the suffix if present
    Strip(&'static str),
}

/// Case-insensitive target names and aliases.
///
/// Keys are lowercase; lookups lowercase the input first.
pub const TARGET_ALIASES: &[(&str, Target)] = &[
    ("android", Target::Android),
    ("ios", Target::Ios),
    ("iphone", Target::Ios),
    ("tvos", Target::TvOs),
    ("appletv", Target::TvOs),
    ("web", Target::WebStandard),
    ("webplayer", Target::WebStandard),
    ("webstandard", Target::WebStandard),
    ("webstreamed", Target::WebStreamed),
    ("webplayerstreamed", Target::WebStreamed),
    ("webgl", Target::WebGl),
    ("win", Target::Windows32),
    ("windows32", Target::Windows32),
    ("standalonewindows", Target::Windows32),
    ("win64", Target::Windows64),
    ("windows64", Target::Windows64),
    ("standalonewindows64", Target::Windows64),
    ("osx", Target::MacOs),
    ("macos", Target::MacOs),
    ("standaloneosxuniversal", Target::MacOs),
];

/// Suffix appended to a web target string when the streamed variant is requested.
pub const STREAMED_SUFFIX: &str = "Streamed";

impl Target {
    /// All targets.
    pub const ALL: [Target; 9] = [
        Target::Android,
        Target::Ios,
        Target::TvOs,
        Target::WebStandard,
        Target::WebStreamed,
        Target::WebGl,
        Target::Windows32,
        Target::Windows64,
        Target::MacOs,
    ];

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Target::Android => "Android",
            Target::Ios => "iOS",
            Target::TvOs => "tvOS",
            Target::WebStandard => "WebStandard",
            Target::WebStreamed => "WebStreamed",
            Target::WebGl => "WebGL",
            Target::Windows32 => "Windows32",
            Target::Windows64 => "Windows64",
            Target::MacOs => "macOS",
        }
    }

    /// Parses a target name or alias, ignoring case.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let needle = value.to_lowercase();
        TARGET_ALIASES
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|(_, target)| *target)
            .ok_or_else(|| ConfigError::UnknownTargetString {
                value: value.to_string(),
            })
    }

    /// Parses a target string from the command line, honouring the
    /// streamed web variant request.
    ///
    /// When `streamed` is set the suffix is appended before lookup, so
    /// `web` becomes `webStreamed`. Non-web targets have no streamed alias
    /// and fail the lookup.
    pub fn parse_requested(value: &str, streamed: bool) -> Result<Self, ConfigError> {
        if streamed {
            Self::parse(&format!("{value}{STREAMED_SUFFIX}"))
        } else {
            Self::parse(value)
        }
    }

    /// Every accepted alias, for diagnostics.
    pub fn known_aliases() -> Vec<&'static str> {
        TARGET_ALIASES.iter().map(|(alias, _)| *alias).collect()
    }

    /// Platform family. Total: targets without a family map to `Unknown`.
    pub const fn group(&self) -> TargetGroup {
        match self {
            Target::Android => TargetGroup::Android,
            Target::Ios => TargetGroup::Ios,
            Target::Windows32 | Target::Windows64 | Target::MacOs => TargetGroup::Standalone,
            Target::WebStandard | Target::WebStreamed => TargetGroup::WebPlayer,
            Target::WebGl => TargetGroup::WebGl,
            Target::TvOs => TargetGroup::Unknown,
        }
    }

    /// Default subfolder under the base output directory.
    ///
    /// Targets outside the table use the base directory itself.
    pub const fn default_subfolder(&self) -> Option<&'static str> {
        match self {
            Target::Android => Some("Android"),
            Target::Ios => Some("iOS"),
            Target::WebStandard | Target::WebStreamed => Some("WebPlayer"),
            Target::WebGl => Some("WebGL"),
            Target::Windows32 => Some("Windows"),
            Target::Windows64 => Some("Windows64"),
            Target::TvOs | Target::MacOs => None,
        }
    }

    /// How the artifact path is derived for this target.
    pub const fn output_style(&self) -> OutputStyle {
        match self {
            Target::Android => OutputStyle::Package(SuffixRule::Append(".apk")),
            Target::Windows32 | Target::Windows64 => OutputStyle::Package(SuffixRule::Append(".exe")),
            Target::WebStandard | Target::WebStreamed | Target::WebGl => {
                OutputStyle::Package(SuffixRule::Strip(".unity3d"))
            }
            Target::Ios | Target::TvOs => OutputStyle::SingleDirectory,
            Target::MacOs => OutputStyle::PassThrough,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TargetGroup {
    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TargetGroup::Android => "Android",
            TargetGroup::Ios => "iOS",
            TargetGroup::Standalone => "Standalone",
            TargetGroup::WebPlayer => "WebPlayer",
            TargetGroup::WebGl => "WebGL",
            TargetGroup::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SuffixRule {
    /// Applies the rule to a path. Applying it twice equals applying it once.
    pub fn apply(&self, path: &str) -> String {
        match self {
            SuffixRule::Append(suffix) if !path.ends_with(suffix) => format!("{path}{suffix}"),
            SuffixRule::Strip(suffix) => {
                let mut stripped = path;
                while let Some(rest) = stripped.strip_suffix(suffix) {
                    stripped = rest;
                }
                stripped.to_string()
            }
            SuffixRule::Append(_) => path.to_string(),
        }
    }
}
