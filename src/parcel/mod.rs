//! Build configuration resolution for parcel builds.
//!
//! This module determines, for a single build invocation, which parcel kind,
//! target, phase and output location apply, and where the artifact lands:
//!
//! ```text
//! tokens -> tokenize -> CliMap -> ConfigResolver (+ PartialConfig, Defaults)
//!        -> BuildConfiguration -> OutputPathResolver -> path
//! ```
//!
//! Both resolvers are pure with respect to their inputs. The only
//! environment read happens in [`Defaults::from_env`], once, before
//! resolution starts.

mod builder;
mod core;
mod defaults;
mod kind;
mod output_path;
mod params;
mod phase;
mod resolver;
mod target;

// Re-export all public types
pub use builder::PartialConfig;
pub use self::core::BuildConfiguration;
pub use defaults::{DATA_ROOT, Defaults};
pub use kind::{EntryPointTable, ParcelKind};
pub use output_path::{
    OutputPathResolver, ends_with_separator, trim_trailing_separators, with_trailing_separator,
};
pub use params::{CliMap, CliValue, tokenize};
pub use phase::{BuildOptions, Phase};
pub use resolver::{
    CONSUMED_KEYS, ConfigResolver, KEY_BASE_OUTPUT_DIR, KEY_BUILD_OPTIONS, KEY_BUILD_TARGET,
    KEY_EXECUTE_METHOD, KEY_OUTPUT_DIR, KEY_PACKAGE_NAME, KEY_PROJECT_NAME, KEY_WEBPLAYER_TYPE,
    KEYS_PHASE, default_output_dir,
};
pub use target::{OutputStyle, STREAMED_SUFFIX, SuffixRule, TARGET_ALIASES, Target, TargetGroup};
