//! Build configuration resolution for parcel builds
//!
//! This library determines, for a single build invocation:
//! - which parcel kind is being produced (client, bundle, package)
//! - which target and target group apply
//! - which phase the build belongs to (CI, QA, RC)
//! - where the artifact lands, with per-target file name rules
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod parcel;

// Re-export commonly used types
pub use error::{CliError, ConfigError, ParcelError, Result};
pub use parcel::{BuildConfiguration, ConfigResolver, OutputPathResolver};
