//! Command line argument parsing and validation.
//!
//! This module provides comprehensive CLI argument parsing using clap,
//! with proper validation and error handling.

use crate::parcel::{ParcelKind, PartialConfig, Phase, Target};
use clap::Parser;
use std::path::PathBuf;

/// Build configuration resolver for parcel builds
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_parcel",
    version,
    about = "Resolve build configuration and artifact path for a parcel build",
    long_about = "Resolves which parcel kind, target, phase and output location apply to a build,
and where its artifact lands. Nothing is built.

Build arguments follow `--` in the editor's batch-mode format:

Usage:
  kodegen_parcel --parcel client -- -buildTarget android -projectName Game
  kodegen_parcel -- -executeMethod Build.ClientBuilder.BuildClient_BatchMode -buildTarget win64
  kodegen_parcel --json -- -buildTarget web -webplayer-type streamed -phase rc

Options given here take precedence over the matching build arguments."
)]
pub struct Args {
    /// Parcel kind: client, bundle, package (default: inferred from -executeMethod)
    #[arg(long, value_name = "KIND", value_parser = parse_parcel)]
    pub parcel: Option<ParcelKind>,

    /// Build target name or alias (default: -buildTarget)
    #[arg(short, long, value_name = "TARGET", value_parser = parse_target)]
    pub target: Option<Target>,

    /// Build phase: CI, QA, RC (default: -phase, -buildPhase, then CI)
    #[arg(long, value_name = "PHASE", value_parser = parse_phase)]
    pub phase: Option<Phase>,

    /// Base output directory, absolute (default: <cwd>/Builds/<Kind>s/)
    #[arg(long, value_name = "DIR")]
    pub base_output_dir: Option<String>,

    /// Complete output directory (default: base output directory plus target folder)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Project name (default: the project folder name)
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Project root; its Assets folder is the data root
    #[arg(short = 'p', long, value_name = "DIR")]
    pub project_path: Option<PathBuf>,

    /// TOML file with an [entry_points] table mapping owning types to parcel kinds
    #[arg(long, value_name = "FILE")]
    pub entry_points: Option<PathBuf>,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the resolved output path
    #[arg(short, long, conflicts_with_all = ["verbose", "json"])]
    pub quiet: bool,

    /// Print resolution details
    #[arg(short, long)]
    pub verbose: bool,

    /// Build arguments, e.g. -buildTarget android -phase qa
    #[arg(last = true, allow_hyphen_values = true, value_name = "BUILD_ARGS")]
    pub build_args: Vec<String>,
}

fn parse_parcel(value: &str) -> Result<ParcelKind, String> {
    ParcelKind::parse(value).ok_or_else(|| {
        format!(
            "unknown parcel kind '{value}', expected one of: {}",
            ParcelKind::ALL.map(|kind| kind.as_str()).join(", ")
        )
    })
}

fn parse_target(value: &str) -> Result<Target, String> {
    Target::parse(value).map_err(|e| e.to_string())
}

fn parse_phase(value: &str) -> Result<Phase, String> {
    Phase::parse("phase", value).map_err(|e| e.to_string())
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let dirs = [
            ("--base-output-dir", &self.base_output_dir),
            ("--output-dir", &self.output_dir),
            ("--project-name", &self.project_name),
        ];
        for (flag, value) in dirs {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("{flag} cannot be empty"));
            }
        }

        if let Some(path) = &self.entry_points {
            if !path.is_file() {
                return Err(format!("Entry point table not found: {}", path.display()));
            }
        }

        Ok(())
    }

    /// Explicit overrides carried by the options.
    pub fn explicit_overrides(&self) -> PartialConfig {
        PartialConfig {
            parcel: self.parcel,
            target: self.target,
            phase: self.phase,
            base_output_dir: self.base_output_dir.clone(),
            output_dir: self.output_dir.clone(),
            project_name: self.project_name.clone(),
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print a labelled value
    pub fn field(&self, label: &str, value: &str) -> std::io::Result<()> {
        self.output.field(label, value)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
