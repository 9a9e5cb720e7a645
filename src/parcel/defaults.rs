//! Environment snapshot used for computed defaults.

use super::output_path::trim_trailing_separators;
use super::{EntryPointTable, ParcelKind};
use std::path::{Path, PathBuf};

/// Name of the project's data root folder.
pub const DATA_ROOT: &str = "Assets";

/// Inputs for computed defaults.
///
/// Captured once per resolution. The resolver never reads process state
/// itself; callers build this with [`Defaults::from_env`] or [`Defaults::new`].
#[derive(Clone, Debug)]
pub struct Defaults {
    /// Working directory the default output tree is rooted at.
    working_dir: PathBuf,

    /// Project data root, e.g. `/work/Game/Assets`.
    ///
    /// The default project name is the segment before it.
    data_path: PathBuf,

    /// Owning type to parcel kind inference table.
    entry_points: EntryPointTable,
}

impl Defaults {
    /// Creates defaults rooted at `working_dir` for the project at `project_dir`.
    pub fn new(working_dir: impl Into<PathBuf>, project_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.into(),
            data_path: project_dir.as_ref().join(DATA_ROOT),
            entry_points: EntryPointTable::default(),
        }
    }

    /// Snapshots the current working directory, treating it as the project root.
    pub fn from_env() -> crate::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.clone(), cwd))
    }

    /// Replaces the data root path.
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Replaces the entry point inference table.
    pub fn with_entry_points(mut self, entry_points: EntryPointTable) -> Self {
        self.entry_points = entry_points;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn entry_points(&self) -> &EntryPointTable {
        &self.entry_points
    }

    /// Default base output directory: `<cwd>/Builds/<Kind>s/`.
    pub fn base_output_dir(&self, kind: ParcelKind) -> String {
        let cwd = self.working_dir.to_string_lossy();
        format!(
            "{}/Builds/{}/",
            trim_trailing_separators(&cwd),
            kind.plural()
        )
    }

    /// Default project name: the folder enclosing the data root.
    pub fn project_name(&self) -> Option<String> {
        self.data_path
            .parent()?
            .file_name()?
            .to_str()
            .map(String::from)
    }
}
