//! Parcel kinds and the entry-point inference table.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Category of artifact being produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelKind {
    /// Client binary
    Client,
    /// Asset bundle
    Bundle,
    /// Distributable package
    Package,
}

impl ParcelKind {
    /// All parcel kinds.
    pub const ALL: [ParcelKind; 3] = [ParcelKind::Client, ParcelKind::Bundle, ParcelKind::Package];

    /// Display name, e.g. `Client`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParcelKind::Client => "Client",
            ParcelKind::Bundle => "Bundle",
            ParcelKind::Package => "Package",
        }
    }

    /// Plural name used for the default output directory, e.g. `Clients`.
    pub fn plural(&self) -> String {
        format!("{}s", self.as_str())
    }

    /// Parses a parcel kind name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for ParcelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the owning type of a build entry point to the parcel it produces.
///
/// The `executeMethod` argument names a method as `Namespace.Type.Method`;
/// the `Type` segment is looked up here. The set of invokable entry points
/// belongs to the caller, so the table is an explicit input with
/// [`EntryPointTable::default`] providing the stock builders.
///
/// # Configuration
///
/// ```toml
/// [entry_points]
/// ClientBuilder = "client"
/// AssetBundler = "bundle"
/// PackageBuilder = "package"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPointTable {
    entry_points: BTreeMap<String, ParcelKind>,
}

impl Default for EntryPointTable {
    fn default() -> Self {
        Self::empty()
            .with("ClientBuilder", ParcelKind::Client)
            .with("AssetBundler", ParcelKind::Bundle)
            .with("PackageBuilder", ParcelKind::Package)
    }
}

impl EntryPointTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            entry_points: BTreeMap::new(),
        }
    }

    /// Adds an owning type name.
    pub fn with(mut self, owner: impl Into<String>, kind: ParcelKind) -> Self {
        self.entry_points.insert(owner.into(), kind);
        self
    }

    /// Parses a table from TOML.
    pub fn from_toml(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a table from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let table = Self::from_toml(&source)?;
        log::debug!(
            "Loaded {} entry points from {}",
            table.entry_points.len(),
            path.display()
        );
        Ok(table)
    }

    /// Looks up an owning type name exactly.
    pub fn get(&self, owner: &str) -> Option<ParcelKind> {
        self.entry_points.get(owner).copied()
    }

    /// Infers the parcel kind from an `executeMethod` value.
    ///
    /// The owning type is the second-to-last dot separated segment.
    pub fn infer(&self, entry_point: &str) -> Result<ParcelKind, ConfigError> {
        let mut segments = entry_point.rsplit('.');
        let owner = match (segments.next(), segments.next()) {
            (Some(_method), Some(owner)) => owner,
            _ => "",
        };

        self.get(owner)
            .ok_or_else(|| ConfigError::UnknownParcelInference {
                entry_point: entry_point.to_string(),
                owner: owner.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_stock_builders() {
        let table = EntryPointTable::default();
        assert_eq!(
            table.infer("Build.ClientBuilder.BuildClient_BatchMode"),
            Ok(ParcelKind::Client)
        );
        assert_eq!(table.infer("Build.AssetBundler.Bundle"), Ok(ParcelKind::Bundle));
        assert_eq!(table.infer("PackageBuilder.Run"), Ok(ParcelKind::Package));
    }

    #[test]
    fn unknown_owner_fails_with_context() {
        let err = EntryPointTable::default()
            .infer("Build.SceneBaker.Bake")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownParcelInference {
                entry_point: "Build.SceneBaker.Bake".into(),
                owner: "SceneBaker".into(),
            }
        );
    }

    #[test]
    fn entry_point_without_owner_fails() {
        let err = EntryPointTable::default().infer("BuildClient").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParcelInference { owner, .. } if owner.is_empty()));
    }

    #[test]
    fn owner_lookup_is_case_sensitive() {
        assert!(EntryPointTable::default().infer("Build.clientbuilder.Go").is_err());
    }

    #[test]
    fn table_parses_from_toml() {
        let table = EntryPointTable::from_toml(
            r#"
            [entry_points]
            NightlyClient = "client"
            DlcPacker = "package"
            "#,
        )
        .unwrap();
        assert_eq!(table.infer("Ci.NightlyClient.Build"), Ok(ParcelKind::Client));
        assert_eq!(table.infer("Ci.DlcPacker.Pack"), Ok(ParcelKind::Package));
        assert!(table.infer("Build.ClientBuilder.Build").is_err());
    }

    #[test]
    fn parcel_names() {
        assert_eq!(ParcelKind::Bundle.plural(), "Bundles");
        assert_eq!(ParcelKind::parse("PACKAGE"), Some(ParcelKind::Package));
        assert_eq!(ParcelKind::parse("installer"), None);
    }
}
