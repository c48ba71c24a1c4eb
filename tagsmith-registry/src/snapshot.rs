//! Registry snapshot files exported by the editor.
//!
//! ```toml
//! tags = ["Untagged", "Respawn", "Finish", "Player"]
//! layers = ["Default", "TransparentFX", "Ignore Raycast", "", "Water", "UI"]
//! sorting_layers = ["Background", "Default", "Foreground"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tagsmith_core::{Category, Error, Result};

use crate::{Registry, SortingLayerNameSource, StablePublicSource};

/// Parsed snapshot file. Missing keys mean the editor did not export that registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySnapshot {
    pub tags: Option<Vec<String>>,
    pub layers: Option<Vec<String>>,
    pub sorting_layers: Option<Vec<String>>,
}

impl RegistrySnapshot {
    /// Parse a snapshot from TOML content.
    pub fn parse(content: &str, category: Category) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::registry_unavailable(
                category,
                format!("invalid registry snapshot: {}", e.message()),
            )
        })
    }

    /// Read and parse a snapshot file.
    ///
    /// Errors are attributed to `category`, the registry being read.
    pub fn load(path: &Path, category: Category) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::registry_unavailable(
                category,
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::parse(&content, category)
    }

    /// Names of one registry, or an error when the editor did not export it.
    pub fn names(&self, category: Category) -> Result<Vec<String>> {
        let (key, names) = match category {
            Category::Tags => ("tags", &self.tags),
            Category::Layers => ("layers", &self.layers),
            Category::SortingLayers => ("sorting_layers", &self.sorting_layers),
        };
        names.clone().ok_or_else(|| {
            Error::registry_unavailable(category, format!("snapshot has no '{}' key", key))
        })
    }
}

/// Registry backed by a snapshot file, re-read on every call.
pub struct SnapshotRegistry {
    path: PathBuf,
    sorting: Box<dyn SortingLayerNameSource>,
}

impl SnapshotRegistry {
    /// Read every registry, sorting layers included, from the snapshot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            sorting: Box::new(StablePublicSource::new(path.clone())),
            path,
        }
    }

    /// Use a different sorting-layer source.
    pub fn with_sorting_source(mut self, source: Box<dyn SortingLayerNameSource>) -> Self {
        self.sorting = source;
        self
    }

    fn names(&self, category: Category) -> Result<Vec<String>> {
        RegistrySnapshot::load(&self.path, category)?.names(category)
    }
}

impl Registry for SnapshotRegistry {
    fn tag_names(&self) -> Result<Vec<String>> {
        self.names(Category::Tags)
    }

    fn layer_names(&self) -> Result<Vec<String>> {
        self.names(Category::Layers)
    }

    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        self.sorting.sorting_layer_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = RegistrySnapshot::parse(
            r#"
            tags = ["Player", "Enemy"]
            layers = ["Default", "", "Water"]
            "#,
            Category::Tags,
        )
        .unwrap();

        assert_eq!(snapshot.names(Category::Tags).unwrap(), ["Player", "Enemy"]);
        assert_eq!(
            snapshot.names(Category::Layers).unwrap(),
            ["Default", "", "Water"]
        );
    }

    #[test]
    fn test_missing_key_is_unavailable() {
        let snapshot = RegistrySnapshot::parse("tags = []", Category::Tags).unwrap();
        let err = snapshot.names(Category::SortingLayers).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SortingLayers: registry unavailable: snapshot has no 'sorting_layers' key"
        );
    }

    #[test]
    fn test_invalid_snapshot_is_unavailable() {
        let err = RegistrySnapshot::parse("tags = 3", Category::Tags).unwrap_err();
        assert!(matches!(
            *err,
            Error::RegistryUnavailable {
                category: Category::Tags,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(RegistrySnapshot::parse("prefabs = []", Category::Tags).is_err());
    }
}
