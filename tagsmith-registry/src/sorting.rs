//! Sorting-layer name sources.
//!
//! Sorting layers are only reachable through the editor's private serialized
//! state unless the editor exports them explicitly. Both paths implement
//! [`SortingLayerNameSource`] so a host upgrade only ever touches this module.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tagsmith_core::{Category, Error, Result};

use crate::{
    RegistrySnapshot,
    unity::{TagManagerAsset, scalar_to_string},
};

/// A capability that yields sorting-layer names.
pub trait SortingLayerNameSource {
    fn sorting_layer_names(&self) -> Result<Vec<String>>;
}

/// Names exported by the editor through its public API into the registry
/// snapshot (`sorting_layers = [...]`).
#[derive(Debug, Clone)]
pub struct StablePublicSource {
    snapshot: PathBuf,
}

impl StablePublicSource {
    pub fn new(snapshot: impl Into<PathBuf>) -> Self {
        Self {
            snapshot: snapshot.into(),
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot
    }

    /// Exported names, or `None` when the editor exported none: the snapshot
    /// is missing or has no `sorting_layers` key.
    ///
    /// A snapshot that exists but cannot be read or parsed is an error.
    pub fn exported_names(&self) -> Result<Option<Vec<String>>> {
        if !self.snapshot.exists() {
            return Ok(None);
        }
        Ok(RegistrySnapshot::load(&self.snapshot, Category::SortingLayers)?.sorting_layers)
    }
}

impl SortingLayerNameSource for StablePublicSource {
    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        RegistrySnapshot::load(&self.snapshot, Category::SortingLayers)?
            .names(Category::SortingLayers)
    }
}

/// Reads the private `m_SortingLayers` field of `TagManager.asset`.
///
/// The field is not part of any documented format and has changed shape
/// between editor versions; any mismatch is reported as
/// [`Error::RegistryUnavailable`].
#[derive(Debug, Clone)]
pub struct UnstableIntrospectionSource {
    tag_manager: PathBuf,
}

impl UnstableIntrospectionSource {
    pub fn new(tag_manager: impl Into<PathBuf>) -> Self {
        Self {
            tag_manager: tag_manager.into(),
        }
    }

    pub fn tag_manager_path(&self) -> &Path {
        &self.tag_manager
    }
}

impl SortingLayerNameSource for UnstableIntrospectionSource {
    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        let asset = TagManagerAsset::load(&self.tag_manager, Category::SortingLayers)?;
        let value = asset.sorting_layers.ok_or_else(|| {
            unavailable("m_SortingLayers not found; the TagManager layout may have changed")
        })?;
        sorting_layer_names_from(&value)
    }
}

fn sorting_layer_names_from(value: &Value) -> Result<Vec<String>> {
    let entries = value
        .as_sequence()
        .ok_or_else(|| unavailable("m_SortingLayers is not a list"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .get("name")
                .and_then(scalar_to_string)
                .ok_or_else(|| unavailable(format!("m_SortingLayers[{}] has no name", i)))
        })
        .collect()
}

fn unavailable(reason: impl Into<String>) -> Box<Error> {
    Error::registry_unavailable(Category::SortingLayers, reason)
}

/// Uses the public export when the editor provides one and falls back to
/// introspection otherwise.
#[derive(Debug, Clone)]
pub struct PreferPublicSource {
    public: StablePublicSource,
    fallback: UnstableIntrospectionSource,
}

impl PreferPublicSource {
    pub fn new(public: StablePublicSource, fallback: UnstableIntrospectionSource) -> Self {
        Self { public, fallback }
    }
}

impl SortingLayerNameSource for PreferPublicSource {
    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        match self.public.exported_names()? {
            Some(names) => {
                tracing::debug!(
                    snapshot = %self.public.snapshot_path().display(),
                    "reading sorting layers from public export"
                );
                Ok(names)
            }
            None => {
                tracing::debug!(
                    asset = %self.fallback.tag_manager_path().display(),
                    "no public sorting layer export, falling back to introspection"
                );
                self.fallback.sorting_layer_names()
            }
        }
    }
}
