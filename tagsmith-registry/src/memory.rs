//! Registries held in memory.

use std::collections::HashSet;

use tagsmith_core::{Category, Error, Result};

use crate::Registry;

/// Registries supplied directly by an embedding host.
///
/// # Example
///
/// ```
/// use tagsmith_registry::{InMemoryRegistry, Registry};
///
/// let registry = InMemoryRegistry::new()
///     .tags(["Player", "Enemy"])
///     .layers(["Default", "TransparentFX"]);
///
/// assert_eq!(registry.layer_index_of("TransparentFX").unwrap(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    tags: Vec<String>,
    layers: Vec<String>,
    sorting_layers: Vec<String>,
    missing: HashSet<Category>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag names.
    pub fn tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the layer names, index-aligned from 0.
    pub fn layers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Place a layer at a specific index, leaving unused slots empty.
    pub fn layer(mut self, index: usize, name: impl Into<String>) -> Self {
        if self.layers.len() <= index {
            self.layers.resize(index + 1, String::new());
        }
        self.layers[index] = name.into();
        self
    }

    /// Set the sorting layer names.
    pub fn sorting_layers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sorting_layers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Mark a registry as not provided by the host.
    pub fn without(mut self, category: Category) -> Self {
        self.missing.insert(category);
        self
    }

    fn get(&self, category: Category, names: &[String]) -> Result<Vec<String>> {
        if self.missing.contains(&category) {
            return Err(Error::registry_unavailable(
                category,
                "not provided by the host",
            ));
        }
        Ok(names.to_vec())
    }
}

impl Registry for InMemoryRegistry {
    fn tag_names(&self) -> Result<Vec<String>> {
        self.get(Category::Tags, &self.tags)
    }

    fn layer_names(&self) -> Result<Vec<String>> {
        self.get(Category::Layers, &self.layers)
    }

    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        self.get(Category::SortingLayers, &self.sorting_layers)
    }
}
