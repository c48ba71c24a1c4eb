//! Registry entries as the generator consumes them.

use serde::Serialize;
use tagsmith_core::{Category, Error, Result};

use crate::Registry;

/// Number of layer slots the editor provides.
pub const MAX_LAYERS: usize = 32;

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRegistryEntry {
    pub category: Category,
    /// Name exactly as the editor stores it.
    pub name: String,
    /// Layer slot, only set for [`Category::Layers`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u8>,
}

/// Read the entries of one category in registry order.
///
/// Unused layer slots are skipped and every remaining layer is resolved to
/// its index. Nothing is sorted here.
pub fn read_entries(registry: &dyn Registry, category: Category) -> Result<Vec<NamedRegistryEntry>> {
    let entries = match category {
        Category::Tags => plain_entries(category, registry.tag_names()?),
        Category::SortingLayers => plain_entries(category, registry.sorting_layer_names()?),
        Category::Layers => layer_entries(registry)?,
    };

    tracing::debug!(%category, count = entries.len(), "read registry entries");
    Ok(entries)
}

fn plain_entries(category: Category, names: Vec<String>) -> Vec<NamedRegistryEntry> {
    names
        .into_iter()
        .map(|name| NamedRegistryEntry {
            category,
            name,
            index: None,
        })
        .collect()
}

/// Each layer's index is its slot in `layer_names`.
fn layer_entries(registry: &dyn Registry) -> Result<Vec<NamedRegistryEntry>> {
    let mut entries = Vec::new();

    for (slot, name) in registry.layer_names()?.into_iter().enumerate() {
        if name.is_empty() {
            continue;
        }

        let index = u8::try_from(slot)
            .ok()
            .filter(|i| usize::from(*i) < MAX_LAYERS)
            .ok_or_else(|| {
                Error::registry_unavailable(
                    Category::Layers,
                    format!(
                        "layer '{}' has index {}, expected 0..{}",
                        name,
                        slot,
                        MAX_LAYERS - 1
                    ),
                )
            })?;

        entries.push(NamedRegistryEntry {
            category: Category::Layers,
            name,
            index: Some(index),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::InMemoryRegistry;

    #[test]
    fn test_tags_keep_registry_order() {
        let registry = InMemoryRegistry::new().tags(["Enemy", "player", "NPC"]);
        let names: Vec<_> = read_entries(&registry, Category::Tags)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Enemy", "player", "NPC"]);
    }

    #[test]
    fn test_layers_skip_unused_slots() {
        let registry = InMemoryRegistry::new()
            .layer(0, "Default")
            .layer(4, "Water")
            .layer(5, "UI");

        let entries = read_entries(&registry, Category::Layers).unwrap();
        let pairs: Vec<_> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.index))
            .collect();
        assert_eq!(
            pairs,
            [("Default", Some(0)), ("Water", Some(4)), ("UI", Some(5))]
        );
    }

    #[test]
    fn test_layer_index_above_31_is_rejected() {
        let registry = InMemoryRegistry::new().layer(32, "Overflow");
        let err = read_entries(&registry, Category::Layers).unwrap_err();
        assert!(matches!(
            *err,
            Error::RegistryUnavailable {
                category: Category::Layers,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_layer_names_keep_their_own_slot() {
        let registry = InMemoryRegistry::new().layer(3, "Water").layer(7, "Water");

        let indices: Vec<_> = read_entries(&registry, Category::Layers)
            .unwrap()
            .into_iter()
            .map(|e| e.index)
            .collect();
        assert_eq!(indices, [Some(3), Some(7)]);
    }

    #[test]
    fn test_layers_read_registry_once() {
        struct Counting(Cell<usize>);

        impl Registry for Counting {
            fn tag_names(&self) -> Result<Vec<String>> {
                Ok(Vec::new())
            }

            fn layer_names(&self) -> Result<Vec<String>> {
                self.0.set(self.0.get() + 1);
                Ok(vec!["Default".to_string(), "Water".to_string(), "UI".to_string()])
            }

            fn sorting_layer_names(&self) -> Result<Vec<String>> {
                Ok(Vec::new())
            }
        }

        let registry = Counting(Cell::new(0));
        let entries = read_entries(&registry, Category::Layers).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(registry.0.get(), 1);
    }

    #[test]
    fn test_unavailable_registry_propagates() {
        let registry = InMemoryRegistry::new().without(Category::SortingLayers);
        assert!(read_entries(&registry, Category::SortingLayers).is_err());
        assert!(read_entries(&registry, Category::Tags).is_ok());
    }
}
