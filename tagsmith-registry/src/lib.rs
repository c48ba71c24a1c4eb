//! Host registry access for tagsmith.
//!
//! The editor owns three named registries: tags, layers and sorting layers.
//! This crate reads them through the [`Registry`] trait so the generator never
//! depends on how a particular host stores them.
//!
//! # Sources
//!
//! - [`UnityProject`] - reads `ProjectSettings/TagManager.asset`
//! - [`SnapshotRegistry`] - reads a TOML snapshot exported by the editor
//! - [`InMemoryRegistry`] - registries supplied directly by an embedding host
//!
//! Sorting layers are not part of the editor's stable surface, so they go
//! through a separate [`SortingLayerNameSource`].

mod entry;
mod memory;
mod open;
mod snapshot;
mod sorting;
mod unity;

pub use entry::{MAX_LAYERS, NamedRegistryEntry, read_entries};
pub use memory::InMemoryRegistry;
pub use open::open;
pub use snapshot::{RegistrySnapshot, SnapshotRegistry};
pub use sorting::{
    PreferPublicSource, SortingLayerNameSource, StablePublicSource, UnstableIntrospectionSource,
};
use tagsmith_core::Result;
pub use unity::{BUILTIN_TAGS, TAG_MANAGER_PATH, UnityProject};

/// Read access to the host editor's named registries.
///
/// Every call reads the current state; implementations must not cache.
pub trait Registry {
    /// All tag names currently defined.
    fn tag_names(&self) -> Result<Vec<String>>;

    /// Layer names, index-aligned starting at 0. Unused slots are empty strings.
    fn layer_names(&self) -> Result<Vec<String>>;

    /// Numeric index of a named layer.
    fn layer_index_of(&self, name: &str) -> Result<Option<u8>> {
        let names = self.layer_names()?;
        Ok(names
            .iter()
            .position(|n| n == name)
            .and_then(|i| u8::try_from(i).ok()))
    }

    /// Sorting layer names in the editor's order.
    fn sorting_layer_names(&self) -> Result<Vec<String>>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn tag_names(&self) -> Result<Vec<String>> {
        (**self).tag_names()
    }

    fn layer_names(&self) -> Result<Vec<String>> {
        (**self).layer_names()
    }

    fn layer_index_of(&self, name: &str) -> Result<Option<u8>> {
        (**self).layer_index_of(name)
    }

    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        (**self).sorting_layer_names()
    }
}

impl<R: Registry + ?Sized> Registry for Box<R> {
    fn tag_names(&self) -> Result<Vec<String>> {
        self.as_ref().tag_names()
    }

    fn layer_names(&self) -> Result<Vec<String>> {
        self.as_ref().layer_names()
    }

    fn layer_index_of(&self, name: &str) -> Result<Option<u8>> {
        self.as_ref().layer_index_of(name)
    }

    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        self.as_ref().sorting_layer_names()
    }
}
