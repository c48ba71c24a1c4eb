use std::path::Path;

use tagsmith_manifest::{Manifest, RegistryKind, SortingLayerStrategy};

use crate::{
    PreferPublicSource, Registry, SnapshotRegistry, SortingLayerNameSource, StablePublicSource,
    TAG_MANAGER_PATH, UnityProject, UnstableIntrospectionSource,
};

/// Build the registry described by the manifest for the project at `root`.
pub fn open(manifest: &Manifest, root: &Path) -> Box<dyn Registry> {
    let snapshot = root.join(&manifest.registry.snapshot);
    let tag_manager = root.join(TAG_MANAGER_PATH);

    let sorting: Box<dyn SortingLayerNameSource> =
        match (manifest.registry.sorting_layers, manifest.registry.source) {
            (SortingLayerStrategy::Introspection, _) => {
                Box::new(UnstableIntrospectionSource::new(tag_manager))
            }
            (SortingLayerStrategy::Public, _)
            | (SortingLayerStrategy::Auto, RegistryKind::Snapshot) => {
                Box::new(StablePublicSource::new(snapshot.clone()))
            }
            (SortingLayerStrategy::Auto, RegistryKind::Unity) => Box::new(PreferPublicSource::new(
                StablePublicSource::new(snapshot.clone()),
                UnstableIntrospectionSource::new(tag_manager),
            )),
        };

    tracing::debug!(
        source = %manifest.registry.source,
        sorting_layers = %manifest.registry.sorting_layers,
        root = %root.display(),
        "opening registry"
    );

    match manifest.registry.source {
        RegistryKind::Unity => Box::new(UnityProject::new(root).with_sorting_source(sorting)),
        RegistryKind::Snapshot => {
            Box::new(SnapshotRegistry::new(snapshot).with_sorting_source(sorting))
        }
    }
}
