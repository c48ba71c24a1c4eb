//! List operation - registry contents.

use std::path::Path;

use tagsmith_core::Category;
use tagsmith_manifest::Manifest;
use tagsmith_registry::read_entries;

use crate::reports::{CategoryListing, ListReport, describe_error};

/// Read every registry of the project at `root`, in registry order.
pub fn list(manifest: &Manifest, root: &Path) -> ListReport {
    let registry = tagsmith_registry::open(manifest, root);

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryListing {
            category,
            result: read_entries(registry.as_ref(), category)
                .map_err(|e| describe_error(category, &e)),
        })
        .collect();

    ListReport { categories }
}
