//! Check operation - strict dry build.

use std::path::Path;

use tagsmith_codegen::{GenerateOptions, Generator, identifier::IdentifierPolicy};
use tagsmith_core::Category;
use tagsmith_manifest::TagsmithToml;

use crate::reports::{CategoryCheck, CheckReport, describe_error};

/// Build every category under the strict identifier policy.
///
/// Nothing is written.
pub fn check(toml: &TagsmithToml, root: &Path) -> CheckReport {
    let manifest = toml.manifest();
    let registry = tagsmith_registry::open(manifest, root);
    let options = GenerateOptions::from_manifest(manifest).with_policy(IdentifierPolicy::Strict);
    let generator = Generator::new(registry).with_options(options);

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryCheck {
            category,
            result: generator
                .class_spec(category)
                .map(|spec| spec.blocks.first().map_or(0, |b| b.decls.len()))
                .map_err(|e| describe_error(category, &e)),
        })
        .collect();

    CheckReport {
        config_path: toml.path().to_path_buf(),
        config_exists: toml.exists(),
        categories,
    }
}
