//! Generate operation - write or preview the constants files.

use std::path::Path;

use tagsmith_codegen::{GenerateOptions, Generator};
use tagsmith_core::{GeneratedFile, LogNotifier};
use tagsmith_manifest::Manifest;

use crate::reports::{
    GenerateReport, GeneratedEntry, PreviewFile, PreviewReport, describe_error,
};

/// Regenerate every category of the project at `root`.
pub fn generate(manifest: &Manifest, root: &Path) -> GenerateReport {
    let output_dir = root.join(&manifest.output.dir);
    let registry = tagsmith_registry::open(manifest, root);
    let generator =
        Generator::new(registry).with_options(GenerateOptions::from_manifest(manifest));

    tracing::debug!(output = %output_dir.display(), "generating");
    let result = generator.generate(&output_dir, &LogNotifier);

    GenerateReport {
        entries: result.outcomes.iter().map(GeneratedEntry::from).collect(),
        output_dir,
    }
}

/// Build every category without touching the output directory.
pub fn preview(manifest: &Manifest, root: &Path) -> PreviewReport {
    let output_dir = root.join(&manifest.output.dir);
    let registry = tagsmith_registry::open(manifest, root);
    let generator =
        Generator::new(registry).with_options(GenerateOptions::from_manifest(manifest));

    let mut files = Vec::new();
    let mut failures = Vec::new();
    for (category, built) in generator.build_all() {
        match built {
            Ok(class) => files.push(PreviewFile {
                path: class.path(&output_dir),
                content: class.content,
            }),
            Err(e) => failures.push(describe_error(category, &e)),
        }
    }

    PreviewReport { files, failures }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn snapshot_project(content: &str) -> (TempDir, Manifest) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("registry.toml"), content).unwrap();
        let manifest: Manifest = r#"
            [registry]
            source = "snapshot"
            snapshot = "registry.toml"
            sorting_layers = "public"
        "#
        .parse()
        .unwrap();
        (temp, manifest)
    }

    #[test]
    fn test_generate_from_snapshot() {
        let (temp, manifest) = snapshot_project(
            r#"
            tags = ["Player"]
            layers = ["Default", "", "", "", "Water"]
            sorting_layers = ["Default"]
            "#,
        );

        let report = generate(&manifest, temp.path());

        assert!(report.is_success());
        let layers =
            fs::read_to_string(temp.path().join("Assets/Scripts/Layers.cs")).unwrap();
        assert!(layers.contains("\tpublic const int WaterMask = 1 << 4;\n"));
        assert!(layers.contains("\tpublic const int WaterNumber = 4;\n"));
    }

    #[test]
    fn test_preview_writes_nothing() {
        let (temp, manifest) = snapshot_project(
            r#"
            tags = ["Player"]
            layers = ["Default"]
            "#,
        );

        let report = preview(&manifest, temp.path());

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].starts_with("SortingLayers: registry unavailable"));
        assert!(!temp.path().join("Assets").exists());
    }
}
