//! Manifest parsing from files and strings.

use std::str::FromStr;

use super::{Manifest, RegistryKind, SortingLayerStrategy};
use crate::{Error, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "tagsmith.toml")
    }
}

impl Manifest {
    /// Parse a tagsmith.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Whether the sorting layers may be read from the registry snapshot.
    pub fn uses_snapshot(&self) -> bool {
        self.registry.source == RegistryKind::Snapshot
            || self.registry.sorting_layers != SortingLayerStrategy::Introspection
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.output.dir.as_os_str().is_empty() {
        return Err(ctx.validation_error("dir", "output directory cannot be empty"));
    }

    if manifest.registry.snapshot.as_os_str().is_empty() && manifest.uses_snapshot() {
        return Err(ctx.validation_error(
            "snapshot",
            "snapshot path cannot be empty when the registry snapshot is used",
        ));
    }

    if manifest.registry.source == RegistryKind::Snapshot
        && manifest.registry.sorting_layers == SortingLayerStrategy::Introspection
    {
        return Err(ctx.validation_error(
            "sorting_layers",
            "introspection needs TagManager.asset; use source = \"unity\" or sorting_layers = \"public\"",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{IndentStyle, MaskStyle};

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.output.dir, PathBuf::from("Assets").join("Scripts"));
        assert_eq!(manifest.output.indent, IndentStyle::Tab);
        assert_eq!(manifest.output.mask_style, MaskStyle::Shift);
        assert_eq!(manifest.registry.source, RegistryKind::Unity);
        assert_eq!(manifest.registry.sorting_layers, SortingLayerStrategy::Auto);
        assert!(!manifest.validation.strict);
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [output]
            dir = "Assets/Generated"
            indent = 4
            mask_style = "literal"

            [registry]
            source = "snapshot"
            snapshot = "registry.toml"
            sorting_layers = "public"

            [validation]
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(manifest.output.dir, PathBuf::from("Assets/Generated"));
        assert_eq!(manifest.output.indent, IndentStyle::Spaces(4));
        assert_eq!(manifest.output.mask_style, MaskStyle::Literal);
        assert_eq!(manifest.registry.source, RegistryKind::Snapshot);
        assert_eq!(manifest.registry.snapshot, PathBuf::from("registry.toml"));
        assert_eq!(manifest.registry.sorting_layers, SortingLayerStrategy::Public);
        assert!(manifest.validation.strict);
    }

    #[test]
    fn test_indent_tab_is_case_insensitive() {
        let manifest = Manifest::from_str("[output]\nindent = \"Tab\"\n").unwrap();
        assert_eq!(manifest.output.indent, IndentStyle::Tab);
    }

    #[test]
    fn test_invalid_indent_is_parse_error() {
        let err = Manifest::from_str("[output]\nindent = 12\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));

        let err = Manifest::from_str("[output]\nindent = \"spaces\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Manifest::from_str("[output]\nnamespace = \"Game\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_sorting_layer_strategy() {
        let err = Manifest::from_str("[registry]\nsorting_layers = \"reflection\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_output_dir_is_validation_error() {
        let err = Manifest::from_str("[output]\ndir = \"\"\n").unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "output directory cannot be empty");
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_source_cannot_introspect() {
        let err = Manifest::from_str(
            "[registry]\nsource = \"snapshot\"\nsorting_layers = \"introspection\"\n",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
