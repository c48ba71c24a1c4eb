use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// File name of the manifest at the project root.
pub const MANIFEST_FILE: &str = "tagsmith.toml";

/// Content written by `tagsmith init`.
pub const DEFAULT_MANIFEST: &str = r#"[output]
# Directory for Tags.cs, Layers.cs and SortingLayers.cs, relative to the project root
dir = "Assets/Scripts"
# "tab" or a number of spaces
indent = "tab"
# "shift" (1 << 3) or "literal" (8)
mask_style = "shift"

[registry]
# "unity" reads ProjectSettings/TagManager.asset, "snapshot" reads the file below
source = "unity"
snapshot = "ProjectSettings/tagsmith-registry.toml"
# "auto", "public" or "introspection"
sorting_layers = "auto"

[validation]
# Fail on identifiers that are empty, start with a digit, or collide
strict = false
"#;

/// Represents a tagsmith.toml file with both raw content and parsed manifest.
pub struct TagsmithToml {
    path: PathBuf,
    content: Option<String>,
    manifest: Manifest,
}

impl TagsmithToml {
    /// Open and parse a tagsmith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content: Some(content),
            manifest,
        })
    }

    /// Open the manifest, falling back to defaults when the file does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: None,
                manifest: Manifest::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content, if the file exists.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Whether the manifest was read from disk.
    pub fn exists(&self) -> bool {
        self.content.is_some()
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_manifest_parses_to_defaults() {
        let manifest = Manifest::from_str(DEFAULT_MANIFEST).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let toml = TagsmithToml::open_or_default(temp.path().join(MANIFEST_FILE)).unwrap();

        assert!(!toml.exists());
        assert!(toml.content().is_none());
        assert_eq!(toml.manifest(), &Manifest::default());
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "[validation]\nstrict = true\n").unwrap();

        let toml = TagsmithToml::open_or_default(&path).unwrap();
        assert!(toml.exists());
        assert!(toml.manifest().validation.strict);
        assert_eq!(toml.path(), path);
    }
}
