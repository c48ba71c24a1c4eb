//! Manifest types and parsing for tagsmith.toml files.

mod file;
mod options;
mod parse;

use std::path::PathBuf;

pub use file::{DEFAULT_MANIFEST, MANIFEST_FILE, TagsmithToml};
pub use options::{IndentStyle, MaskStyle, RegistryKind, SortingLayerStrategy};
use serde::Deserialize;

/// Root manifest for tagsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how the generated files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Where the registries are read from
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Identifier checks
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory, relative to the project root.
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub indent: IndentStyle,

    #[serde(default)]
    pub mask_style: MaskStyle,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("Assets").join("Scripts")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            indent: IndentStyle::default(),
            mask_style: MaskStyle::default(),
        }
    }
}

/// `[registry]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub source: RegistryKind,

    /// Registry snapshot exported by the editor, relative to the project root.
    #[serde(default = "RegistryConfig::default_snapshot")]
    pub snapshot: PathBuf,

    #[serde(default)]
    pub sorting_layers: SortingLayerStrategy,
}

impl RegistryConfig {
    fn default_snapshot() -> PathBuf {
        PathBuf::from("ProjectSettings").join("tagsmith-registry.toml")
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            source: RegistryKind::default(),
            snapshot: Self::default_snapshot(),
            sorting_layers: SortingLayerStrategy::default(),
        }
    }
}

/// `[validation]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject identifiers that are empty, start with a digit, or collide.
    #[serde(default)]
    pub strict: bool,
}
