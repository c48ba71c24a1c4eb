//! Unity project settings.
//!
//! Tags and layers are public, documented fields of
//! `ProjectSettings/TagManager.asset`. The file is YAML with Unity-specific
//! directives that are stripped before parsing:
//!
//! ```yaml
//! %YAML 1.1
//! %TAG !u! tag:unity3d.com,2011:
//! --- !u!78 &1
//! TagManager:
//!   serializedVersion: 2
//!   tags:
//!   - Enemy
//!   layers:
//!   - Default
//!   - TransparentFX
//!   -
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;
use tagsmith_core::{Category, Error, Result};

use crate::{Registry, SortingLayerNameSource, UnstableIntrospectionSource};

/// Location of the tag manager asset inside a project.
pub const TAG_MANAGER_PATH: &str = "ProjectSettings/TagManager.asset";

/// Tags every Unity project has. The asset only stores user-defined tags.
pub const BUILTIN_TAGS: [&str; 7] = [
    "Untagged",
    "Respawn",
    "Finish",
    "EditorOnly",
    "MainCamera",
    "Player",
    "GameController",
];

#[derive(Debug, Deserialize)]
struct TagManagerDocument {
    #[serde(rename = "TagManager")]
    tag_manager: TagManagerAsset,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagManagerAsset {
    #[serde(default)]
    tags: Vec<Value>,
    #[serde(default)]
    layers: Vec<Value>,
    /// Private serialized field, deliberately left untyped.
    #[serde(rename = "m_SortingLayers")]
    pub(crate) sorting_layers: Option<Value>,
}

impl TagManagerAsset {
    /// Read and parse the asset. Errors are attributed to `category`.
    pub(crate) fn load(path: &Path, category: Category) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::registry_unavailable(
                category,
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::parse(&content, category)
    }

    pub(crate) fn parse(content: &str, category: Category) -> Result<Self> {
        let document: TagManagerDocument = serde_yaml::from_str(&strip_unity_directives(content))
            .map_err(|e| {
                Error::registry_unavailable(category, format!("invalid TagManager.asset: {}", e))
            })?;
        Ok(document.tag_manager)
    }

    /// User-defined tags. Empty entries carry no name and are skipped.
    fn tag_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(self.tags.len());
        for (i, value) in self.tags.iter().enumerate() {
            if let Some(name) = entry_name(value, Category::Tags, "tags", i)? {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Layer slots; an empty entry is an unused slot.
    fn layer_names(&self) -> Result<Vec<String>> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, value)| {
                Ok(entry_name(value, Category::Layers, "layers", i)?.unwrap_or_default())
            })
            .collect()
    }
}

fn entry_name(value: &Value, category: Category, key: &str, i: usize) -> Result<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(value).map(Some).ok_or_else(|| {
        Error::registry_unavailable(category, format!("{}[{}] is not a name", key, i))
    })
}

/// Names that look like numbers or booleans are still names.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Drop `%YAML`/`%TAG` directives and the `!u!` tag on document markers,
/// and quote plain sequence items.
fn strip_unity_directives(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('%'))
        .map(|line| {
            if line.starts_with("---") {
                "---".to_string()
            } else {
                quote_sequence_item(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a plain scalar list item so names such as `null`, `~` or `1.50`
/// keep their text. Empty items stay null.
fn quote_sequence_item(line: &str) -> String {
    let trimmed = line.trim_start();
    let Some(item) = trimmed.strip_prefix("- ") else {
        return line.to_string();
    };
    let item = item.trim_end();
    let is_plain = !item.is_empty()
        && !item.starts_with(['\'', '"', '{', '[', '&', '*', '!', '|', '>', '#'])
        && !item.contains(": ")
        && !item.ends_with(':')
        && !item.contains(" #");
    if !is_plain {
        return line.to_string();
    }

    let indent = &line[..line.len() - trimmed.len()];
    format!("{}- '{}'", indent, item.replace('\'', "''"))
}

/// Registries of a Unity project, read from its settings on every call.
pub struct UnityProject {
    root: PathBuf,
    sorting: Box<dyn SortingLayerNameSource>,
}

impl UnityProject {
    /// Open a project; sorting layers are read through introspection.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            sorting: Box::new(UnstableIntrospectionSource::new(root.join(TAG_MANAGER_PATH))),
            root,
        }
    }

    /// Use a different sorting-layer source.
    pub fn with_sorting_source(mut self, source: Box<dyn SortingLayerNameSource>) -> Self {
        self.sorting = source;
        self
    }

    pub fn tag_manager_path(&self) -> PathBuf {
        self.root.join(TAG_MANAGER_PATH)
    }
}

impl Registry for UnityProject {
    fn tag_names(&self) -> Result<Vec<String>> {
        let asset = TagManagerAsset::load(&self.tag_manager_path(), Category::Tags)?;
        Ok(BUILTIN_TAGS
            .into_iter()
            .map(String::from)
            .chain(asset.tag_names()?)
            .collect())
    }

    fn layer_names(&self) -> Result<Vec<String>> {
        TagManagerAsset::load(&self.tag_manager_path(), Category::Layers)?.layer_names()
    }

    fn sorting_layer_names(&self) -> Result<Vec<String>> {
        self.sorting.sorting_layer_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  serializedVersion: 2
  tags:
  - Enemy
  - Player One
  layers:
  - Default
  - TransparentFX
  - Ignore Raycast
  - 
  - Water
  - UI
  m_SortingLayers:
  - name: Default
    uniqueID: 0
    locked: 0
";

    #[test]
    fn test_strip_unity_directives() {
        let stripped = strip_unity_directives(ASSET);
        assert!(stripped.starts_with("---\nTagManager:"));
        assert!(!stripped.contains("%TAG"));
    }

    #[test]
    fn test_parse_asset() {
        let asset = TagManagerAsset::parse(ASSET, Category::Tags).unwrap();
        assert_eq!(asset.tag_names().unwrap(), ["Enemy", "Player One"]);
        let layers = asset.layer_names().unwrap();
        assert_eq!(layers.len(), 6);
        assert_eq!(layers[3], "");
        assert_eq!(layers[4], "Water");
        assert!(asset.sorting_layers.is_some());
    }

    #[test]
    fn test_parse_garbage_is_unavailable() {
        let err = TagManagerAsset::parse("just text", Category::Layers).unwrap_err();
        assert!(matches!(
            *err,
            Error::RegistryUnavailable {
                category: Category::Layers,
                ..
            }
        ));
    }

    #[test]
    fn test_null_like_names_are_kept() {
        let asset = TagManagerAsset::parse(
            "--- !u!78 &1\nTagManager:\n  tags:\n  - null\n  - ~\n  - Boss\n  layers:\n  - Default\n  - Null\n  - \n  - 1.50\n",
            Category::Tags,
        )
        .unwrap();

        assert_eq!(asset.tag_names().unwrap(), ["null", "~", "Boss"]);
        assert_eq!(asset.layer_names().unwrap(), ["Default", "Null", "", "1.50"]);
    }

    #[test]
    fn test_quote_sequence_item() {
        assert_eq!(quote_sequence_item("  - null"), "  - 'null'");
        assert_eq!(quote_sequence_item("  - It's"), "  - 'It''s'");
        assert_eq!(quote_sequence_item("  - "), "  - ");
        assert_eq!(quote_sequence_item("  - name: Default"), "  - name: Default");
        assert_eq!(quote_sequence_item("  tags:"), "  tags:");
    }

    #[test]
    fn test_nested_entry_is_unavailable() {
        let asset =
            TagManagerAsset::parse("TagManager:\n  tags:\n  - {a: 1}\n", Category::Tags).unwrap();
        let err = asset.tag_names().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tags: registry unavailable: tags[0] is not a name"
        );
    }
}
