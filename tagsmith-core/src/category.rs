//! Registry categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three named registries maintained by the host editor.
///
/// Each category produces exactly one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Tag names
    Tags,
    /// Physics/render layer names, index-aligned 0..31
    Layers,
    /// 2D sorting layer names
    SortingLayers,
}

impl Category {
    /// All categories, in generation order.
    pub const ALL: [Category; 3] = [Category::Tags, Category::Layers, Category::SortingLayers];

    /// Returns the category identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tags => "tags",
            Category::Layers => "layers",
            Category::SortingLayers => "sorting-layers",
        }
    }

    /// Name of the generated class.
    pub fn class_name(&self) -> &'static str {
        match self {
            Category::Tags => "Tags",
            Category::Layers => "Layers",
            Category::SortingLayers => "SortingLayers",
        }
    }

    /// Name of the generated file.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Tags => "Tags.cs",
            Category::Layers => "Layers.cs",
            Category::SortingLayers => "SortingLayers.cs",
        }
    }

    /// Whether entries are emitted in case-insensitive order.
    ///
    /// Layers keep the registry's index order.
    pub fn is_sorted(&self) -> bool {
        !matches!(self, Category::Layers)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
