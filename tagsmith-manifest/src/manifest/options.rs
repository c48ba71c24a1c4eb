//! Enumerated manifest options.

use std::fmt;

use serde::Deserialize;

/// Indentation of the generated class body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces(u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Name(String),
    Width(i64),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Name(name) if name.eq_ignore_ascii_case("tab") => Ok(IndentStyle::Tab),
            RawIndent::Name(name) => Err(format!(
                "unknown indent '{}', expected \"tab\" or a number of spaces",
                name
            )),
            RawIndent::Width(width @ 1..=8) => Ok(IndentStyle::Spaces(width as u8)),
            RawIndent::Width(width) => Err(format!(
                "indent width must be between 1 and 8, got {}",
                width
            )),
        }
    }
}

/// How layer bitmasks are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskStyle {
    /// `1 << 3`
    #[default]
    Shift,
    /// `8`
    Literal,
}

/// Which host data source provides the registries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryKind {
    /// `ProjectSettings/TagManager.asset` of a Unity project
    #[default]
    Unity,
    /// A registry snapshot file exported by the editor
    Snapshot,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Unity => write!(f, "unity"),
            RegistryKind::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// Where sorting-layer names come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortingLayerStrategy {
    /// Public export when the snapshot provides one, introspection otherwise
    #[default]
    Auto,
    /// Only the public export in the registry snapshot
    Public,
    /// Only the editor's private serialized field
    Introspection,
}

impl fmt::Display for SortingLayerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingLayerStrategy::Auto => write!(f, "auto"),
            SortingLayerStrategy::Public => write!(f, "public"),
            SortingLayerStrategy::Introspection => write!(f, "introspection"),
        }
    }
}
