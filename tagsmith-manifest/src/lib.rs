// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `tagsmith.toml`.
//!
//! The manifest is optional: a project without one is generated with
//! [`Manifest::default`].

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MANIFEST, IndentStyle, MANIFEST_FILE, Manifest, MaskStyle, OutputConfig, RegistryConfig,
    RegistryKind, SortingLayerStrategy, TagsmithToml, ValidationConfig,
};
