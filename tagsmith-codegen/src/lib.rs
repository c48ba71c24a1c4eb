//! Constant class generation for tagsmith.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent)
//! - [`decl`] - Declaration records (ClassSpec, ConstDecl, ConstValue)
//! - [`csharp`] - Rendering declaration records to C#
//! - [`identifier`] - Identifier policies
//! - [`Generator`] - Registry to files

pub mod builder;
pub mod csharp;
pub mod decl;
pub mod identifier;

mod categories;
mod files;
mod generator;

pub use categories::class_spec;
pub use files::GeneratedClass;
pub use generator::{CategoryOutcome, GenerateOptions, GenerateResult, Generator};
