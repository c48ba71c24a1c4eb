//! Core utilities and types for tagsmith.
//!
//! This crate provides the fundamental types shared by the registry
//! readers, the code generator, and the command-line tool.

mod category;
mod error;
mod file;
mod notify;
mod utils;

pub use category::Category;
pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
pub use notify::{AssetNotifier, LogNotifier};
// String utilities
pub use utils::{compare_case_insensitive, escape_string_literal, sanitize_identifier};
