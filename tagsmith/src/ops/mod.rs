//! Core operations.
//!
//! This module contains the business logic for tagsmith commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{generate, preview};
pub use list::list;
