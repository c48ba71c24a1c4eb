//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

use tagsmith_core::{Category, Error};

pub use check::{CategoryCheck, CheckReport};
pub use generate::{GenerateReport, GeneratedEntry, PreviewFile, PreviewReport};
pub use list::{CategoryListing, ListReport};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};

/// One-line description of a category failure that names the category.
pub fn describe_error(category: Category, err: &Error) -> String {
    match err {
        Error::RegistryUnavailable { .. } => err.to_string(),
        Error::Filesystem { source, .. } => format!("{}: {}: {}", category, err, source),
        Error::InvalidIdentifier { reason, .. } => format!("{} ({})", err, reason),
    }
}
