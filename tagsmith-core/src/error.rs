use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::Category;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while building a single category.
///
/// Every variant is fatal for the category it names and leaves the other
/// categories untouched.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{category}: registry unavailable: {reason}")]
    #[diagnostic(
        code(tagsmith::registry_unavailable),
        help("check that the project settings exist and were saved by a supported editor version")
    )]
    RegistryUnavailable { category: Category, reason: String },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(tagsmith::filesystem))]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{category}: invalid identifier '{identifier}' for '{name}'")]
    #[diagnostic(
        code(tagsmith::invalid_identifier),
        help("{reason}. Rename the entry in the editor, e.g. prefix it with an underscore.")
    )]
    InvalidIdentifier {
        category: Category,
        name: String,
        identifier: String,
        reason: String,
    },
}

impl Error {
    /// Create a registry-unavailable error
    pub fn registry_unavailable(category: Category, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::RegistryUnavailable {
            category,
            reason: reason.into(),
        })
    }

    /// Create a filesystem error
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Filesystem {
            path: path.into(),
            source,
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        category: Category,
        name: impl Into<String>,
        identifier: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            category,
            name: name.into(),
            identifier: identifier.into(),
            reason: reason.into(),
        })
    }
}
