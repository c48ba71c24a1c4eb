//! Identifier policies.
//!
//! Identifiers are registry names with spaces removed. By default nothing
//! else is checked: a name that starts with a digit or collides with another
//! after sanitizing produces code that fails to compile, and renaming the
//! entry in the editor is left to the user. [`IdentifierPolicy::Strict`]
//! reports those cases instead.

use indexmap::IndexMap;
use tagsmith_core::{Error, Result};

use crate::decl::ClassSpec;

/// How generated identifiers are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Emit every identifier as-is.
    #[default]
    Permissive,
    /// Reject empty, digit-leading, and duplicate identifiers.
    Strict,
}

impl IdentifierPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    /// Check every declaration of the class, in output order.
    pub fn check(&self, spec: &ClassSpec) -> Result<()> {
        if *self == IdentifierPolicy::Permissive {
            return Ok(());
        }

        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for decl in spec.decls() {
            let reason = if decl.identifier.is_empty() {
                Some("the name has no characters left after removing spaces".to_string())
            } else if decl.identifier.starts_with(|c: char| c.is_ascii_digit()) {
                Some("identifiers cannot start with a digit".to_string())
            } else if let Some(first) = seen.get(decl.identifier.as_str()) {
                Some(format!("'{}' already declares the same identifier", first))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(Error::invalid_identifier(
                    spec.category,
                    &decl.source_name,
                    &decl.identifier,
                    reason,
                ));
            }

            seen.insert(&decl.identifier, &decl.source_name);
        }

        Ok(())
    }
}
