use std::path::{Path, PathBuf};

use tagsmith_core::{Category, FileRules, GeneratedFile};

/// A rendered constants file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub category: Category,
    pub content: String,
}

impl GeneratedFile for GeneratedClass {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.category.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
