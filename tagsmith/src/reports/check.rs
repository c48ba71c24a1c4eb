//! Check command report data structures.

use std::path::PathBuf;

use tagsmith_core::Category;

use super::output::{Output, Report};

/// Result of building one category under strict checks.
#[derive(Debug)]
pub struct CategoryCheck {
    pub category: Category,
    /// Number of entries, or the problem that stopped the build.
    pub result: Result<usize, String>,
}

/// Report data from a strict dry build.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether the config file exists.
    pub config_exists: bool,
    pub categories: Vec<CategoryCheck>,
}

impl CheckReport {
    /// Whether every category built cleanly.
    pub fn is_valid(&self) -> bool {
        self.categories.iter().all(|c| c.result.is_ok())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.config_exists {
            out.warning(&format!(
                "{} not found, using defaults",
                self.config_path.display()
            ));
        }

        for check in &self.categories {
            match &check.result {
                Ok(count) => out.success(&format!(
                    "{}: {} entr{}",
                    check.category.class_name(),
                    count,
                    if *count == 1 { "y" } else { "ies" }
                )),
                Err(problem) => out.error(problem),
            }
        }

        if self.is_valid() {
            out.newline();
            out.preformatted("All files can be generated");
        }
    }
}
