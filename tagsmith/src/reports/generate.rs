//! Generate command report data structures.

use std::path::PathBuf;

use tagsmith_codegen::CategoryOutcome;
use tagsmith_core::Category;

use super::{
    describe_error,
    output::{Output, Report},
};

/// What happened to one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    Failed(String),
}

#[derive(Debug)]
pub struct GeneratedEntry {
    pub category: Category,
    pub path: PathBuf,
    pub status: FileStatus,
}

impl From<&CategoryOutcome> for GeneratedEntry {
    fn from(outcome: &CategoryOutcome) -> Self {
        let status = match &outcome.result {
            Ok(_) => FileStatus::Written,
            Err(e) => FileStatus::Failed(describe_error(outcome.category, e)),
        };
        Self {
            category: outcome.category,
            path: outcome.path.clone(),
            status,
        }
    }
}

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub entries: Vec<GeneratedEntry>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|e| matches!(e.status, FileStatus::Failed(_)))
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let dir = self.output_dir.display();
        for entry in &self.entries {
            let file = entry.category.file_name();
            match &entry.status {
                FileStatus::Written => out.success(&format!("{} written to {}", file, dir)),
                FileStatus::Failed(reason) => out.error(reason),
            }
        }
    }
}

/// A file as it would be written.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
    pub failures: Vec<String>,
}

impl PreviewReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        for failure in &self.failures {
            out.error(failure);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
    }
}
