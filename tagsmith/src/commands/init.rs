use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tagsmith_core::{File, FileRules, WriteResult};
use tagsmith_manifest::{DEFAULT_MANIFEST, MANIFEST_FILE};

#[derive(Args)]
pub struct InitCommand {
    /// Project root (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.project.join(MANIFEST_FILE);
        let written = File::new(&path, DEFAULT_MANIFEST)
            .with_rules(FileRules::if_missing())
            .write()
            .wrap_err_with(|| format!("Failed to create {}", path.display()))?;

        match written {
            WriteResult::Written => println!("✓ Created {}", path.display()),
            WriteResult::Skipped => {
                println!("{} already exists, leaving it as is", path.display())
            }
        }
        Ok(())
    }
}
