use std::path::{Path, PathBuf};

use clap::Args;
use tagsmith_manifest::{MANIFEST_FILE, TagsmithToml};

use super::UnwrapOrExit;

/// Arguments locating the project and its manifest.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Path to tagsmith.toml (defaults to <project>/tagsmith.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for ProjectArgs {
    fn default() -> Self {
        Self {
            project: PathBuf::from("."),
            config: None,
        }
    }
}

impl ProjectArgs {
    pub fn root(&self) -> &Path {
        &self.project
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.project.join(MANIFEST_FILE))
    }

    /// Load the manifest, using defaults when the file is absent.
    ///
    /// An explicitly passed config must exist.
    pub fn load(&self) -> TagsmithToml {
        let path = self.config_path();
        if self.config.is_some() {
            TagsmithToml::open(&path).unwrap_or_exit()
        } else {
            TagsmithToml::open_or_default(&path).unwrap_or_exit()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_is_under_project() {
        let args = ProjectArgs {
            project: PathBuf::from("Game"),
            config: None,
        };
        assert_eq!(args.config_path(), Path::new("Game").join("tagsmith.toml"));
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = ProjectArgs {
            project: temp.path().to_path_buf(),
            config: None,
        };
        let toml = args.load();
        assert!(!toml.exists());
        assert_eq!(toml.manifest(), &tagsmith_manifest::Manifest::default());
    }
}
