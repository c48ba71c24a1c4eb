use clap::Args;
use eyre::{Context, Result};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let toml = self.project.load();
        let report = ops::list(toml.manifest(), self.project.root());

        if self.json {
            let json = serde_json::to_string_pretty(&report.to_json())
                .wrap_err("Failed to serialize registries")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
