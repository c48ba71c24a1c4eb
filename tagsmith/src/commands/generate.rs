use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let toml = self.project.load();
        let mut out = TerminalOutput::new();

        let success = if self.dry_run {
            let report = ops::preview(toml.manifest(), self.project.root());
            report.render(&mut out);
            report.is_success()
        } else {
            let report = ops::generate(toml.manifest(), self.project.root());
            report.render(&mut out);
            report.is_success()
        };

        if !success {
            std::process::exit(1);
        }
        Ok(())
    }
}
