mod check;
mod completions;
mod generate;
mod init;
mod list;
mod project;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
pub(crate) use project::ProjectArgs;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(version)]
#[command(about = "Generate constants classes for tags, layers, and sorting layers")]
pub(crate) struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => GenerateCommand::default().run(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::List(cmd)) => cmd.run(),
            Some(Commands::Init(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate Tags.cs, Layers.cs and SortingLayers.cs (the default)
    Generate(GenerateCommand),

    /// Build every file under strict identifier checks without writing
    Check(CheckCommand),

    /// Print the registries as the generator reads them
    List(ListCommand),

    /// Write a default tagsmith.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
