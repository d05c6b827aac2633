mod case;
mod completions;
mod inflect;
mod list;
mod render;
mod tokens;

use case::CaseCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use inflect::{PluralCommand, SingularCommand};
use list::ListCommand;
use render::RenderCommand;
use tokens::TokensCommand;

/// Extension trait for exiting on variable errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::vars::Result<T> {
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
#[command(name = "quire")]
#[command(version)]
#[command(about = "Naming helpers and template rendering for code generators")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Case(cmd) => cmd.run(),
            Commands::Tokens(cmd) => cmd.run(),
            Commands::Plural(cmd) => cmd.run(),
            Commands::Singular(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert strings to a case style
    Case(CaseCommand),

    /// Show how a string is split into words
    Tokens(TokensCommand),

    /// Pluralize nouns
    Plural(PluralCommand),

    /// Singularize nouns
    Singular(SingularCommand),

    /// Render a template file
    Render(RenderCommand),

    /// List template filters and functions
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
