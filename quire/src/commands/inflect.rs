use clap::Args;
use eyre::Result;
use quire_text::{pluralize, singularize};

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct PluralCommand {
    /// Singular nouns
    #[arg(required = true)]
    words: Vec<String>,
}

impl PluralCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        for word in &self.words {
            out.preformatted(&pluralize(word));
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct SingularCommand {
    /// Plural nouns
    #[arg(required = true)]
    words: Vec<String>,
}

impl SingularCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        for word in &self.words {
            out.preformatted(&singularize(word));
        }
        Ok(())
    }
}
