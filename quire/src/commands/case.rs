use clap::Args;
use eyre::Result;
use quire_text::CaseStyle;

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct CaseCommand {
    /// Case style: kebab, snake, scream, camel, pascal, capitalize or slug
    style: CaseStyle,

    /// Strings to convert, one result per line
    #[arg(required = true)]
    inputs: Vec<String>,
}

impl CaseCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        for input in &self.inputs {
            out.preformatted(&self.style.render(input));
        }
        Ok(())
    }
}
