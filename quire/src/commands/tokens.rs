use clap::Args;
use eyre::Result;

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct TokensCommand {
    /// String to split into words
    input: String,

    /// Also print the byte range of each word
    #[arg(long)]
    spans: bool,
}

impl TokensCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        for token in quire_text::tokens(&self.input) {
            if self.spans {
                let span = token.span();
                out.preformatted(&format!("{}..{}\t{}", span.start, span.end, token));
            } else {
                out.preformatted(&token);
            }
        }
        Ok(())
    }
}
