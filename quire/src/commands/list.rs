use clap::Args;
use eyre::Result;
use quire_template::Registry;

use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ListReport::from_registry(Registry::global());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
