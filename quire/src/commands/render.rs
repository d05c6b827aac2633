use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use quire_template::Renderer;

use super::UnwrapOrExit;
use crate::{
    file::{OutputFile, Overwrite, WriteResult},
    reports::{Output, TerminalOutput},
    vars::Vars,
};

#[derive(Args)]
pub struct RenderCommand {
    /// Template file to render
    template: PathBuf,

    /// TOML file with template variables
    #[arg(short, long)]
    vars: Option<PathBuf>,

    /// Set a variable, overriding the vars file
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep an existing output file instead of overwriting it
    #[arg(long, requires = "output")]
    if_missing: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let mut vars = match &self.vars {
            Some(path) => Vars::open(path).unwrap_or_exit(),
            None => Vars::new(),
        };
        for assignment in &self.set {
            vars.set(assignment).unwrap_or_exit();
        }

        let source = fs::read_to_string(&self.template).wrap_err_with(|| {
            format!("failed to read template '{}'", self.template.display())
        })?;
        let name = self.template.display().to_string();
        let rendered = Renderer::new().render_named_str(&name, &source, vars.into_context())?;

        let Some(path) = &self.output else {
            print!("{}", rendered);
            return Ok(());
        };

        let overwrite = if self.if_missing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let mut out = TerminalOutput::new();
        match OutputFile::new(path, rendered).with_overwrite(overwrite).write()? {
            WriteResult::Written => out.added_item(&path.display().to_string()),
            WriteResult::Skipped => out.warning(&format!(
                "'{}' already exists, skipped",
                path.display()
            )),
        }

        Ok(())
    }
}
