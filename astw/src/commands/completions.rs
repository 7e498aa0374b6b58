use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};
use tracing::info;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .wrap_err_with(|| format!("failed to create {}", path.display()))?;
                clap_complete::generate(self.shell, &mut cmd, bin_name, &mut file);
                info!(path = %path.display(), shell = %self.shell, "wrote completions");
            }
            None => clap_complete::generate(self.shell, &mut cmd, bin_name, &mut io::stdout()),
        }
        Ok(())
    }
}
