use std::path::PathBuf;

use astwriter::AstWriter;
use clap::Args;
use eyre::{Result, WrapErr};
use tracing::info;

use super::{UnwrapOrExit, read_document};
use crate::config;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the JSON tree document
    pub document: PathBuf,

    /// Path to the writer config (defaults to ./astwriter.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Text written at the start of every non-empty line
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = config::load(self.config.as_deref()).unwrap_or_exit();
        if let Some(prefix) = &self.prefix {
            config.indent_prefix = Some(prefix.clone());
        }

        let document = read_document(&self.document)?;
        let source = AstWriter::for_document(&document)
            .with_config(config)
            .write_document(&document)
            .unwrap_or_exit();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &source)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = source.len(), "wrote source");
            }
            None => print!("{source}"),
        }
        Ok(())
    }
}
