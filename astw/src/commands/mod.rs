mod check;
mod completions;
mod render;

use std::path::Path;

use astwriter_ast::AstDocument;
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use render::RenderCommand;

/// Extension trait for printing a diagnostic and exiting on error
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{report:?}");
    std::process::exit(1);
}

impl<T> UnwrapOrExit<T> for crate::config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for astwriter_ast::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for astwriter::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

/// Reads and validates a JSON tree document.
pub(crate) fn read_document(path: &Path) -> Result<AstDocument> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let document = AstDocument::from_json(&content).unwrap_or_exit();
    tracing::debug!(
        path = %path.display(),
        nodes = document.ast.len(),
        "loaded document"
    );
    Ok(document)
}

#[derive(Parser)]
#[command(name = "astw")]
#[command(version)]
#[command(about = "Render C and C++ syntax trees back to source text")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON tree document to source text
    Render(RenderCommand),

    /// Validate a JSON tree document without printing it
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
