use std::path::PathBuf;

use astwriter::AstWriter;
use clap::Args;
use eyre::Result;

use super::read_document;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON tree document
    pub document: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let document = read_document(&self.document)?;

        // Problems outside the rendered subtree are listed but do not fail the check.
        for (id, data) in document.ast.iter() {
            if let Some(problem) = data.node.as_problem() {
                eprintln!(
                    "problem {} at {id}: {}",
                    data.node.category(),
                    problem.message
                );
            }
        }

        match AstWriter::for_document(&document).write_document(&document) {
            Ok(source) => {
                println!(
                    "✓ {} is valid ({} nodes, {} lines)",
                    self.document.display(),
                    document.ast.len(),
                    source.lines().count()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}
