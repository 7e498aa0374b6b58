//! Public entry point.

use astwriter_ast::{
    Ast, AstDocument, MacroIndexLookup, ModificationLookup, NodeCommentMap, NodeId,
};
use tracing::debug;

use crate::{Result, WriterConfig, WriterVisitor, blank_lines};

/// Generates source text for a syntax tree.
///
/// Every call to [`AstWriter::write`] runs a fresh [`WriterVisitor`], so one
/// writer can render many trees. Output is all-or-nothing: a problem node
/// anywhere in the rendered subtree fails the whole call.
///
/// ```
/// use astwriter::AstWriter;
/// use astwriter_ast::{Ast, SimpleType};
///
/// let mut ast = Ast::new();
/// let int = ast.simple_type(SimpleType::Int);
/// let one = ast.int("1");
/// let x = ast.initialized_declarator("x", one);
/// let declaration = ast.simple_declaration(int, vec![x]);
///
/// assert_eq!(AstWriter::new().write(&ast, declaration).unwrap(), "int x = 1;\n");
/// ```
#[derive(Default)]
pub struct AstWriter<'a> {
    config: WriterConfig,
    comments: Option<&'a NodeCommentMap>,
    modifications: Option<&'a dyn ModificationLookup>,
    macro_index: Option<&'a dyn MacroIndexLookup>,
}

impl<'a> AstWriter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer wired to the comments, modifications and macro index carried
    /// by `document`.
    pub fn for_document(document: &'a AstDocument) -> Self {
        let mut writer = Self::new()
            .with_comments(&document.comments)
            .with_modifications(&document.modifications);
        if let Some(index) = &document.macro_index {
            writer = writer.with_macro_index(index);
        }
        writer
    }

    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Prefix written before every line, ahead of the indentation.
    pub fn with_indent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.indent_prefix = Some(prefix.into());
        self
    }

    pub fn with_comments(mut self, comments: &'a NodeCommentMap) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_modifications(mut self, modifications: &'a dyn ModificationLookup) -> Self {
        self.modifications = Some(modifications);
        self
    }

    pub fn with_macro_index(mut self, index: &'a dyn MacroIndexLookup) -> Self {
        self.macro_index = Some(index);
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Renders the subtree rooted at `root`.
    pub fn write(&self, ast: &Ast, root: NodeId) -> Result<String> {
        let _span = tracing::debug_span!("write", root = %root).entered();
        let mut visitor = WriterVisitor::new(ast, &self.config)
            .with_comments(self.comments)
            .with_modifications(self.modifications)
            .with_macro_index(self.macro_index);
        visitor.visit(root)?;
        let output = visitor.finish();
        debug!(bytes = output.len(), "wrote tree");
        Ok(output)
    }

    /// Renders `document` from its root.
    pub fn write_document(&self, document: &AstDocument) -> Result<String> {
        self.write(&document.ast, document.root)
    }

    pub fn requires_leading_blank_line(ast: &Ast, id: NodeId) -> bool {
        blank_lines::requires_leading_blank_line(ast, id)
    }

    pub fn requires_trailing_blank_line(ast: &Ast, id: NodeId) -> bool {
        blank_lines::requires_trailing_blank_line(ast, id)
    }

    pub fn suppresses_trailing_blank_line(ast: &Ast, id: NodeId) -> bool {
        blank_lines::suppresses_trailing_blank_line(ast, id)
    }

    pub fn requires_blank_line_between(ast: &Ast, first: NodeId, second: NodeId) -> bool {
        blank_lines::requires_blank_line_between(ast, first, second)
    }
}
