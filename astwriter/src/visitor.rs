//! Traversal engine.
//!
//! [`WriterVisitor`] owns all recursion: emitters call [`WriterVisitor::visit`]
//! for every child they do not print themselves, so each node is visited once.

use astwriter_ast::{
    Ast, MacroIndexLookup, ModificationLookup, Node, NodeCommentMap, NodeId, Rewrite,
    is_line_comment,
};
use tracing::{debug, trace};

use crate::{MacroExpansionHandler, Result, Scribe, WriterConfig, WriterError, blank_lines};

/// Formatting flags threaded through one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterState {
    /// The previous sibling asked for a blank line after itself.
    pub pending_leading_blank_line: bool,
    /// No blank line before the next statement or declaration.
    pub suppress_leading_blank_line: bool,
    /// The decl-specifier printed text and the declarator name needs a space.
    pub space_needed_before_name: bool,
    /// The next compound statement must not end its line.
    pub compound_no_new_line: bool,
    pub(crate) switch_frames: Vec<SwitchFrame>,
}

impl Default for WriterState {
    fn default() -> Self {
        Self {
            pending_leading_blank_line: false,
            suppress_leading_blank_line: true,
            space_needed_before_name: false,
            compound_no_new_line: false,
            switch_frames: Vec::new(),
        }
    }
}

/// Indentation bookkeeping for one `switch` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwitchFrame {
    pub body: NodeId,
    /// A `case`/`default` label indented the statements after it.
    pub label_open: bool,
}

pub struct WriterVisitor<'a> {
    pub(crate) ast: &'a Ast,
    comments: Option<&'a NodeCommentMap>,
    modifications: Option<&'a dyn ModificationLookup>,
    pub(crate) scribe: Scribe,
    pub(crate) macros: MacroExpansionHandler<'a>,
    pub(crate) state: WriterState,
}

impl<'a> WriterVisitor<'a> {
    pub fn new(ast: &'a Ast, config: &WriterConfig) -> Self {
        Self {
            ast,
            comments: None,
            modifications: None,
            scribe: Scribe::new(config.indent, config.indent_prefix.clone()),
            macros: MacroExpansionHandler::new(None),
            state: WriterState::default(),
        }
    }

    pub fn with_comments(mut self, comments: Option<&'a NodeCommentMap>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_modifications(mut self, modifications: Option<&'a dyn ModificationLookup>) -> Self {
        self.modifications = modifications;
        self
    }

    pub fn with_macro_index(mut self, index: Option<&'a dyn MacroIndexLookup>) -> Self {
        self.macros = MacroExpansionHandler::new(index);
        self
    }

    pub fn state(&self) -> &WriterState {
        &self.state
    }

    /// Text generated so far.
    pub fn output(&self) -> &str {
        self.scribe.as_str()
    }

    pub fn finish(self) -> String {
        self.scribe.build()
    }

    /// Forget all output and per-run state before an unrelated run.
    pub fn clean_cache(&mut self) {
        self.scribe.clean_cache();
        self.macros.reset();
        self.state = WriterState::default();
    }

    pub fn visit(&mut self, id: NodeId) -> Result<()> {
        if let Some(rewrite) = self.modifications.and_then(|lookup| lookup.rewrite_for(id)) {
            return self.write_rewrite(id, rewrite);
        }
        self.visit_structural(id)
    }

    fn visit_structural(&mut self, id: NodeId) -> Result<()> {
        let ast = self.ast;
        match ast.node(id) {
            Node::TranslationUnit(unit) => {
                self.write_leading_comments(id);
                for declaration in &unit.declarations {
                    self.visit(*declaration)?;
                }
                self.write_freestanding_comments(id);
                Ok(())
            }
            Node::Container(children) => children.iter().try_for_each(|child| self.visit(*child)),
            Node::Literal(text) => {
                self.insert_blank_line_if_needed(id);
                self.scribe.print(text);
                Ok(())
            }
            Node::Name(name) => self.visit_name(id, name),
            Node::DeclSpecifier(spec) => {
                self.write_leading_comments(id);
                self.write_decl_specifier(id, spec)
            }
            Node::Declarator(declarator) => self.visit_declarator(id, declarator),
            Node::Declaration(declaration) => self.visit_declaration(id, declaration),
            Node::Initializer(initializer) => self.visit_initializer(id, initializer),
            Node::Expression(expression) => self.visit_expression(id, expression),
            Node::Statement(statement) => self.visit_statement(id, statement),
            Node::ArrayModifier(modifier) => {
                self.write_leading_comments(id);
                if self.skip_macro_expansion(id) {
                    return Ok(());
                }
                self.write_array_modifier(modifier)
            }
            Node::PointerOperator(operator) => {
                self.write_leading_comments(id);
                self.write_pointer_operator(operator)
            }
            Node::ParameterDeclaration(parameter) => {
                self.write_leading_comments(id);
                if self.skip_macro_expansion(id) {
                    return Ok(());
                }
                self.write_parameter_declaration(parameter)
            }
            Node::AttributeSpecifier(specifier) => self.write_attribute_specifier(specifier),
            Node::TemplateParameter(parameter) => {
                self.write_leading_comments(id);
                if self.skip_macro_expansion(id) {
                    return Ok(());
                }
                self.write_template_parameter(parameter)
            }
            Node::TypeId(type_id) => {
                self.write_leading_comments(id);
                self.write_type_id(type_id)
            }
            Node::Enumerator(enumerator) => {
                self.write_leading_comments(id);
                self.write_enumerator(enumerator)?;
                self.write_trailing_comments(id, false);
                Ok(())
            }
            Node::BaseSpecifier(base) => self.write_base_specifier(base),
            Node::Designator(designator) => self.write_designator(designator),
            Node::Capture(capture) => self.write_capture(capture),
            Node::Problem(_) => Err(self.problem(id)),
        }
    }

    fn write_rewrite(&mut self, id: NodeId, rewrite: &'a Rewrite) -> Result<()> {
        let text = match rewrite {
            Rewrite::ReplaceNode(replacement) => {
                trace!(node = %id, replacement = %replacement, "rendering replacement node");
                return self.visit_structural(*replacement);
            }
            Rewrite::Verbatim => self.ast.raw_signature(id).unwrap_or_default(),
            Rewrite::ReplaceText(text) => text.as_str(),
        };
        let is_line = matches!(
            self.ast.node(id),
            Node::Statement(_) | Node::Declaration(_)
        );
        if is_line {
            self.insert_blank_line_if_needed(id);
        }
        self.write_leading_comments(id);
        if is_line {
            self.scribe.println(text);
            self.set_leading_blank_line_flags(id);
        } else {
            self.scribe.print(text);
        }
        Ok(())
    }

    // =========================================================================
    // Helpers shared by the emitters
    // =========================================================================

    pub(crate) fn problem(&self, id: NodeId) -> WriterError {
        debug!(node = %id, "aborting on problem node");
        WriterError::problem(self.ast, id)
    }

    /// Prints the macro call when `id` comes from one macro expansion and
    /// reports whether its children must be skipped.
    pub(crate) fn skip_macro_expansion(&mut self, id: NodeId) -> bool {
        self.macros
            .check(&mut self.scribe, self.ast, id, true)
            .skips_children()
    }

    pub(crate) fn visit_joined(&mut self, ids: &[NodeId], separator: &str) -> Result<()> {
        for (index, id) in ids.iter().enumerate() {
            if index > 0 {
                self.scribe.print(separator);
            }
            self.visit(*id)?;
        }
        Ok(())
    }

    /// Visits a declaration with its `;` dropped. The skip ends with the
    /// visit even when the declaration printed no `;` of its own.
    pub(crate) fn visit_without_semicolon(&mut self, id: NodeId) -> Result<()> {
        self.scribe.no_semicolon();
        let result = self.visit(id);
        self.scribe.print_semicolons();
        result
    }

    /// Visits `id` and reports whether it printed anything.
    pub(crate) fn visit_tracked(&mut self, id: NodeId) -> Result<bool> {
        let before = self.scribe.len();
        self.visit(id)?;
        Ok(self.scribe.len() > before)
    }

    /// Prints a keyword that follows a body, on the closing brace's line when
    /// there is one.
    pub(crate) fn print_keyword_after_body(&mut self, keyword: &str) {
        if !self.scribe.at_line_start() {
            self.scribe.print_space();
        }
        self.scribe.print(keyword);
    }

    pub(crate) fn end_line_if_needed(&mut self) {
        if !self.scribe.at_line_start() {
            self.scribe.new_line();
        }
    }

    // =========================================================================
    // Blank lines
    // =========================================================================

    pub(crate) fn insert_blank_line_if_needed(&mut self, id: NodeId) {
        if !self.state.suppress_leading_blank_line
            && (self.state.pending_leading_blank_line
                || blank_lines::requires_leading_blank_line(self.ast, id))
        {
            self.scribe.new_line();
        }
        self.state.pending_leading_blank_line = false;
        self.state.suppress_leading_blank_line = false;
    }

    pub(crate) fn set_leading_blank_line_flags(&mut self, id: NodeId) {
        self.state.pending_leading_blank_line =
            blank_lines::requires_trailing_blank_line(self.ast, id);
        self.state.suppress_leading_blank_line =
            blank_lines::suppresses_trailing_blank_line(self.ast, id);
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub(crate) fn write_leading_comments(&mut self, id: NodeId) {
        let Some(comments) = self.comments else {
            return;
        };
        for text in comments.leading(self.ast, id) {
            self.scribe.print(text);
            self.scribe.new_line();
        }
    }

    pub(crate) fn has_trailing_comments(&self, id: NodeId) -> bool {
        self.comments
            .is_some_and(|comments| comments.has_trailing(self.ast, id))
    }

    /// Line comments always end the line.
    pub(crate) fn write_trailing_comments(&mut self, id: NodeId, new_line: bool) {
        let Some(comments) = self.comments else {
            return;
        };
        for text in comments.trailing(self.ast, id) {
            if !self.scribe.at_line_start() {
                self.scribe.print_space();
            }
            self.scribe.print(text);
            if new_line || is_line_comment(text) {
                self.scribe.new_line();
            }
        }
    }

    pub(crate) fn write_freestanding_comments(&mut self, id: NodeId) {
        let Some(comments) = self.comments else {
            return;
        };
        for text in comments.freestanding(self.ast, id) {
            self.scribe.print(text);
            self.scribe.new_line();
        }
    }
}
