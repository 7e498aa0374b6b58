//! Output buffer with lazy indentation.

use crate::Indent;

/// Accumulates generated source text.
///
/// Indentation is written lazily: a [`Scribe::new_line`] only marks the next
/// print as starting a line, so lines that receive no text stay empty.
///
/// ```
/// use astwriter::Scribe;
///
/// let mut scribe = Scribe::default();
/// scribe.print("if (x)").print_space().print_l_brace().new_line();
/// scribe.print("y();").new_line().print_r_brace().new_line();
/// assert_eq!(scribe.as_str(), "if (x) {\n    y();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct Scribe {
    indent: Indent,
    indent_prefix: Option<String>,
    indentation_level: usize,
    at_line_start: bool,
    new_line_suppression: usize,
    skip_semicolon: bool,
    buffer: String,
}

impl Scribe {
    pub fn new(indent: Indent, indent_prefix: Option<String>) -> Self {
        Self {
            indent,
            indent_prefix,
            indentation_level: 0,
            at_line_start: true,
            new_line_suppression: 0,
            skip_semicolon: false,
            buffer: String::new(),
        }
    }

    // =========================================================================
    // Printing
    // =========================================================================

    pub fn print(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.indent_if_needed();
            self.buffer.push_str(text);
        }
        self
    }

    pub fn print_char(&mut self, c: char) -> &mut Self {
        self.indent_if_needed();
        self.buffer.push(c);
        self
    }

    pub fn print_space(&mut self) -> &mut Self {
        self.print_char(' ')
    }

    pub fn print_spaces(&mut self, count: usize) -> &mut Self {
        self.indent_if_needed();
        self.buffer.extend(std::iter::repeat_n(' ', count));
        self
    }

    /// `text` followed by a space.
    pub fn print_string_space(&mut self, text: &str) -> &mut Self {
        self.print(text).print_space()
    }

    /// `text` followed by a line break.
    pub fn println(&mut self, text: &str) -> &mut Self {
        self.print(text).new_line()
    }

    /// Prints `;` unless [`Scribe::no_semicolon`] asked to skip this one.
    pub fn print_semicolon(&mut self) -> &mut Self {
        if self.skip_semicolon {
            self.skip_semicolon = false;
            self
        } else {
            self.print_char(';')
        }
    }

    /// `{` and one more indentation level.
    pub fn print_l_brace(&mut self) -> &mut Self {
        self.print_char('{');
        self.increment_indent()
    }

    /// One less indentation level and `}`.
    pub fn print_r_brace(&mut self) -> &mut Self {
        self.decrement_indent();
        self.print_char('}')
    }

    // =========================================================================
    // Lines
    // =========================================================================

    pub fn new_line(&mut self) -> &mut Self {
        if self.new_line_suppression == 0 {
            self.buffer.push('\n');
            self.at_line_start = true;
        }
        self
    }

    /// `count` consecutive line breaks.
    pub fn new_lines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.new_line();
        }
        self
    }

    /// Suppress line breaks until the matching [`Scribe::resume_new_lines`].
    pub fn no_new_lines(&mut self) -> &mut Self {
        self.new_line_suppression += 1;
        self
    }

    pub fn resume_new_lines(&mut self) -> &mut Self {
        self.new_line_suppression = self.new_line_suppression.saturating_sub(1);
        self
    }

    /// Skip exactly the next semicolon.
    pub fn no_semicolon(&mut self) -> &mut Self {
        self.skip_semicolon = true;
        self
    }

    /// Drop a pending [`Scribe::no_semicolon`] that nothing consumed.
    pub fn print_semicolons(&mut self) -> &mut Self {
        self.skip_semicolon = false;
        self
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    pub fn increment_indent(&mut self) -> &mut Self {
        self.indentation_level += 1;
        self
    }

    pub fn decrement_indent(&mut self) -> &mut Self {
        self.indentation_level = self.indentation_level.saturating_sub(1);
        self
    }

    pub fn indentation_level(&self) -> usize {
        self.indentation_level
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn last_char(&self) -> Option<char> {
        self.buffer.chars().next_back()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Reset text and state for an unrelated run.
    pub fn clean_cache(&mut self) {
        self.buffer.clear();
        self.indentation_level = 0;
        self.at_line_start = true;
        self.new_line_suppression = 0;
        self.skip_semicolon = false;
    }

    /// Consume the scribe and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn indent_if_needed(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            if let Some(prefix) = &self.indent_prefix {
                self.buffer.push_str(prefix);
            }
            self.indent.write_to(&mut self.buffer, self.indentation_level);
        }
    }
}

impl Default for Scribe {
    fn default() -> Self {
        Self::new(Indent::DEFAULT, None)
    }
}
