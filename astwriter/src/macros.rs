//! Detection of macro-generated subtrees.
//!
//! A node whose only location is a macro expansion is printed as the macro
//! call text of its original, once per call site. Macros that expand to
//! nothing leave no node behind, so their calls are reinserted in front of the
//! node that follows them.

use std::collections::HashSet;

use astwriter_ast::{Ast, MacroIndexLookup, MacroReference, Node, NodeId};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::Scribe;

/// An empty macro call is reinserted before a node starting less than this
/// many characters after the call ends. Approximate.
pub const EMPTY_MACRO_TOLERANCE: i64 = 3;

/// Outcome of [`MacroExpansionHandler::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroExpansion {
    /// Render the node structurally.
    None,
    /// The node is a macro expansion; its call text is (or would be) printed.
    Expansion,
    /// The call text for this expansion is already in the output.
    AlreadyPrinted,
}

impl MacroExpansion {
    /// True when the node's children must not be visited.
    pub fn skips_children(self) -> bool {
        !matches!(self, MacroExpansion::None)
    }
}

pub struct MacroExpansionHandler<'a> {
    index: Option<&'a dyn MacroIndexLookup>,
    translation_unit: Option<NodeId>,
    last_macro_expansion_offset: Option<u32>,
    empty_macros: IndexMap<String, Vec<MacroReference>>,
    reinserted: HashSet<(String, u32)>,
}

impl<'a> MacroExpansionHandler<'a> {
    pub fn new(index: Option<&'a dyn MacroIndexLookup>) -> Self {
        Self {
            index,
            translation_unit: None,
            last_macro_expansion_offset: None,
            empty_macros: IndexMap::new(),
            reinserted: HashSet::new(),
        }
    }

    /// Decides whether `id` comes from a single macro expansion, printing the
    /// call text when `emit` is set.
    pub fn check(&mut self, scribe: &mut Scribe, ast: &Ast, id: NodeId, emit: bool) -> MacroExpansion {
        if let Some(unit) = ast.translation_unit_of(id) {
            if self.translation_unit != Some(unit) {
                self.init_empty_macros(ast, unit);
            }
        }

        if let [location] = ast.locations(id) {
            if let Some(span) = location.as_macro_expansion() {
                let offset = span.file_location.offset;
                if self.last_macro_expansion_offset == Some(offset) {
                    trace!(node = %id, offset, "macro expansion already printed");
                    return MacroExpansion::AlreadyPrinted;
                }
                if emit {
                    let text = ast.raw_signature(ast.original(id)).unwrap_or_default();
                    trace!(node = %id, offset, text, "printing macro call");
                    scribe.print(text);
                    self.last_macro_expansion_offset = Some(offset);
                }
                return MacroExpansion::Expansion;
            }
        }

        if emit {
            self.reinsert_empty_macros(scribe, ast, id);
        }
        MacroExpansion::None
    }

    /// True when `id` is a macro expansion whose call text is already printed.
    pub fn already_printed(&self, ast: &Ast, id: NodeId) -> bool {
        match ast.locations(id) {
            [location] if location.is_macro_expansion() => {
                self.last_macro_expansion_offset == Some(location.as_file_location().offset)
            }
            _ => false,
        }
    }

    /// True when the statement straddles a macro boundary no child covers.
    pub fn is_statement_mixed_location(&self, ast: &Ast, id: NodeId) -> bool {
        let locations = ast.locations(id);
        if locations.len() <= 1 {
            return false;
        }
        let children = ast.node(id).children();
        locations
            .iter()
            .filter(|location| location.is_macro_expansion())
            .any(|location| {
                let expansion = location.as_file_location();
                !children.iter().any(|child| {
                    ast.file_location(*child)
                        .is_some_and(|covering| covering.covers(expansion))
                })
            })
    }

    pub fn reset(&mut self) {
        self.last_macro_expansion_offset = None;
        self.reinserted.clear();
    }

    fn init_empty_macros(&mut self, ast: &Ast, unit: NodeId) {
        self.translation_unit = Some(unit);
        self.empty_macros.clear();
        let (Some(index), Node::TranslationUnit(unit_data)) = (self.index, ast.node(unit)) else {
            return;
        };
        let reachable = unit_data.reachable_files();
        for definition in &unit_data.macro_definitions {
            if !definition.expansion.is_empty() {
                continue;
            }
            for reference in index.find_references(&definition.name) {
                if reachable.contains(&reference.file_name.as_str()) {
                    self.empty_macros
                        .entry(reference.file_name.clone())
                        .or_default()
                        .push(reference);
                }
            }
        }
        debug!(
            unit = %unit,
            files = self.empty_macros.len(),
            "indexed empty macro references"
        );
    }

    fn reinsert_empty_macros(&mut self, scribe: &mut Scribe, ast: &Ast, id: NodeId) {
        if self.empty_macros.is_empty() {
            return;
        }
        let Some(location) = ast.enclosing_file_location(id) else {
            return;
        };
        let Some(references) = self.empty_macros.get(&location.file_name) else {
            return;
        };
        let node_offset = i64::from(location.offset);
        for reference in references {
            let offset = i64::from(reference.offset);
            let end = i64::from(reference.end());
            if offset < node_offset
                && (0..EMPTY_MACRO_TOLERANCE).contains(&(node_offset - end))
                && self
                    .reinserted
                    .insert((reference.file_name.clone(), reference.offset))
            {
                trace!(node = %id, name = %reference.name, "reinserting empty macro");
                scribe.print(&reference.name).print_space();
            }
        }
    }
}
