//! Macro reference lookup.

use serde::{Deserialize, Serialize};

/// Where a macro is referenced (called) in a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroReference {
    pub name: String,
    pub file_name: String,
    pub offset: u32,
    pub length: u32,
}

impl MacroReference {
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }
}

/// Read-only query service over a project index.
pub trait MacroIndexLookup {
    /// Every reference to the macro named `macro_name`.
    fn find_references(&self, macro_name: &str) -> Vec<MacroReference>;
}

/// A lookup over a fixed reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticMacroIndex {
    references: Vec<MacroReference>,
}

impl StaticMacroIndex {
    pub fn new(references: Vec<MacroReference>) -> Self {
        Self { references }
    }

    pub fn push(&mut self, reference: MacroReference) {
        self.references.push(reference);
    }
}

impl MacroIndexLookup for StaticMacroIndex {
    fn find_references(&self, macro_name: &str) -> Vec<MacroReference> {
        self.references
            .iter()
            .filter(|reference| reference.name == macro_name)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, offset: u32) -> MacroReference {
        MacroReference {
            name: name.into(),
            file_name: "a.c".into(),
            offset,
            length: name.len() as u32,
        }
    }

    #[test]
    fn test_find_references_by_name() {
        let index = StaticMacroIndex::new(vec![
            reference("EXPORT", 0),
            reference("INLINE", 20),
            reference("EXPORT", 40),
        ]);
        let found = index.find_references("EXPORT");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].offset, 40);
        assert_eq!(found[1].end(), 46);
        assert!(index.find_references("MISSING").is_empty());
    }
}
