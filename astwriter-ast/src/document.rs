//! Serialized form of a tree plus the lookups a writer consumes.

use serde::{Deserialize, Serialize};

use crate::{
    Ast, AstError, ModificationMap, NodeCommentMap, NodeId, Result, Rewrite, StaticMacroIndex,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstDocument {
    pub ast: Ast,
    pub root: NodeId,
    #[serde(default)]
    pub comments: NodeCommentMap,
    /// Absent when no project index is available.
    #[serde(default)]
    pub macro_index: Option<StaticMacroIndex>,
    #[serde(default)]
    pub modifications: ModificationMap,
}

impl AstDocument {
    pub fn new(ast: Ast, root: NodeId) -> Self {
        Self {
            ast,
            root,
            comments: NodeCommentMap::new(),
            macro_index: None,
            modifications: ModificationMap::new(),
        }
    }

    /// Decode a document, link parents and check references.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut document: AstDocument = serde_json::from_str(content)
            .map_err(|source| Box::new(AstError::Json { source }))?;
        document.ast.link_parents();
        document.validate()?;
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Box::new(AstError::Json { source }))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ast.contains(self.root) {
            return Err(Box::new(AstError::MissingRoot {
                root: self.root,
                len: self.ast.len(),
            }));
        }
        self.ast.validate()?;
        for (node, rewrite) in self.modifications.iter() {
            if let Rewrite::ReplaceNode(replacement) = rewrite {
                if !self.ast.contains(*replacement) {
                    return Err(Box::new(AstError::DanglingReference {
                        node,
                        reference: *replacement,
                    }));
                }
            }
        }
        Ok(())
    }
}
