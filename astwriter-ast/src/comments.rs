//! Comments attached to nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Ast, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentPlacement {
    /// Before the node, on lines of its own.
    Leading,
    /// After the node on the same line.
    Trailing,
    /// Not bound to a child, e.g. at the end of a block.
    Freestanding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub node: NodeId,
    pub placement: CommentPlacement,
    /// Full comment text including `//` or `/* */`.
    pub text: String,
}

/// `//` comments must end the line they are printed on.
pub fn is_line_comment(text: &str) -> bool {
    text.starts_with("//")
}

/// Comment lookup keyed by node. Lookups through [`NodeCommentMap::leading`]
/// and friends also return the comments of the node's original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CommentRecord>", into = "Vec<CommentRecord>")]
pub struct NodeCommentMap {
    leading: IndexMap<NodeId, Vec<String>>,
    trailing: IndexMap<NodeId, Vec<String>>,
    freestanding: IndexMap<NodeId, Vec<String>>,
}

impl NodeCommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty() && self.freestanding.is_empty()
    }

    pub fn add(&mut self, node: NodeId, placement: CommentPlacement, text: impl Into<String>) {
        self.map_mut(placement)
            .entry(node)
            .or_default()
            .push(text.into());
    }

    pub fn add_leading(&mut self, node: NodeId, text: impl Into<String>) {
        self.add(node, CommentPlacement::Leading, text);
    }

    pub fn add_trailing(&mut self, node: NodeId, text: impl Into<String>) {
        self.add(node, CommentPlacement::Trailing, text);
    }

    pub fn add_freestanding(&mut self, node: NodeId, text: impl Into<String>) {
        self.add(node, CommentPlacement::Freestanding, text);
    }

    pub fn leading(&self, ast: &Ast, node: NodeId) -> Vec<&str> {
        self.lookup(CommentPlacement::Leading, ast, node)
    }

    pub fn trailing(&self, ast: &Ast, node: NodeId) -> Vec<&str> {
        self.lookup(CommentPlacement::Trailing, ast, node)
    }

    pub fn freestanding(&self, ast: &Ast, node: NodeId) -> Vec<&str> {
        self.lookup(CommentPlacement::Freestanding, ast, node)
    }

    pub fn has_trailing(&self, ast: &Ast, node: NodeId) -> bool {
        !self.trailing(ast, node).is_empty()
    }

    fn lookup(&self, placement: CommentPlacement, ast: &Ast, node: NodeId) -> Vec<&str> {
        let map = self.map(placement);
        let original = ast.original(node);
        let mut comments: Vec<&str> = map
            .get(&node)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if original != node {
            comments.extend(map.get(&original).into_iter().flatten().map(String::as_str));
        }
        comments
    }

    fn map(&self, placement: CommentPlacement) -> &IndexMap<NodeId, Vec<String>> {
        match placement {
            CommentPlacement::Leading => &self.leading,
            CommentPlacement::Trailing => &self.trailing,
            CommentPlacement::Freestanding => &self.freestanding,
        }
    }

    fn map_mut(&mut self, placement: CommentPlacement) -> &mut IndexMap<NodeId, Vec<String>> {
        match placement {
            CommentPlacement::Leading => &mut self.leading,
            CommentPlacement::Trailing => &mut self.trailing,
            CommentPlacement::Freestanding => &mut self.freestanding,
        }
    }
}

impl From<Vec<CommentRecord>> for NodeCommentMap {
    fn from(records: Vec<CommentRecord>) -> Self {
        let mut map = NodeCommentMap::new();
        for record in records {
            map.add(record.node, record.placement, record.text);
        }
        map
    }
}

impl From<NodeCommentMap> for Vec<CommentRecord> {
    fn from(map: NodeCommentMap) -> Self {
        let placements = [
            (CommentPlacement::Leading, map.leading),
            (CommentPlacement::Trailing, map.trailing),
            (CommentPlacement::Freestanding, map.freestanding),
        ];
        placements
            .into_iter()
            .flat_map(|(placement, entries)| {
                entries.into_iter().flat_map(move |(node, texts)| {
                    texts.into_iter().map(move |text| CommentRecord {
                        node,
                        placement,
                        text,
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, NodeData};

    #[test]
    fn test_lookup_includes_original() {
        let mut ast = Ast::new();
        let original = ast.add_data(NodeData::new(Node::Literal("x".into())));
        let mut copy = NodeData::new(Node::Literal("x".into()));
        copy.original = Some(original);
        let copy = ast.add_data(copy);

        let mut comments = NodeCommentMap::new();
        comments.add_leading(copy, "// fresh");
        comments.add_leading(original, "// kept");

        assert_eq!(comments.leading(&ast, copy), vec!["// fresh", "// kept"]);
        assert_eq!(comments.leading(&ast, original), vec!["// kept"]);
        assert!(comments.trailing(&ast, copy).is_empty());
    }

    #[test]
    fn test_records_preserve_insertion_order() {
        let records = vec![
            CommentRecord {
                node: NodeId::new(1),
                placement: CommentPlacement::Trailing,
                text: "// a".into(),
            },
            CommentRecord {
                node: NodeId::new(1),
                placement: CommentPlacement::Trailing,
                text: "// b".into(),
            },
        ];
        let map = NodeCommentMap::from(records.clone());
        let back: Vec<CommentRecord> = map.into();
        assert_eq!(back, records);
    }

    #[test]
    fn test_is_line_comment() {
        assert!(is_line_comment("// note"));
        assert!(!is_line_comment("/* note */"));
    }
}
