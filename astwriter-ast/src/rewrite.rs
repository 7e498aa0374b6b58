//! Rewrite intents consumed by the writer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::NodeId;

/// How a node with a pending modification is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rewrite {
    /// Copy the node's original source text.
    Verbatim,
    /// Print the given text in place of the node.
    ReplaceText(String),
    /// Render another node in place of this one.
    ReplaceNode(NodeId),
}

/// Answers, per node, whether it must be rendered other than structurally.
pub trait ModificationLookup {
    fn rewrite_for(&self, node: NodeId) -> Option<&Rewrite>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRecord {
    pub node: NodeId,
    pub rewrite: Rewrite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ModificationRecord>", into = "Vec<ModificationRecord>")]
pub struct ModificationMap {
    entries: IndexMap<NodeId, Rewrite>,
}

impl ModificationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, node: NodeId, rewrite: Rewrite) -> Option<Rewrite> {
        self.entries.insert(node, rewrite)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Rewrite)> {
        self.entries.iter().map(|(node, rewrite)| (*node, rewrite))
    }
}

impl ModificationLookup for ModificationMap {
    fn rewrite_for(&self, node: NodeId) -> Option<&Rewrite> {
        self.entries.get(&node)
    }
}

impl From<Vec<ModificationRecord>> for ModificationMap {
    fn from(records: Vec<ModificationRecord>) -> Self {
        Self {
            entries: records
                .into_iter()
                .map(|record| (record.node, record.rewrite))
                .collect(),
        }
    }
}

impl From<ModificationMap> for Vec<ModificationRecord> {
    fn from(map: ModificationMap) -> Self {
        map.entries
            .into_iter()
            .map(|(node, rewrite)| ModificationRecord { node, rewrite })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_insert_replaces_intent() {
        let mut map = ModificationMap::new();
        let node = NodeId::new(3);
        assert!(map.insert(node, Rewrite::Verbatim).is_none());
        assert_eq!(
            map.insert(node, Rewrite::ReplaceText("x".into())),
            Some(Rewrite::Verbatim)
        );
        assert_eq!(
            map.rewrite_for(node),
            Some(&Rewrite::ReplaceText("x".into()))
        );
        assert_eq!(map.rewrite_for(NodeId::new(4)), None);
    }
}
