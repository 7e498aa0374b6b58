//! Node identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside an [`Ast`](crate::Ast) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create an id from a raw arena index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodeId::new(7).to_string(), "#7");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&NodeId::new(3)).unwrap(), "3");
        let id: NodeId = serde_json::from_str("12").unwrap();
        assert_eq!(id.index(), 12);
    }
}
