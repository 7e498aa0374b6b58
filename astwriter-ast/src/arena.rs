//! Node arena.

use serde::{Deserialize, Serialize};

use crate::{
    AstError, Declarator, DeclaratorKind, FileLocation, Node, NodeId, NodeLocation, Result,
};

/// One arena slot: the node plus the metadata the parser attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub node: Node,
    #[serde(default)]
    pub parent: Option<NodeId>,
    /// Set on copies produced during rewriting.
    #[serde(default)]
    pub original: Option<NodeId>,
    #[serde(default)]
    pub locations: Vec<NodeLocation>,
    #[serde(default)]
    pub file_location: Option<FileLocation>,
    /// Original source text of the node.
    #[serde(default)]
    pub raw_signature: Option<String>,
}

impl NodeData {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            parent: None,
            original: None,
            locations: Vec::new(),
            file_location: None,
            raw_signature: None,
        }
    }
}

/// Owns every node of one tree. Nodes are added bottom-up; adding a node
/// makes it the parent of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ast {
    nodes: Vec<NodeData>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        self.add_data(NodeData::new(node.into()))
    }

    pub fn add_data(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        for child in data.node.children() {
            if let Some(slot) = self.nodes.get_mut(child.index()) {
                slot.parent = Some(id);
            }
        }
        self.nodes.push(data);
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Panics when `id` does not belong to this arena.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.data(id).node
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, data)| (NodeId::new(index as u32), data))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    /// The node a rewritten copy stands for, or the node itself.
    pub fn original(&self, id: NodeId) -> NodeId {
        self.data(id).original.unwrap_or(id)
    }

    /// Locations of the node, falling back to those of its original.
    pub fn locations(&self, id: NodeId) -> &[NodeLocation] {
        let own = &self.data(id).locations;
        if own.is_empty() {
            &self.data(self.original(id)).locations
        } else {
            own
        }
    }

    /// The node's whole extent in a file: the explicit file location, else
    /// the span from its first to its last location.
    pub fn file_location(&self, id: NodeId) -> Option<FileLocation> {
        let explicit = self.data(id).file_location.as_ref();
        if let Some(location) = explicit.or(self.data(self.original(id)).file_location.as_ref()) {
            return Some(location.clone());
        }
        let locations = self.locations(id);
        let first = locations.first()?.as_file_location();
        let last = locations.last()?.as_file_location();
        let end = last.end().max(first.end());
        Some(FileLocation::new(
            first.file_name.clone(),
            first.offset,
            end - first.offset,
        ))
    }

    pub fn offset(&self, id: NodeId) -> Option<u32> {
        self.file_location(id).map(|location| location.offset)
    }

    /// Raw source text of the node or of its original.
    pub fn raw_signature(&self, id: NodeId) -> Option<&str> {
        self.data(id)
            .raw_signature
            .as_deref()
            .or_else(|| self.data(self.original(id)).raw_signature.as_deref())
    }

    /// Iterates `id` and then each of its ancestors.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.parent(*current))
    }

    pub fn translation_unit_of(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|ancestor| matches!(self.node(*ancestor), Node::TranslationUnit(_)))
    }

    /// File location of the node or of its closest located ancestor.
    pub fn enclosing_file_location(&self, id: NodeId) -> Option<FileLocation> {
        self.ancestors(id)
            .find_map(|ancestor| self.file_location(ancestor))
    }

    /// Unwraps parenthesized declarators: for `(*(f))()` returns the
    /// outermost declarator that carries the function suffix.
    pub fn outermost_declarator(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            match self.node(parent) {
                Node::Declarator(Declarator {
                    nested: Some(nested),
                    ..
                }) if *nested == current => current = parent,
                _ => break,
            }
        }
        current
    }

    /// Returns the declarator whose name, if any, is ultimately declared.
    pub fn innermost_declarator(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Node::Declarator(Declarator {
            nested: Some(nested),
            ..
        }) = self.node(current)
        {
            current = *nested;
        }
        current
    }

    pub fn is_function_declarator(&self, id: NodeId) -> bool {
        matches!(
            self.node(id),
            Node::Declarator(Declarator {
                kind: DeclaratorKind::Function(_) | DeclaratorKind::KnRFunction { .. },
                ..
            })
        )
    }

    /// Fills in missing parent links from the child lists.
    pub fn link_parents(&mut self) {
        for index in 0..self.nodes.len() {
            let parent = NodeId::new(index as u32);
            for child in self.nodes[index].node.children() {
                if let Some(slot) = self.nodes.get_mut(child.index()) {
                    slot.parent.get_or_insert(parent);
                }
            }
        }
    }

    /// Checks that every reference points into the arena.
    pub fn validate(&self) -> Result<()> {
        for (id, data) in self.iter() {
            let references = data
                .node
                .children()
                .into_iter()
                .chain(data.parent)
                .chain(data.original);
            for reference in references {
                if !self.contains(reference) {
                    return Err(Box::new(AstError::DanglingReference {
                        node: id,
                        reference,
                    }));
                }
            }
        }
        Ok(())
    }
}
