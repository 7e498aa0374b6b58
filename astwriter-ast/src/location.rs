//! Source locations attached to nodes.

use serde::{Deserialize, Serialize};

/// A contiguous range of characters in one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileLocation {
    pub file_name: String,
    pub offset: u32,
    pub length: u32,
}

impl FileLocation {
    pub fn new(file_name: impl Into<String>, offset: u32, length: u32) -> Self {
        Self {
            file_name: file_name.into(),
            offset,
            length,
        }
    }

    /// Offset one past the last character.
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }

    /// Returns true if `other` lies entirely within this range of the same file.
    pub fn covers(&self, other: &FileLocation) -> bool {
        self.file_name == other.file_name
            && self.offset <= other.offset
            && other.end() <= self.end()
    }
}

/// "This node's text is the result of expanding a macro."
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroExpansionSpan {
    /// Name of the expanded macro definition.
    pub macro_name: String,
    /// Offset of the node's text within the expansion.
    pub expansion_offset: u32,
    /// Length of the node's text within the expansion.
    pub expansion_length: u32,
    /// Where the macro call sits in the file.
    pub file_location: FileLocation,
}

/// One entry of a node's ordered location list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLocation {
    File(FileLocation),
    MacroExpansion(MacroExpansionSpan),
}

impl NodeLocation {
    /// The file range this location maps to.
    pub fn as_file_location(&self) -> &FileLocation {
        match self {
            NodeLocation::File(location) => location,
            NodeLocation::MacroExpansion(span) => &span.file_location,
        }
    }

    pub fn as_macro_expansion(&self) -> Option<&MacroExpansionSpan> {
        match self {
            NodeLocation::MacroExpansion(span) => Some(span),
            NodeLocation::File(_) => None,
        }
    }

    pub fn is_macro_expansion(&self) -> bool {
        matches!(self, NodeLocation::MacroExpansion(_))
    }
}

impl From<FileLocation> for NodeLocation {
    fn from(location: FileLocation) -> Self {
        NodeLocation::File(location)
    }
}

impl From<MacroExpansionSpan> for NodeLocation {
    fn from(span: MacroExpansionSpan) -> Self {
        NodeLocation::MacroExpansion(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers() {
        let outer = FileLocation::new("a.c", 10, 20);
        assert!(outer.covers(&FileLocation::new("a.c", 10, 20)));
        assert!(outer.covers(&FileLocation::new("a.c", 15, 5)));
        assert!(!outer.covers(&FileLocation::new("a.c", 25, 10)));
        assert!(!outer.covers(&FileLocation::new("b.c", 15, 5)));
    }

    #[test]
    fn test_macro_location_maps_to_call_site() {
        let span = MacroExpansionSpan {
            macro_name: "MAX".into(),
            expansion_offset: 0,
            expansion_length: 4,
            file_location: FileLocation::new("a.c", 40, 9),
        };
        let location = NodeLocation::from(span);
        assert!(location.is_macro_expansion());
        assert_eq!(location.as_file_location().offset, 40);
    }
}
