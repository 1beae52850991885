//! Node type enumeration

/// Abstract node kind, numbered as in the DOM `Node.nodeType` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NodeType {
    /// Kinds with no DOM counterpart (parser-internal nodes)
    Unknown = 0,
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
}

impl NodeType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => NodeType::Element,
            3 => NodeType::Text,
            8 => NodeType::Comment,
            9 => NodeType::Document,
            10 => NodeType::DocumentType,
            11 => NodeType::DocumentFragment,
            _ => NodeType::Unknown,
        }
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

impl Default for NodeType {
    fn default() -> Self {
        NodeType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_matches_dom_constants() {
        assert_eq!(NodeType::Element.to_u16(), 1);
        assert_eq!(NodeType::Text.to_u16(), 3);
        assert_eq!(NodeType::Comment.to_u16(), 8);
        assert_eq!(NodeType::Document.to_u16(), 9);
        assert_eq!(NodeType::DocumentType.to_u16(), 10);
        assert_eq!(NodeType::DocumentFragment.to_u16(), 11);
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(NodeType::from_u16(2), NodeType::Unknown);
        assert_eq!(NodeType::from_u16(100), NodeType::Unknown);
        assert_eq!(NodeType::from_u16(9), NodeType::Document);
    }
}
