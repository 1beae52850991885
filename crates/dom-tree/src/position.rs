//! Relative document position of two nodes

use crate::{DomTree, NodeId};
use dom_spec::DocumentPosition;

/// Position of `other` relative to `reference`
///
/// Nodes without a common document are disconnected; a document node is
/// its own root.
pub fn compare_document_position(
    tree: &DomTree,
    reference: NodeId,
    other: NodeId,
) -> DocumentPosition {
    if reference == other {
        return DocumentPosition::EQUAL;
    }
    let disconnected = DocumentPosition::DISCONNECTED | DocumentPosition::IMPLEMENTATION_SPECIFIC;
    let (Some(root), Some(other_root)) = (tree.root_document(reference), tree.root_document(other))
    else {
        return disconnected;
    };
    if root != other_root {
        return disconnected;
    }

    if tree.contains(other, reference) {
        return DocumentPosition::CONTAINS | DocumentPosition::PRECEDING;
    }
    if tree.contains(reference, other) {
        return DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING;
    }

    for node in tree.descendants(root) {
        if node == other {
            return DocumentPosition::PRECEDING;
        }
        if node == reference {
            return DocumentPosition::FOLLOWING;
        }
    }
    disconnected
}
