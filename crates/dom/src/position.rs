//! Document position for facade nodes
//!
//! Arena-backed nodes defer to the raw comparator. Fragments have no arena
//! node of their own, so their position is derived from their roots.

use dom_spec::DocumentPosition;
use dom_tree::NodeId;

use crate::tree_ref::TreeRef;
use crate::{AnyNode, DocumentFragment};

const DISCONNECTED: DocumentPosition =
    DocumentPosition::DISCONNECTED.union(DocumentPosition::IMPLEMENTATION_SPECIFIC);

/// Position of `other` relative to the arena node `id`
pub(crate) fn compare_from_node(tree: &TreeRef, id: NodeId, other: &AnyNode) -> DocumentPosition {
    match other {
        AnyNode::Fragment(fragment) => {
            let inside = tree.same(&fragment.tree) && {
                let t = tree.borrow();
                fragment.root_ids().iter().any(|&root| t.contains(root, id))
            };
            if inside {
                DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
            } else {
                DISCONNECTED
            }
        }
        _ => match other.handle() {
            Some((other_tree, other_id)) if tree.same(other_tree) => {
                dom_tree::compare_document_position(&tree.borrow(), id, other_id)
            }
            _ => DISCONNECTED,
        },
    }
}

/// Position of `other` relative to a fragment
///
/// Nodes inside a root subtree are contained by the fragment. Otherwise
/// each root that shares `other`'s document is compared and the highest
/// ranked result is kept.
pub(crate) fn compare_from_fragment(fragment: &DocumentFragment, other: &AnyNode) -> DocumentPosition {
    if let AnyNode::Fragment(other) = other {
        return if fragment == other {
            DocumentPosition::EQUAL
        } else {
            DISCONNECTED
        };
    }
    let Some((other_tree, other_id)) = other.handle() else {
        return DISCONNECTED;
    };
    if !fragment.tree.same(other_tree) {
        return DISCONNECTED;
    }

    let tree = fragment.tree.borrow();
    let roots = fragment.root_ids();
    if roots.iter().any(|&root| tree.contains(root, other_id)) {
        return DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING;
    }

    let Some(document) = tree.root_document(other_id) else {
        return DISCONNECTED;
    };
    roots
        .iter()
        .filter(|&&root| tree.root_document(root) == Some(document))
        .map(|&root| dom_tree::compare_document_position(&tree, root, other_id))
        .reduce(|best, position| if rank(position) > rank(best) { position } else { best })
        .unwrap_or(DISCONNECTED)
}

/// Precedence between roots: containing, then preceding, then following
fn rank(position: DocumentPosition) -> u8 {
    if position.contains(DocumentPosition::CONTAINS) {
        2
    } else if position.contains(DocumentPosition::PRECEDING) {
        1
    } else {
        0
    }
}
