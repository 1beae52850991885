//! Mutation operations for arena-backed parents
//!
//! Shared by `Element` and `Document`. Fragments passed as arguments are
//! dissolved: each of their roots is inserted on its own, and the
//! fragment's root list is left as it was.

use dom_spec::{DomError, DomResult};
use dom_tree::{Node, NodeId};

use crate::AnyNode;
use crate::tree_ref::TreeRef;

/// Arena ids of `nodes`, with fragments expanded into their roots
pub(crate) fn expand(tree: &TreeRef, nodes: &[AnyNode]) -> DomResult<Vec<NodeId>> {
    let mut ids = Vec::with_capacity(nodes.len());
    for node in nodes {
        tree.check_same(node.tree())?;
        match (node, node.handle()) {
            (AnyNode::Fragment(fragment), _) => ids.extend(fragment.root_ids()),
            (_, Some((_, id))) => ids.push(id),
            (_, None) => return Err(DomError::InvalidNodeType),
        }
    }
    Ok(ids)
}

/// Arena id of a node that must be a child of something
fn child_id(tree: &TreeRef, child: &AnyNode) -> DomResult<NodeId> {
    tree.check_same(child.tree())?;
    child
        .handle()
        .map(|(_, id)| id)
        .ok_or(DomError::NotAChild)
}

pub(crate) fn append(tree: &TreeRef, parent: NodeId, nodes: &[AnyNode]) -> DomResult<()> {
    let ids = expand(tree, nodes)?;
    let mut t = tree.borrow_mut();
    for id in ids {
        t.append_child(parent, id)?;
    }
    Ok(())
}

/// Insert `nodes` as one block before the current first child
pub(crate) fn prepend(tree: &TreeRef, parent: NodeId, nodes: &[AnyNode]) -> DomResult<()> {
    let ids = expand(tree, nodes)?;
    let mut t = tree.borrow_mut();
    // the block goes before the first child that is not itself being moved
    let reference = t.children(parent).find(|c| !ids.contains(c));
    for id in ids {
        t.insert_before(parent, id, reference)?;
    }
    Ok(())
}

pub(crate) fn replace_children(tree: &TreeRef, parent: NodeId, nodes: &[AnyNode]) -> DomResult<()> {
    let ids = expand(tree, nodes)?;
    let mut t = tree.borrow_mut();
    for &id in &ids {
        t.check_insert(parent, id)?;
    }
    t.clear_children(parent);
    for id in ids {
        t.append_child(parent, id)?;
    }
    Ok(())
}

pub(crate) fn insert_before(
    tree: &TreeRef,
    parent: NodeId,
    node: &AnyNode,
    child: Option<&AnyNode>,
) -> DomResult<AnyNode> {
    let reference = child.map(|c| child_id(tree, c)).transpose()?;
    let ids = expand(tree, std::slice::from_ref(node))?;
    let mut t = tree.borrow_mut();
    if let Some(reference) = reference {
        if t.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild);
        }
    }
    for id in ids {
        t.insert_before(parent, id, reference)?;
    }
    Ok(node.clone())
}

/// Put `node` where `child` is and return the detached `child`
pub(crate) fn replace_child(
    tree: &TreeRef,
    parent: NodeId,
    node: &AnyNode,
    child: &AnyNode,
) -> DomResult<AnyNode> {
    let old = child_id(tree, child)?;
    let ids = expand(tree, std::slice::from_ref(node))?;
    let mut t = tree.borrow_mut();
    if t.parent(old) != Some(parent) {
        return Err(DomError::NotAChild);
    }
    if let AnyNode::Fragment(_) = node {
        for &id in &ids {
            t.check_insert(parent, id)?;
        }
        for id in ids {
            t.insert_before(parent, id, Some(old))?;
        }
        t.remove_child(parent, old)?;
    } else {
        let &[new] = ids.as_slice() else {
            return Err(DomError::InvalidNodeType);
        };
        t.replace_child(parent, new, old)?;
    }
    Ok(child.clone())
}

pub(crate) fn remove_child(tree: &TreeRef, parent: NodeId, child: &AnyNode) -> DomResult<AnyNode> {
    let id = child_id(tree, child)?;
    tree.borrow_mut().remove_child(parent, id)?;
    Ok(child.clone())
}

/// Replace the children of `id` with `html` parsed in its own context
pub(crate) fn set_inner_html(tree: &TreeRef, id: NodeId, html: &str) -> DomResult<()> {
    let mut t = tree.borrow_mut();
    let context = t.element(id).map(|e| e.name.clone()).unwrap_or_default();
    tracing::trace!(context = %context, bytes = html.len(), "re-parsing inner HTML");
    let roots = tree.parser().parse_fragment_into(&mut t, html, &context);
    t.clear_children(id);
    for root in roots {
        t.append_child(id, root)?;
    }
    Ok(())
}

/// Replace `id` itself with `html` parsed in its parent's context
pub(crate) fn set_outer_html(tree: &TreeRef, id: NodeId, html: &str) -> DomResult<()> {
    let mut t = tree.borrow_mut();
    let parent = t.parent(id).ok_or(DomError::Detached)?;
    let context = match t.element(parent) {
        Some(e) => e.name.clone(),
        None => return Err(DomError::HierarchyRequest),
    };
    tracing::trace!(context = %context, bytes = html.len(), "re-parsing outer HTML");
    let roots = tree.parser().parse_fragment_into(&mut t, html, &context);
    for root in roots {
        t.insert_before(parent, root, Some(id))?;
    }
    t.remove_child(parent, id)?;
    Ok(())
}

/// Replace the children of `id` with one text node (none for `""`)
pub(crate) fn set_text_content(tree: &TreeRef, id: NodeId, text: &str) {
    let mut t = tree.borrow_mut();
    t.clear_children(id);
    if !text.is_empty() {
        t.append_new(id, Node::text(text));
    }
}
