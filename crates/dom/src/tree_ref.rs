//! Shared tree handle
//!
//! Every facade node holds a [`TreeRef`] to the arena it lives in, plus the
//! parser the tree was built with so that later `innerHTML` assignments and
//! serialization use the same settings.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use dom_html::{HtmlParser, HtmlSerializer};
use dom_spec::{DomError, DomResult};
use dom_tree::{DomTree, NodeId};

use crate::{AnyNode, Element};

struct Shared {
    tree: RefCell<DomTree>,
    parser: HtmlParser,
}

/// Shared single-threaded handle to one arena
#[derive(Clone)]
pub(crate) struct TreeRef(Rc<Shared>);

impl TreeRef {
    pub(crate) fn new(tree: DomTree, parser: HtmlParser) -> Self {
        TreeRef(Rc::new(Shared {
            tree: RefCell::new(tree),
            parser,
        }))
    }

    #[inline]
    pub(crate) fn borrow(&self) -> Ref<'_, DomTree> {
        self.0.tree.borrow()
    }

    #[inline]
    pub(crate) fn borrow_mut(&self) -> RefMut<'_, DomTree> {
        self.0.tree.borrow_mut()
    }

    /// Same arena
    #[inline]
    pub(crate) fn same(&self, other: &TreeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn check_same(&self, other: &TreeRef) -> DomResult<()> {
        if self.same(other) {
            Ok(())
        } else {
            Err(DomError::WrongDocument)
        }
    }

    pub(crate) fn parser(&self) -> &HtmlParser {
        &self.0.parser
    }

    pub(crate) fn serializer(&self) -> HtmlSerializer {
        HtmlSerializer {
            scripting_enabled: self.0.parser.options().scripting_enabled,
        }
    }

    /// Typed view of a raw node
    pub(crate) fn wrap(&self, id: NodeId) -> AnyNode {
        AnyNode::wrap(self, id)
    }

    /// Element view of a node known to be an element
    pub(crate) fn element(&self, id: NodeId) -> Element {
        Element::new(self.clone(), id)
    }
}

impl fmt::Debug for TreeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeRef({:p})", Rc::as_ptr(&self.0))
    }
}
