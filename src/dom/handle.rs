
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use html5ever::tendril::StrTendril;
use html5ever::QualName;

use crate::error::{Error, Result};
use crate::node::{Attribute, DomNode, NodeKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document(Vec<Handle>),
    Fragment(Vec<Handle>),
    Doctype(StrTendril),
    Element(QualName, Vec<Attribute>, Vec<Handle>),
    Text(StrTendril),
    CdataSection(StrTendril),
    Comment(StrTendril),
    /// Target and data.
    ProcessingInstruction(StrTendril, StrTendril),
}

impl Node {
    pub fn describe(&self) -> &'static str {
        match *self {
            Node::Document(..) => "document",
            Node::Fragment(..) => "fragment",
            Node::Doctype(..) => "doctype",
            Node::Element(..) => "element",
            Node::Text(..) => "text",
            Node::CdataSection(..) => "cdata section",
            Node::Comment(..) => "comment",
            Node::ProcessingInstruction(..) => "processing instruction",
        }
    }

    fn children(&self) -> Option<&Vec<Handle>> {
        match *self {
            Node::Document(ref children) |
            Node::Fragment(ref children) |
            Node::Element(_, _, ref children) => Some(children),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Handle>> {
        match *self {
            Node::Document(ref mut children) |
            Node::Fragment(ref mut children) |
            Node::Element(_, _, ref mut children) => Some(children),
            _ => None,
        }
    }
}

/// Shared handle to a node in an owned tree. Parents hold their children
/// strongly and children point back through a weak link.
#[derive(Clone, Debug)]
pub struct Handle(Rc<RefCell<(Node, Option<WeakHandle>)>>);

impl Handle {
    pub fn document() -> Handle {
        Node::Document(Vec::new()).into()
    }

    pub fn fragment() -> Handle {
        Node::Fragment(Vec::new()).into()
    }

    pub fn doctype<T: Into<StrTendril>>(name: T) -> Handle {
        Node::Doctype(name.into()).into()
    }

    pub fn element(name: QualName, attributes: Vec<Attribute>) -> Handle {
        Node::Element(name, attributes, Vec::new()).into()
    }

    pub fn text<T: Into<StrTendril>>(text: T) -> Handle {
        Node::Text(text.into()).into()
    }

    pub fn cdata<T: Into<StrTendril>>(text: T) -> Handle {
        Node::CdataSection(text.into()).into()
    }

    pub fn comment<T: Into<StrTendril>>(text: T) -> Handle {
        Node::Comment(text.into()).into()
    }

    pub fn processing_instruction<T, D>(target: T, data: D) -> Handle
        where T: Into<StrTendril>,
              D: Into<StrTendril>
    {
        Node::ProcessingInstruction(target.into(), data.into()).into()
    }

    pub fn downgrade(&self) -> WeakHandle {
        WeakHandle(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same node.
    pub fn same_node(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn parent(&self) -> Option<Handle> {
        self.borrow().1.as_ref().and_then(WeakHandle::upgrade)
    }

    /// Appends `child` as the last child of this node, moving it out of its
    /// current parent first.
    ///
    /// Appending a fragment moves its children over and leaves it empty.
    /// Documents can't be appended, and neither can this node or any of its
    /// ancestors.
    pub fn append(&self, child: Handle) -> Result<()> {
        let kind = self.borrow().0.describe();
        if self.borrow().0.children().is_none() {
            return Err(Error::InvalidParent(kind));
        }

        let child_kind = child.borrow().0.describe();
        let mut ancestor = Some(self.clone());
        while let Some(node) = ancestor {
            if node.same_node(&child) {
                return Err(Error::HierarchyRequest(child_kind));
            }
            ancestor = node.parent();
        }

        let moved: Vec<Handle> = match child.borrow_mut().0 {
            Node::Document(..) => return Err(Error::HierarchyRequest(child_kind)),
            Node::Fragment(ref mut children) => children.drain(..).collect(),
            _ => vec![child.clone()],
        };

        for node in moved {
            node.remove_from_parent();
            if let Some(children) = self.borrow_mut().0.children_mut() {
                children.push(node.clone());
            }
            node.borrow_mut().1 = Some(self.downgrade());
        }

        Ok(())
    }

    pub fn remove_from_parent(&self) {
        let parent = match self.borrow_mut().1.take() {
            Some(parent) => parent,
            None => return,
        };

        if let Some(parent) = parent.upgrade() {
            if let Some(children) = parent.borrow_mut().0.children_mut() {
                children.retain(|c| !c.same_node(self));
            }
        }
    }
}

impl From<Node> for Handle {
    fn from(node: Node) -> Handle {
        Handle(Rc::new(RefCell::new((node, None))))
    }
}

impl Deref for Handle {
    type Target = Rc<RefCell<(Node, Option<WeakHandle>)>>;

    fn deref(&self) -> &Rc<RefCell<(Node, Option<WeakHandle>)>> {
        &self.0
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Handle) -> bool {
        self.borrow().0 == other.borrow().0
    }
}

impl DomNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.borrow().0 {
            Node::Document(..) | Node::Fragment(..) => NodeKind::Other,
            Node::Doctype(ref name) => NodeKind::Doctype(name.clone()),
            Node::Element(ref name, ref attributes, _) => {
                NodeKind::Element(name.clone(), attributes.clone())
            }
            Node::Text(ref text) => NodeKind::Text(text.clone()),
            Node::CdataSection(ref text) => NodeKind::CdataSection(text.clone()),
            Node::Comment(ref text) => NodeKind::Comment(text.clone()),
            Node::ProcessingInstruction(ref target, ref data) => {
                NodeKind::ProcessingInstruction(target.clone(), data.clone())
            }
        }
    }

    fn children(&self) -> Vec<Handle> {
        self.borrow().0.children().cloned().unwrap_or_default()
    }

    fn parent_name(&self) -> Option<QualName> {
        let parent = self.parent()?;
        let name = match parent.borrow().0 {
            Node::Element(ref name, _, _) => Some(name.clone()),
            _ => None,
        };
        name
    }
}

#[derive(Clone, Debug)]
pub struct WeakHandle(Weak<RefCell<(Node, Option<WeakHandle>)>>);

impl WeakHandle {
    pub fn upgrade(&self) -> Option<Handle> {
        self.0.upgrade().map(Handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use html5ever::{ns, LocalName};

    fn div() -> Handle {
        Handle::element(QualName::new(None, ns!(html), LocalName::from("div")), Vec::new())
    }

    #[test]
    fn test_append() {
        let document = Handle::document();
        let html = div();

        document.append(html.clone()).unwrap();

        assert!(html.parent().unwrap().same_node(&document));
        assert_eq!(document.children().len(), 1);
        assert!(document.children()[0].same_node(&html));
    }

    #[test]
    fn test_append_moves_child() {
        let first = div();
        let second = div();
        let text = Handle::text("moved");

        first.append(text.clone()).unwrap();
        second.append(text.clone()).unwrap();

        assert!(first.children().is_empty());
        assert!(second.children()[0].same_node(&text));
        assert!(text.parent().unwrap().same_node(&second));
    }

    #[test]
    fn test_append_to_leaf() {
        let text = Handle::text("leaf");

        match text.append(Handle::comment("nope")) {
            Err(Error::InvalidParent(kind)) => assert_eq!(kind, "text"),
            other => panic!("expected InvalidParent, got: {:?}", other),
        }
    }

    #[test]
    fn test_append_to_itself() {
        let parent = div();

        match parent.append(parent.clone()) {
            Err(Error::HierarchyRequest(kind)) => assert_eq!(kind, "element"),
            other => panic!("expected HierarchyRequest, got: {:?}", other),
        }
        assert!(parent.children().is_empty());
        assert!(parent.parent().is_none());
    }

    #[test]
    fn test_append_ancestor() {
        let outer = div();
        let inner = div();
        let leaf = div();
        outer.append(inner.clone()).unwrap();
        inner.append(leaf.clone()).unwrap();

        assert!(inner.append(outer.clone()).is_err());
        assert!(leaf.append(outer.clone()).is_err());
        assert!(outer.parent().is_none());
        assert!(leaf.children().is_empty());
        assert!(inner.children()[0].same_node(&leaf));
    }

    #[test]
    fn test_append_fragment_moves_children() {
        let parent = div();
        let fragment = Handle::fragment();
        fragment.append(Handle::text("a")).unwrap();
        fragment.append(Handle::comment("b")).unwrap();

        parent.append(fragment.clone()).unwrap();

        assert!(fragment.children().is_empty());
        assert!(fragment.parent().is_none());
        let children = parent.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], Handle::text("a"));
        assert_eq!(children[1], Handle::comment("b"));
        assert!(children[0].parent().unwrap().same_node(&parent));
    }

    #[test]
    fn test_append_document() {
        let parent = div();

        match parent.append(Handle::document()) {
            Err(Error::HierarchyRequest(kind)) => assert_eq!(kind, "document"),
            other => panic!("expected HierarchyRequest, got: {:?}", other),
        }
        assert!(parent.children().is_empty());
    }

    #[test]
    fn test_remove_from_parent() {
        let parent = div();
        let a = Handle::text("a");
        let b = Handle::text("b");

        parent.append(a.clone()).unwrap();
        parent.append(b.clone()).unwrap();
        a.remove_from_parent();

        assert_eq!(parent.children(), vec![b]);
        assert!(a.parent().is_none());
    }

    #[test]
    fn test_parent_name() {
        let parent = div();
        let text = Handle::text("child");
        parent.append(text.clone()).unwrap();

        assert_eq!(text.parent_name().map(|n| n.local), Some(LocalName::from("div")));
        assert!(parent.parent_name().is_none());

        let fragment = Handle::fragment();
        fragment.append(parent.clone()).unwrap();
        assert!(parent.parent_name().is_none());
    }

    #[test]
    fn test_parent_dropped() {
        let text = Handle::text("orphan");
        {
            let parent = div();
            parent.append(text.clone()).unwrap();
        }

        assert!(text.parent().is_none());
        assert!(text.parent_name().is_none());
    }

    #[test]
    fn test_kind() {
        let pi = Handle::processing_instruction("xml-stylesheet", "href=\"a.css\"");

        assert_eq!(pi.kind(),
                   NodeKind::ProcessingInstruction("xml-stylesheet".into(), "href=\"a.css\"".into()));
        assert_eq!(Handle::document().kind(), NodeKind::Other);
        assert_eq!(Handle::doctype("html").kind(), NodeKind::Doctype("html".into()));
    }
}
