
//! Serialization support for trees built by html5ever's `RcDom`.

use html5ever::QualName;
use markup5ever_rcdom::{Handle, NodeData};

use crate::node::{Attribute, DomNode, NodeKind};

impl DomNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Document => NodeKind::Other,
            NodeData::Doctype { ref name, .. } => NodeKind::Doctype(name.clone()),
            NodeData::Text { ref contents } => NodeKind::Text(contents.borrow().clone()),
            NodeData::Comment { ref contents } => NodeKind::Comment(contents.clone()),
            NodeData::Element { ref name, ref attrs, .. } => {
                let attrs = attrs.borrow().iter().cloned().map(Attribute::from).collect();
                NodeKind::Element(name.clone(), attrs)
            }
            NodeData::ProcessingInstruction { ref target, ref contents } => {
                NodeKind::ProcessingInstruction(target.clone(), contents.clone())
            }
        }
    }

    /// Template contents live in a separate fragment and are not returned.
    fn children(&self) -> Vec<Handle> {
        self.children.borrow().clone()
    }

    fn parent_name(&self) -> Option<QualName> {
        // The parent link sits in a `Cell`, so it has to be taken out and
        // put back.
        let weak = self.parent.take();
        let parent = weak.as_ref().and_then(|p| p.upgrade());
        self.parent.set(weak);

        match parent?.data {
            NodeData::Element { ref name, .. } => Some(name.clone()),
            _ => None,
        }
    }
}
