
use html5ever::tendril::StrTendril;
use html5ever::{ns, LocalName, QualName};

/// Read-only view of a node in a host document tree.
///
/// The serializer never keeps anything it gets from here past a single
/// call, so implementations are free to hand out cheap clones of
/// reference-counted handles.
pub trait DomNode: Sized {
    /// The node's kind together with the payload the serializer needs.
    fn kind(&self) -> NodeKind;

    /// Child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// Name of the parent node if it is an element.
    fn parent_name(&self) -> Option<QualName>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Element(QualName, Vec<Attribute>),
    Text(StrTendril),
    CdataSection(StrTendril),
    Comment(StrTendril),
    /// Target and data.
    ProcessingInstruction(StrTendril, StrTendril),
    Doctype(StrTendril),
    /// Documents, fragments and anything else that has no markup of its own.
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: QualName,
    value: StrTendril,
    specified: bool,
}

impl Attribute {
    pub fn new(name: QualName, value: StrTendril) -> Attribute {
        Attribute {
            name,
            value,
            specified: true,
        }
    }

    /// An attribute that only exists as a default and is never serialized.
    pub fn implied(name: QualName, value: StrTendril) -> Attribute {
        Attribute {
            name,
            value,
            specified: false,
        }
    }

    pub fn new_str(name: &str, value: &str) -> Attribute {
        Attribute::new(QualName::new(None, ns!(), LocalName::from(name)), value.into())
    }

    pub fn name(&self) -> &QualName {
        &self.name
    }

    pub fn value(&self) -> &StrTendril {
        &self.value
    }

    pub fn specified(&self) -> bool {
        self.specified
    }
}

impl From<html5ever::Attribute> for Attribute {
    fn from(attr: html5ever::Attribute) -> Attribute {
        Attribute::new(attr.name, attr.value)
    }
}

impl From<Attribute> for html5ever::Attribute {
    fn from(attr: Attribute) -> html5ever::Attribute {
        html5ever::Attribute {
            name: attr.name,
            value: attr.value,
        }
    }
}
