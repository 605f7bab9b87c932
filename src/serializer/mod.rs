
use std::io::{self, Write};

use html5ever::serialize::TraversalScope;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::node::{DomNode, NodeKind};

pub use self::escape::{escape_attribute, escape_text};
pub use self::names::{attribute_name, element_name, namespace_info, qualified_name,
                      NamespaceInfo};
pub use self::serializer::{serialize_attributes, Serializer};

use self::elements::{is_raw_text, is_void, starts_with_newline};

mod elements;
mod escape;
mod names;
mod serializer;

/// How document type nodes are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoctypeSyntax {
    /// `<?DOCTYPE name>`, the format this serializer has always produced.
    Legacy,
    /// `<!DOCTYPE name>`.
    Standard,
}

impl Default for DoctypeSyntax {
    fn default() -> DoctypeSyntax {
        DoctypeSyntax::Legacy
    }
}

#[derive(Clone)]
pub struct SerializeOpts {
    /// Whether the node itself is serialized or only its children.
    pub traversal_scope: TraversalScope,
    pub doctype: DoctypeSyntax,
}

impl Default for SerializeOpts {
    fn default() -> SerializeOpts {
        SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            doctype: DoctypeSyntax::default(),
        }
    }
}

pub trait SerializeNode {
    fn serialize_node<W: Write>(&self, s: &mut Serializer<W>);
}

impl<N: DomNode> SerializeNode for N {
    fn serialize_node<W: Write>(&self, s: &mut Serializer<W>) {
        match self.kind() {
            NodeKind::Element(name, attrs) => {
                let name = element_name(&name);
                s.start_elem(&name, &attrs);

                if is_void(&name) {
                    trace!(element = %name, "void element, children are not serialized");
                    return;
                }

                if starts_with_newline(&name) {
                    s.write_newline();
                }

                self.children().serialize_nodes(s);
                s.end_elem(&name);
            }
            NodeKind::Text(data) | NodeKind::CdataSection(data) => {
                if in_raw_text(self) {
                    s.write_raw_text(&data);
                } else {
                    s.write_text(&data);
                }
            }
            NodeKind::Comment(data) => s.write_comment(&data),
            NodeKind::ProcessingInstruction(target, data) => {
                s.write_processing_instruction(&target, &data)
            }
            NodeKind::Doctype(name) => s.write_doctype(&name),
            NodeKind::Other => trace!("node has no markup of its own, skipping"),
        }
    }
}

pub trait SerializeNodes {
    fn serialize_nodes<W: Write>(self, s: &mut Serializer<W>);
}

impl<I: SerializeNode, T: IntoIterator<Item = I>> SerializeNodes for T {
    fn serialize_nodes<W: Write>(self, s: &mut Serializer<W>) {
        for node in self {
            node.serialize_node(s);
        }
    }
}

fn in_raw_text<N: DomNode>(node: &N) -> bool {
    node.parent_name()
        .map_or(false, |parent| is_raw_text(&qualified_name(&parent).to_lowercase()))
}

/// Serializes `node` into `writer`, either the node itself or only its
/// children depending on `opts.traversal_scope`.
pub fn serialize<W, N>(writer: &mut W, node: &N, opts: SerializeOpts) -> Result<()>
    where W: Write,
          N: DomNode
{
    let children_only = match opts.traversal_scope {
        TraversalScope::IncludeNode => false,
        TraversalScope::ChildrenOnly(_) => true,
    };
    debug!(children_only, "serializing node");

    let mut serializer = Serializer::new(writer, opts);
    if children_only {
        node.children().serialize_nodes(&mut serializer);
    } else {
        node.serialize_node(&mut serializer);
    }

    Ok(serializer.error()?)
}

/// Serializes `node` and its subtree.
pub fn serialize_outer<N: DomNode>(node: &N) -> String {
    in_memory(node, SerializeOpts::default())
}

/// Serializes the children of `node`, without the node itself.
pub fn serialize_inner<N: DomNode>(node: &N) -> String {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    in_memory(node, opts)
}

fn in_memory<N: DomNode>(node: &N, opts: SerializeOpts) -> String {
    match serialize_to_string(node, opts) {
        Ok(markup) => markup,
        Err(err) => {
            warn!(error = %err, "in-memory serialization failed");
            String::new()
        }
    }
}

/// Serializes into memory with the given options.
pub fn serialize_to_string<N: DomNode>(node: &N, opts: SerializeOpts) -> Result<String> {
    let mut buf = Vec::new();
    serialize(&mut buf, node, opts)?;
    let markup = String::from_utf8(buf)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(markup)
}
