
//! HTML fragment serialization for DOM trees.
//!
//! Any tree that implements [`DomNode`] can be written out either with the
//! node itself ([`serialize_outer`]) or as the concatenation of its
//! children ([`serialize_inner`]).
//!
//!     use html5ever::{ns, LocalName, QualName};
//!     use htmlfrag::dom::Handle;
//!     use htmlfrag::{serialize_inner, serialize_outer, Attribute};
//!
//!     let p = Handle::element(QualName::new(None, ns!(html), LocalName::from("p")),
//!                             vec![Attribute::new_str("id", "intro")]);
//!     p.append(Handle::text("Fish & chips")).unwrap();
//!
//!     assert_eq!(serialize_outer(&p), r#"<p id="intro">Fish &amp; chips</p>"#);
//!     assert_eq!(serialize_inner(&p), "Fish &amp; chips");

pub use html5ever::serialize::TraversalScope;
pub use html5ever::tendril;

pub use error::{Error, Result};
pub use node::{Attribute, DomNode, NodeKind};
pub use serializer::{attribute_name, element_name, escape_attribute, escape_text, serialize,
                     serialize_attributes, serialize_inner, serialize_outer,
                     serialize_to_string, DoctypeSyntax, SerializeOpts};

pub mod dom;
pub mod serializer;

mod error;
mod node;
#[cfg(feature = "rcdom")]
mod rcdom;
