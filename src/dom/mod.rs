
//! An owned, reference-counted document tree that can be built by hand and
//! handed to the serializer.

pub use self::handle::{Handle, Node, WeakHandle};

mod handle;
