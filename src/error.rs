
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The output sink failed while markup was being written.
    #[error("failed to write markup: {0}")]
    Io(#[from] io::Error),

    /// A child was appended to a node that cannot hold children.
    #[error("{0} nodes cannot have children")]
    InvalidParent(&'static str),

    /// The append would put a node inside itself, or put a document inside
    /// another node.
    #[error("cannot append a {0} here")]
    HierarchyRequest(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
