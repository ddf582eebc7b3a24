use crate::common::frontmatter::FrontmatterError;
use thiserror::Error;

/// Errors raised by store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt contract document {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: FrontmatterError,
    },

    #[error("Failed to render contract {id}: {source}")]
    Render {
        id: String,
        #[source]
        source: FrontmatterError,
    },

    #[error("Contract not found in store: {0}")]
    NotFound(String),

    #[error("Contract is already persisted as {0}")]
    AlreadyPersisted(String),

    #[error("Contract has no identity yet")]
    MissingId,

    #[error(
        "Store is locked by another writer ({path}); remove the file if no other writer is running"
    )]
    Locked { path: String },

    #[error("Cannot tell which number contract {id} holds: {reason}")]
    NumberUnknown { id: String, reason: String },
}
