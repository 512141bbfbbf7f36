// src/source.rs

//! The metadata source seam
//!
//! Resolution consumes remote metadata through this narrow interface: given
//! an artifact, return its direct dependencies and applicable repositories,
//! or its known available versions. Transport, storage layout, and caching
//! across calls are the implementor's concern; so is retry policy. Calls
//! are synchronous and may block.

use std::fmt;
use std::sync::Arc;

use crate::artifact::{Artifact, RemoteRepository};
use crate::version::Version;

/// A failure reported by a metadata source
///
/// The resolver wraps these in [`Error::Metadata`](crate::Error::Metadata)
/// and records them per branch; sibling branches still resolve.
#[derive(Debug, Clone)]
pub struct MetadataError {
    message: String,
    cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}

impl MetadataError {
    pub fn new(message: impl Into<String>) -> Self {
        MetadataError {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        MetadataError {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }
}

/// The outcome of a metadata retrieval
#[derive(Debug)]
pub enum Retrieval {
    /// The artifact's direct dependencies, with the repositories they may
    /// be fetched from. An empty repository list means "use the ones the
    /// requesting node already knows".
    Found {
        dependencies: Vec<Artifact>,
        repositories: Vec<RemoteRepository>,
    },
    /// The artifact has moved; resolution retries under the new
    /// coordinates.
    Relocated(Box<Artifact>),
    /// The identity contributes nothing further (for example an excluded
    /// relocation target). Not an error: the child is dropped silently.
    NotFound,
}

impl fmt::Display for Retrieval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Retrieval::Found { dependencies, .. } => {
                write!(f, "found ({} dependencies)", dependencies.len())
            }
            Retrieval::Relocated(artifact) => write!(f, "relocated to {}", artifact),
            Retrieval::NotFound => write!(f, "not found"),
        }
    }
}

/// Supplies dependency metadata for artifacts
pub trait MetadataSource {
    /// Resolve the artifact's direct dependency list.
    fn retrieve(
        &mut self,
        artifact: &Artifact,
        repositories: &[RemoteRepository],
    ) -> Result<Retrieval, MetadataError>;

    /// The versions known for the artifact's coordinates, ascending.
    fn available_versions(&mut self, artifact: &Artifact) -> Result<Vec<Version>, MetadataError>;
}
