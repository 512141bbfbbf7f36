// src/error.rs

//! Error types for dependency resolution
//!
//! Resolution is designed to degrade gracefully: most of these errors are
//! accumulated on the [`ResolutionResult`](crate::resolver::ResolutionResult)
//! as violations rather than returned early, so a single bad branch does not
//! prevent the rest of the graph from resolving.

use thiserror::Error;

use crate::source::MetadataError;

/// Errors raised while resolving a dependency graph
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A version range specification could not be parsed
    #[error("invalid version range `{spec}`: {reason}")]
    InvalidRange { spec: String, reason: String },

    /// An artifact depends, directly or transitively, on an ancestor with
    /// the same conflict identity
    #[error("dependency {artifact} introduces a cycle: {}", .trail.join(" -> "))]
    CyclicDependency { artifact: String, trail: Vec<String> },

    /// A version range matched nothing, or no version could be determined
    #[error("{message}\n  artifact: {artifact}{}", fmt_trail(.trail))]
    OverConstrainedVersion {
        message: String,
        artifact: String,
        trail: Vec<String>,
    },

    /// No conflict resolver produced a verdict for two competing versions
    #[error("unable to resolve version conflict for {artifact} between {previous} and {current}")]
    VersionConflict {
        artifact: String,
        previous: String,
        current: String,
    },

    /// A conflict resolver returned a node that was not one of the two
    /// contenders; treated as recoverable so the rest of the graph resolves
    #[error("conflict resolver selected a node that is not a contender for {artifact}")]
    ForeignResolution { artifact: String },

    /// The metadata source failed to answer for an artifact
    #[error("unable to get dependency information for {artifact}: {source}")]
    Metadata {
        artifact: String,
        #[source]
        source: MetadataError,
    },
}

impl Error {
    /// Shorthand for the over-constrained case that carries no trail yet.
    pub(crate) fn over_constrained(message: impl Into<String>, artifact: impl Into<String>) -> Self {
        Error::OverConstrainedVersion {
            message: message.into(),
            artifact: artifact.into(),
            trail: Vec::new(),
        }
    }

    /// Attach a dependency trail to an over-constrained error, replacing an
    /// empty one.
    pub(crate) fn with_trail(self, new_trail: Vec<String>) -> Self {
        match self {
            Error::OverConstrainedVersion {
                message,
                artifact,
                trail,
            } => Error::OverConstrainedVersion {
                message,
                artifact,
                trail: if trail.is_empty() { new_trail } else { trail },
            },
            other => other,
        }
    }
}

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

fn fmt_trail(trail: &[String]) -> String {
    use std::fmt::Write;

    if trail.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n  path to dependency:");
    for (i, id) in trail.iter().enumerate() {
        let _ = write!(out, "\n    {}) {}", i + 1, id);
    }
    out
}
