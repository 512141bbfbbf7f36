// src/lib.rs

//! Garner — dependency-graph resolution engine
//!
//! Garner takes a root artifact's declared dependencies, a
//! dependency-management override table, and a set of remote metadata
//! sources, and produces a single consistent, conflict-free set of
//! resolved artifacts with determined versions and scopes.
//!
//! # Architecture
//!
//! - Recursive depth-first descent; children in declaration order
//! - Nearest-wins conflict resolution with scope widening, pluggable via
//!   a resolver chain
//! - Version ranges with interval arithmetic, mediated between competing
//!   declarations of one identity
//! - Managed versions override transitive dependencies, never the root's
//!   own direct declarations
//! - Failures accumulate as violations on the result; one bad branch
//!   never aborts the rest of the graph
//!
//! # Example
//!
//! ```no_run
//! use garner::artifact::Artifact;
//! use garner::resolver::{ArtifactCollector, CollectionRequest, EventLog};
//! use garner::version::VersionRange;
//! # use garner::source::{MetadataSource, MetadataError, Retrieval};
//! # use garner::artifact::RemoteRepository;
//! # struct Repo;
//! # impl MetadataSource for Repo {
//! #     fn retrieve(&mut self, _: &Artifact, _: &[RemoteRepository]) -> Result<Retrieval, MetadataError> { unimplemented!() }
//! #     fn available_versions(&mut self, _: &Artifact) -> Result<Vec<garner::version::Version>, MetadataError> { unimplemented!() }
//! # }
//! # let mut repo = Repo;
//!
//! let root = Artifact::new("org.example", "app", VersionRange::parse("1.0")?);
//! let dep = Artifact::new("org.example", "core", VersionRange::parse("[1.0,2.0)")?);
//!
//! let mut log = EventLog::new();
//! let result = ArtifactCollector::new(&mut repo)
//!     .with_listener(&mut log)
//!     .collect(CollectionRequest::new(root).dependency(dep));
//!
//! for artifact in result.artifacts() {
//!     println!("{}", artifact);
//! }
//! # Ok::<(), garner::Error>(())
//! ```

pub mod artifact;
mod error;
pub mod resolver;
pub mod source;
pub mod version;

pub use artifact::filter::{AndFilter, ArtifactFilter, ExclusionSetFilter, ScopeFilter};
pub use artifact::{Artifact, ConflictId, RemoteRepository, Scope};
pub use error::{Error, Result};
pub use resolver::{
    ArtifactCollector, CollectionRequest, ConflictResolver, EventLog, NearestWins,
    ResolutionEvent, ResolutionListener, ResolutionResult,
};
pub use source::{MetadataError, MetadataSource, Retrieval};
pub use version::{Version, VersionRange};
