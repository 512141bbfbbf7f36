// src/resolver/mod.rs

//! Dependency resolution and conflict mediation
//!
//! This module builds the dependency graph by recursive descent from a
//! root artifact's declared dependencies, applies managed-version
//! overrides and version-range mediation, resolves conflicts between
//! competing versions of one identity, and assembles the final,
//! deterministic artifact set together with every violation encountered
//! along the way.

mod collector;
pub mod conflict;
pub mod events;
mod managed;
mod node;

pub use collector::{ArtifactCollector, CollectionRequest, ResolutionResult};
pub use conflict::{ConflictResolver, FarthestWins, NearestWins, NewestWins, OldestWins};
pub use events::{EventLog, ResolutionEvent, ResolutionListener, TraceListener};
pub use managed::ManagedVersionTable;
pub use node::{NodeId, ResolutionNode};
