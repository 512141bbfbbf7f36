// src/resolver/managed.rs

//! Managed-version override table
//!
//! A dependency-management table maps conflict identities to artifacts
//! carrying authoritative versions, scopes, system paths, and exclusion
//! filters. Overrides always apply to transitive dependencies; a direct
//! declaration of the root only receives the managed value where its own
//! is missing.

use std::collections::HashMap;

use crate::artifact::{Artifact, ConflictId};

/// Conflict identity → override artifact
///
/// The originating (root) artifact's own identity is always absent, even if
/// the caller supplied it: a project cannot override its own coordinates
/// through its own management section. The caller's map is copied, never
/// mutated.
#[derive(Debug, Default)]
pub struct ManagedVersionTable {
    entries: HashMap<ConflictId, Artifact>,
}

impl ManagedVersionTable {
    /// Build the effective table for a resolution rooted at `originating`.
    pub fn new(originating: &Artifact, managed: HashMap<ConflictId, Artifact>) -> Self {
        let own = originating.conflict_id();
        let mut entries = managed;
        if entries.remove(&own).is_some() {
            tracing::debug!(
                artifact = %originating,
                "ignoring managed version for the originating artifact itself"
            );
        }
        ManagedVersionTable { entries }
    }

    pub fn get(&self, key: &ConflictId) -> Option<&Artifact> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &ConflictId) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
