// src/artifact/mod.rs

//! Artifact coordinates and resolution state
//!
//! An [`Artifact`] is a coordinate-addressed dependency: group, name, kind,
//! optional classifier, plus the mutable fields resolution fills in (the
//! selected version, the effective scope, the dependency trail). Competing
//! versions of the same logical dependency are bucketed by [`ConflictId`],
//! the version-independent part of the coordinates.

pub mod filter;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::artifact::filter::ArtifactFilter;
use crate::version::{Version, VersionRange};

/// Default artifact kind when none is declared.
pub const DEFAULT_KIND: &str = "lib";

/// A dependency's usage classification, governing widening precedence
/// during conflict resolution
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Runtime,
    Test,
    Provided,
    System,
}

/// The version-independent identity of a dependency
///
/// Two artifacts with the same conflict identity are competing versions of
/// the same logical dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConflictId {
    pub group_id: String,
    pub artifact_id: String,
    pub kind: String,
    pub classifier: Option<String>,
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.kind)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// A remote repository descriptor, opaque to the resolution algorithm
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        RemoteRepository {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// A coordinate-addressed dependency and its resolution state
#[derive(Debug, Clone)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    kind: String,
    classifier: Option<String>,
    range: Option<VersionRange>,
    version: Option<Version>,
    scope: Option<Scope>,
    optional: bool,
    system_path: Option<PathBuf>,
    dependency_filter: Option<Arc<dyn ArtifactFilter>>,
    available_versions: Option<Vec<Version>>,
    trail: Vec<String>,
    resolved: bool,
}

impl Artifact {
    /// Create an artifact from its coordinates and a version constraint.
    /// The range's recommended version, if any, becomes the selected
    /// version.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        range: VersionRange,
    ) -> Self {
        let version = range.recommended().cloned();
        Artifact {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            kind: DEFAULT_KIND.to_string(),
            classifier: None,
            range: Some(range),
            version,
            scope: None,
            optional: false,
            system_path: None,
            dependency_filter: None,
            available_versions: None,
            trail: Vec::new(),
            resolved: false,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_system_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.system_path = Some(path.into());
        self
    }

    pub fn with_dependency_filter(mut self, filter: Arc<dyn ArtifactFilter>) -> Self {
        self.dependency_filter = Some(filter);
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// The version this artifact currently resolves to, if determined.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn range(&self) -> Option<&VersionRange> {
        self.range.as_ref()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn system_path(&self) -> Option<&PathBuf> {
        self.system_path.as_ref()
    }

    pub fn dependency_filter(&self) -> Option<&Arc<dyn ArtifactFilter>> {
        self.dependency_filter.as_ref()
    }

    /// The ordered chain of artifact ids from the root to this artifact,
    /// filled in once resolution determines it.
    pub fn dependency_trail(&self) -> &[String] {
        &self.trail
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The version-independent bucket key for conflict detection.
    pub fn conflict_id(&self) -> ConflictId {
        ConflictId {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            kind: self.kind.clone(),
            classifier: self.classifier.clone(),
        }
    }

    /// A human-readable id including the version (or `?` before selection),
    /// used in trails and diagnostics.
    pub fn id(&self) -> String {
        match &self.version {
            Some(version) => format!("{}:{}", self.conflict_id(), version),
            None => format!("{}:?", self.conflict_id()),
        }
    }

    /// Select a concrete version, keeping the range.
    pub fn select_version(&mut self, version: Version) {
        self.version = Some(version);
    }

    /// Set the version outright, discarding any declared range. Used where
    /// the version is authoritative (managed overrides, conflict
    /// mediation), so later mediations no longer consult the range.
    pub fn set_version(&mut self, version: Version) {
        self.version = Some(version);
        self.range = None;
    }

    /// Replace the version constraint. The selected version follows the new
    /// range's recommendation, and is cleared when the range has none.
    pub fn set_range(&mut self, range: VersionRange) {
        self.version = range.recommended().cloned();
        self.range = Some(range);
    }

    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = Some(scope);
    }

    pub fn set_system_path(&mut self, path: PathBuf) {
        self.system_path = Some(path);
    }

    pub fn set_dependency_filter(&mut self, filter: Arc<dyn ArtifactFilter>) {
        self.dependency_filter = Some(filter);
    }

    pub fn set_dependency_trail(&mut self, trail: Vec<String>) {
        self.trail = trail;
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    /// The cached available-version catalog, if already retrieved.
    pub fn available_versions(&self) -> Option<&[Version]> {
        self.available_versions.as_deref()
    }

    pub fn set_available_versions(&mut self, versions: Vec<Version>) {
        self.available_versions = Some(versions);
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
