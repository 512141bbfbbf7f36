// src/artifact/filter.rs

//! Artifact filters for exclusions and scope-based selection
//!
//! Filters decide which dependencies participate in resolution. They are
//! applied when children are attached and again over the whole ancestor
//! trail when the final artifact set is assembled, so an exclusion declared
//! at a shallow node blocks the identity on every deeper path.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::artifact::{Artifact, Scope};

/// Decides whether an artifact participates in resolution
pub trait ArtifactFilter: fmt::Debug {
    fn include(&self, artifact: &Artifact) -> bool;
}

/// Excludes artifacts by name or `group:name` key
#[derive(Debug, Clone, Default)]
pub struct ExclusionSetFilter {
    excluded: HashSet<String>,
}

impl ExclusionSetFilter {
    /// Build from exclusion keys: either a bare artifact name or
    /// `group:name`.
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExclusionSetFilter {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArtifactFilter for ExclusionSetFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        !self.excluded.contains(artifact.artifact_id())
            && !self
                .excluded
                .contains(&format!("{}:{}", artifact.group_id(), artifact.artifact_id()))
    }
}

/// Includes artifacts whose scope belongs to a build classpath
///
/// The `compile` classpath admits compile, provided, and system scopes;
/// `runtime` admits compile and runtime; `test` admits everything. An
/// artifact without a scope is always included.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    compile: bool,
    runtime: bool,
    test: bool,
    provided: bool,
    system: bool,
}

impl ScopeFilter {
    pub fn new(scope: Scope) -> Self {
        let mut filter = ScopeFilter {
            compile: false,
            runtime: false,
            test: false,
            provided: false,
            system: false,
        };
        match scope {
            Scope::Compile => {
                filter.compile = true;
                filter.provided = true;
                filter.system = true;
            }
            Scope::Runtime => {
                filter.compile = true;
                filter.runtime = true;
            }
            Scope::Test => {
                filter.compile = true;
                filter.runtime = true;
                filter.test = true;
                filter.provided = true;
                filter.system = true;
            }
            Scope::Provided => {
                filter.provided = true;
            }
            Scope::System => {
                filter.system = true;
            }
        }
        filter
    }
}

impl ArtifactFilter for ScopeFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        match artifact.scope() {
            None => true,
            Some(Scope::Compile) => self.compile,
            Some(Scope::Runtime) => self.runtime,
            Some(Scope::Test) => self.test,
            Some(Scope::Provided) => self.provided,
            Some(Scope::System) => self.system,
        }
    }
}

/// Conjunction of filters: includes only what every member includes
#[derive(Debug, Clone, Default)]
pub struct AndFilter {
    filters: Vec<Arc<dyn ArtifactFilter>>,
}

impl AndFilter {
    pub fn new(filters: Vec<Arc<dyn ArtifactFilter>>) -> Self {
        AndFilter { filters }
    }

    pub fn push(&mut self, filter: Arc<dyn ArtifactFilter>) {
        self.filters.push(filter);
    }
}

impl ArtifactFilter for AndFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        self.filters.iter().all(|f| f.include(artifact))
    }
}
