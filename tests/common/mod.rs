// tests/common/mod.rs

//! In-memory dependency universe for driving the collector end to end.
//!
//! Artifacts are registered with their declared dependencies and the
//! universe answers the metadata-source interface from that table,
//! applying the usual scope-transitivity rules: test and provided
//! dependencies of an already scoped parent are not transitive, and a
//! parent's scope narrows what its children inherit.

use std::collections::HashMap;
use std::sync::Once;

use garner::artifact::{Artifact, ConflictId, RemoteRepository, Scope};
use garner::source::{MetadataError, MetadataSource, Retrieval};
use garner::version::{Version, VersionRange};

pub const GROUP: &str = "test";

static TRACING: Once = Once::new();

/// Install a test subscriber once so `RUST_LOG=garner=trace` surfaces the
/// collector's decisions when a test fails.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The effective scope of a dependency declared with `scope` under a
/// parent resolving with `inherited`, or `None` when the dependency is
/// not transitive in that position.
pub fn derive_scope(scope: Scope, inherited: Option<Scope>) -> Option<Scope> {
    let Some(inherited) = inherited else {
        return Some(scope);
    };
    if matches!(scope, Scope::Test | Scope::Provided) {
        return None;
    }
    let mut desired = Scope::Runtime;
    if scope == Scope::Compile && inherited == Scope::Compile {
        desired = Scope::Compile;
    }
    if inherited == Scope::Test {
        desired = Scope::Test;
    }
    if inherited == Scope::Provided {
        desired = Scope::Provided;
    }
    if scope == Scope::System {
        desired = Scope::System;
    }
    Some(desired)
}

#[derive(Default)]
pub struct Universe {
    specs: HashMap<ConflictId, Vec<Artifact>>,
    versions: HashMap<ConflictId, Vec<Version>>,
    relocations: HashMap<ConflictId, Artifact>,
    pub retrievals: usize,
}

impl Universe {
    pub fn new() -> Self {
        init_tracing();
        Universe::default()
    }

    /// Register an artifact with a compile scope and an empty dependency
    /// list, recording its version in the available catalog.
    pub fn artifact(&mut self, id: &str, spec: &str) -> Artifact {
        self.artifact_full(id, spec, Scope::Compile, false)
    }

    pub fn artifact_scoped(&mut self, id: &str, spec: &str, scope: Scope) -> Artifact {
        self.artifact_full(id, spec, scope, false)
    }

    pub fn artifact_optional(&mut self, id: &str, spec: &str) -> Artifact {
        self.artifact_full(id, spec, Scope::Compile, true)
    }

    pub fn artifact_full(&mut self, id: &str, spec: &str, scope: Scope, optional: bool) -> Artifact {
        let artifact = Artifact::new(GROUP, id, parse(spec))
            .with_scope(scope)
            .with_optional(optional);
        self.register(&artifact);
        artifact
    }

    /// Record the artifact's (possibly re-declared) dependency list and
    /// append its version to the catalog.
    pub fn register(&mut self, artifact: &Artifact) {
        let key = artifact.conflict_id();
        self.specs.insert(key.clone(), Vec::new());
        if let Some(version) = artifact.version() {
            self.versions.entry(key).or_default().push(version.clone());
        }
    }

    /// Declare a compile-scoped dependency of `parent`.
    pub fn dep(&mut self, parent: &Artifact, id: &str, spec: &str) -> Artifact {
        self.dep_scoped(parent, id, spec, Scope::Compile)
            .unwrap_or_else(|| panic!("dependency {} was not transitive", id))
    }

    /// Declare a scoped dependency of `parent`; returns `None` when the
    /// declaration is not transitive under the parent's scope.
    pub fn dep_scoped(
        &mut self,
        parent: &Artifact,
        id: &str,
        spec: &str,
        scope: Scope,
    ) -> Option<Artifact> {
        let derived = derive_scope(scope, parent.scope())?;
        let artifact = Artifact::new(GROUP, id, parse(spec)).with_scope(derived);
        self.register(&artifact);
        self.link(parent, artifact.clone());
        Some(artifact)
    }

    pub fn dep_optional(&mut self, parent: &Artifact, id: &str, spec: &str) -> Artifact {
        let artifact = Artifact::new(GROUP, id, parse(spec))
            .with_scope(Scope::Compile)
            .with_optional(true);
        self.register(&artifact);
        self.link(parent, artifact.clone());
        artifact
    }

    /// Link an already built artifact as a dependency of `parent`,
    /// bypassing declaration-time scope derivation (the linked artifact
    /// keeps exactly the scope it was built with).
    pub fn link(&mut self, parent: &Artifact, dependency: Artifact) {
        self.specs
            .entry(parent.conflict_id())
            .or_default()
            .push(dependency);
    }

    pub fn relocate(&mut self, from: &Artifact, to: &Artifact) {
        self.relocations.insert(from.conflict_id(), to.clone());
    }
}

fn parse(spec: &str) -> VersionRange {
    VersionRange::parse(spec).unwrap_or_else(|e| panic!("bad version spec {}: {}", spec, e))
}

impl MetadataSource for Universe {
    fn retrieve(
        &mut self,
        artifact: &Artifact,
        _repositories: &[RemoteRepository],
    ) -> Result<Retrieval, MetadataError> {
        self.retrievals += 1;
        let key = artifact.conflict_id();
        if let Some(target) = self.relocations.get(&key) {
            return Ok(Retrieval::Relocated(Box::new(target.clone())));
        }
        let Some(declared) = self.specs.get(&key) else {
            return Err(MetadataError::new(format!("no metadata for {}", key)));
        };

        let mut dependencies = Vec::new();
        for dependency in declared.clone() {
            let scope = match dependency.scope() {
                // test- and provided-scoped declarations keep their scope;
                // everything else inherits through the requesting artifact
                Some(scope @ (Scope::Test | Scope::Provided)) => scope,
                Some(scope) => match derive_scope(scope, artifact.scope()) {
                    Some(scope) => scope,
                    None => continue,
                },
                None => Scope::Compile,
            };
            let mut child = dependency;
            child.set_scope(scope);
            if let Some(filter) = artifact.dependency_filter() {
                if !filter.include(&child) {
                    continue;
                }
                child.set_dependency_filter(filter.clone());
            }
            dependencies.push(child);
        }
        Ok(Retrieval::Found {
            dependencies,
            repositories: Vec::new(),
        })
    }

    fn available_versions(&mut self, artifact: &Artifact) -> Result<Vec<Version>, MetadataError> {
        Ok(self
            .versions
            .get(&artifact.conflict_id())
            .cloned()
            .unwrap_or_default())
    }
}

/// (name, version, scope) triples of the result, sorted for comparison.
pub fn resolved(result: &garner::ResolutionResult) -> Vec<(String, String, String)> {
    let mut out: Vec<_> = result
        .artifacts()
        .iter()
        .map(|a| {
            (
                a.artifact_id().to_string(),
                a.version().map(|v| v.to_string()).unwrap_or_default(),
                a.scope().map(|s| s.to_string()).unwrap_or_default(),
            )
        })
        .collect();
    out.sort();
    out
}

/// (name, version) pairs of the result, sorted for comparison.
pub fn resolved_versions(result: &garner::ResolutionResult) -> Vec<(String, String)> {
    resolved(result)
        .into_iter()
        .map(|(name, version, _)| (name, version))
        .collect()
}

pub fn triple(name: &str, version: &str, scope: &str) -> (String, String, String) {
    (name.to_string(), version.to_string(), scope.to_string())
}

pub fn pair(name: &str, version: &str) -> (String, String) {
    (name.to_string(), version.to_string())
}
