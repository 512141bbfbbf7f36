// src/resolver/collector.rs

//! The artifact collector
//!
//! Performs the recursive descent over a root artifact's declared
//! dependencies: applies managed-version overrides, mediates version
//! ranges between competing nodes, runs the conflict-resolver chain,
//! widens scopes, and compacts the visited-node history into the final
//! artifact set. Failures accumulate on the result as violations; only a
//! cycle or an over-constrained version among the caller-supplied root
//! dependencies aborts the whole call.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::artifact::filter::{AndFilter, ArtifactFilter};
use crate::artifact::{Artifact, ConflictId, RemoteRepository, Scope};
use crate::error::Error;
use crate::resolver::conflict::{ConflictResolver, NearestWins};
use crate::resolver::events::{ResolutionEvent, ResolutionListener};
use crate::resolver::managed::ManagedVersionTable;
use crate::resolver::node::{NodeArena, NodeId};
use crate::source::{MetadataSource, Retrieval};
use crate::version::Version;

/// The inputs of one resolution: the root artifact, its declared direct
/// dependencies (in declaration order), the managed-version override map,
/// and the remote repositories reachable from the root
#[derive(Debug)]
pub struct CollectionRequest {
    originating: Artifact,
    dependencies: Vec<Artifact>,
    managed_versions: HashMap<ConflictId, Artifact>,
    repositories: Vec<RemoteRepository>,
}

impl CollectionRequest {
    pub fn new(originating: Artifact) -> Self {
        CollectionRequest {
            originating,
            dependencies: Vec::new(),
            managed_versions: HashMap::new(),
            repositories: Vec::new(),
        }
    }

    /// Declare a direct dependency of the root. Order is preserved and
    /// determines traversal order.
    pub fn dependency(mut self, artifact: Artifact) -> Self {
        self.dependencies.push(artifact);
        self
    }

    pub fn dependencies(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.dependencies.extend(artifacts);
        self
    }

    /// Add a managed-version override, keyed by the artifact's conflict
    /// identity.
    pub fn managed_version(mut self, artifact: Artifact) -> Self {
        self.managed_versions.insert(artifact.conflict_id(), artifact);
        self
    }

    pub fn repository(mut self, repository: RemoteRepository) -> Self {
        self.repositories.push(repository);
        self
    }

    pub fn repositories(
        mut self,
        repositories: impl IntoIterator<Item = RemoteRepository>,
    ) -> Self {
        self.repositories.extend(repositories);
        self
    }
}

/// The outcome of a resolution
///
/// The artifact list contains only active, filter-surviving nodes (and
/// optional ones only when directly declared by the root), in discovery
/// order. The three violation collections must all be inspected before the
/// artifact set is trusted as complete: traversal continues past
/// individual failures.
#[derive(Debug, Default)]
pub struct ResolutionResult {
    artifacts: Vec<Artifact>,
    circular_violations: Vec<Error>,
    range_violations: Vec<Error>,
    metadata_errors: Vec<Error>,
}

impl ResolutionResult {
    /// The resolved artifacts, in discovery order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Cycles detected during resolution.
    pub fn circular_violations(&self) -> &[Error] {
        &self.circular_violations
    }

    /// Over-constrained versions, unresolvable conflicts, and resolver
    /// defects.
    pub fn range_violations(&self) -> &[Error] {
        &self.range_violations
    }

    /// Metadata-source failures, recorded per branch.
    pub fn metadata_errors(&self) -> &[Error] {
        &self.metadata_errors
    }

    pub fn has_violations(&self) -> bool {
        !self.circular_violations.is_empty()
            || !self.range_violations.is_empty()
            || !self.metadata_errors.is_empty()
    }

    /// Look up a resolved artifact by group and name.
    pub fn find(&self, group_id: &str, artifact_id: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.group_id() == group_id && a.artifact_id() == artifact_id)
    }
}

/// Orchestrates one dependency resolution
///
/// A collector is built per call: it borrows the metadata source for the
/// duration and owns all per-call state, so nothing is shared between
/// invocations.
pub struct ArtifactCollector<'a> {
    source: &'a mut dyn MetadataSource,
    filter: Option<&'a dyn ArtifactFilter>,
    resolvers: Vec<Box<dyn ConflictResolver>>,
    listeners: Vec<&'a mut dyn ResolutionListener>,
}

impl<'a> ArtifactCollector<'a> {
    /// Create a collector with the default nearest-wins policy.
    pub fn new(source: &'a mut dyn MetadataSource) -> Self {
        ArtifactCollector {
            source,
            filter: None,
            resolvers: vec![Box::new(NearestWins)],
            listeners: Vec::new(),
        }
    }

    /// Restrict resolution to artifacts the filter includes. Applied when
    /// children are attached and again over whole trails during
    /// compaction.
    pub fn with_filter(mut self, filter: &'a dyn ArtifactFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Replace the conflict-resolver chain. The first resolver with a
    /// verdict wins; an empty chain leaves every conflict unresolved.
    pub fn with_resolvers(mut self, resolvers: Vec<Box<dyn ConflictResolver>>) -> Self {
        self.resolvers = resolvers;
        self
    }

    /// Register an observer for resolution events.
    pub fn with_listener(mut self, listener: &'a mut dyn ResolutionListener) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Run the resolution.
    pub fn collect(self, request: CollectionRequest) -> ResolutionResult {
        let CollectionRequest {
            originating,
            dependencies,
            managed_versions,
            repositories,
        } = request;

        let managed = ManagedVersionTable::new(&originating, managed_versions);
        let mut arena = NodeArena::new();
        let root = arena.insert_root(originating, repositories.clone());

        let mut traversal = Traversal {
            arena,
            history: HashMap::new(),
            order: Vec::new(),
            managed,
            root,
            source: self.source,
            filter: self.filter,
            resolvers: self.resolvers,
            listeners: self.listeners,
            result: ResolutionResult::default(),
        };

        // a cycle or an over-constrained version among the root's own
        // declared dependencies means the request itself is malformed
        if let Err(error) =
            traversal
                .arena
                .add_dependencies(root, dependencies, &repositories, traversal.filter)
        {
            traversal.record(error);
            return traversal.result;
        }

        if let Err(error) = traversal.recurse(root) {
            debug!(%error, "resolution aborted a branch at top level");
            traversal.record(error);
        }

        traversal.compact();
        traversal.result
    }
}

/// Mutable state of one traversal
struct Traversal<'a> {
    arena: NodeArena,
    /// Conflict identity → every node ever instantiated for it, in
    /// discovery order.
    history: HashMap<ConflictId, Vec<NodeId>>,
    /// Conflict identities in first-discovery order, for deterministic
    /// compaction.
    order: Vec<ConflictId>,
    managed: ManagedVersionTable,
    root: NodeId,
    source: &'a mut dyn MetadataSource,
    filter: Option<&'a dyn ArtifactFilter>,
    resolvers: Vec<Box<dyn ConflictResolver>>,
    listeners: Vec<&'a mut dyn ResolutionListener>,
    result: ResolutionResult,
}

impl Traversal<'_> {
    fn fire(&mut self, event: ResolutionEvent) {
        trace!(?event, "resolution event");
        for listener in self.listeners.iter_mut() {
            listener.on_event(&event);
        }
    }

    /// Route an error into the violation collection it belongs to.
    fn record(&mut self, error: Error) {
        match &error {
            Error::CyclicDependency { .. } => self.result.circular_violations.push(error),
            Error::Metadata { .. } => self.result.metadata_errors.push(error),
            _ => self.result.range_violations.push(error),
        }
    }

    fn artifact_id(&self, node_id: NodeId) -> String {
        self.arena.node(node_id).artifact().id()
    }

    /// Visit one node: apply management, resolve conflicts against prior
    /// nodes of the same identity, then expand children if still active.
    fn recurse(&mut self, node_id: NodeId) -> Result<(), Error> {
        let artifact = self.artifact_id(node_id);
        self.fire(ResolutionEvent::TestArtifact { artifact });

        let key = self.arena.node(node_id).key();
        if self.managed.contains(&key) {
            self.manage_artifact(node_id);
        }

        match self.history.get(&key).cloned() {
            Some(previous_ids) => {
                for previous_id in previous_ids {
                    if !self.arena.node(previous_id).is_active() {
                        continue;
                    }
                    if let Err(error) = self.mediate(previous_id, node_id) {
                        match error {
                            Error::OverConstrainedVersion { .. } => self.record(error),
                            // metadata failures abort this node's visit
                            other => return Err(other),
                        }
                    }
                }
            }
            None => {
                self.history.insert(key.clone(), Vec::new());
                self.order.push(key.clone());
            }
        }
        self.history
            .get_mut(&key)
            .expect("history entry was just ensured")
            .push(node_id);

        if self.arena.node(node_id).is_active() {
            let artifact = self.artifact_id(node_id);
            self.fire(ResolutionEvent::IncludeArtifact { artifact });
        }

        // transitive dependencies of a system-scoped node are not pulled in
        if self.arena.node(node_id).is_active()
            && self.arena.node(node_id).artifact().scope() != Some(Scope::System)
        {
            self.expand_children(node_id)?;
        }
        Ok(())
    }

    fn expand_children(&mut self, node_id: NodeId) -> Result<(), Error> {
        for child_id in self.arena.node(node_id).children().to_vec() {
            let child = self.arena.node(child_id);
            if child.is_resolved() {
                continue;
            }
            // optional dependencies stay in the tree but contribute no
            // children of their own, unless the root declared them directly
            if child.artifact().is_optional() && !child.is_child_of_root() {
                continue;
            }

            if let Err(error) = self.expand_child(node_id, child_id) {
                match error {
                    Error::OverConstrainedVersion { .. } | Error::Metadata { .. } => {
                        debug!(%error, "pruning dependency branch");
                        self.record(error);
                    }
                    other => return Err(other),
                }
            }
        }
        Ok(())
    }

    /// Determine one child's effective coordinates (management, version
    /// selection, relocation), fetch its dependency list, attach the
    /// grandchildren, and recurse.
    fn expand_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<(), Error> {
        let parent_trail = self.arena.dependency_trail(parent_id)?;
        self.arena
            .node_mut(child_id)
            .artifact_mut()
            .set_dependency_trail(parent_trail);

        let repositories = self.arena.node(child_id).repositories().to_vec();

        // management and version selection re-run after a relocation, since
        // the new coordinates may be managed differently
        let found = loop {
            let child_key = self.arena.node(child_id).key();
            if self.managed.contains(&child_key) {
                self.manage_artifact(child_id);
                self.apply_managed_exclusions(child_id, &child_key);
            }

            if self.arena.node(child_id).artifact().version().is_none() {
                self.select_version_from_range(child_id)?;
            }

            // system-scoped artifacts resolve from the local path, never
            // from repository metadata
            if self.arena.node(child_id).artifact().scope() == Some(Scope::System) {
                break None;
            }

            let artifact = self.arena.node(child_id).artifact().clone();
            let retrieval = self
                .source
                .retrieve(&artifact, &repositories)
                .map_err(|source| Error::Metadata {
                    artifact: artifact.id(),
                    source,
                })?;
            match retrieval {
                Retrieval::Found {
                    dependencies,
                    repositories,
                } => break Some((dependencies, repositories)),
                Retrieval::NotFound => {
                    debug!(artifact = %artifact, "identity contributes nothing further");
                    break None;
                }
                Retrieval::Relocated(relocated) => {
                    debug!(from = %artifact, to = %relocated, "dependency relocated");
                    *self.arena.node_mut(child_id).artifact_mut() = *relocated;
                    if self.arena.node(child_id).key() == child_key {
                        return Err(Error::Metadata {
                            artifact: artifact.id(),
                            source: crate::source::MetadataError::new(
                                "relocation did not change the artifact's coordinates",
                            ),
                        });
                    }
                }
            }
        };

        if let Some((dependencies, dep_repositories)) = found {
            // the (possibly relocated) child may be excluded by its parent
            let parent_filter = self
                .arena
                .node(parent_id)
                .artifact()
                .dependency_filter()
                .cloned();
            if let Some(parent_filter) = parent_filter {
                if !parent_filter.include(self.arena.node(child_id).artifact()) {
                    return Ok(());
                }
            }

            if let Err(error) =
                self.arena
                    .add_dependencies(child_id, dependencies, &dep_repositories, self.filter)
            {
                match error {
                    // repository data legitimately contains cycles through
                    // rarely-traversed branches; prune the edge and move on
                    Error::CyclicDependency { ref artifact, .. } => {
                        debug!(%error, "cycle during child expansion");
                        self.fire(ResolutionEvent::OmitForCycle {
                            artifact: artifact.clone(),
                        });
                        self.record(error);
                    }
                    other => return Err(other),
                }
            }
        }

        self.recurse(child_id)
    }

    /// Conjoin a managed entry's exclusion filter onto the node's own.
    fn apply_managed_exclusions(&mut self, node_id: NodeId, key: &ConflictId) {
        let managed_filter = self
            .managed
            .get(key)
            .and_then(|managed| managed.dependency_filter().cloned());
        let Some(managed_filter) = managed_filter else {
            return;
        };
        let artifact = self.arena.node_mut(node_id).artifact_mut();
        match artifact.dependency_filter().cloned() {
            Some(own) => {
                artifact
                    .set_dependency_filter(Arc::new(AndFilter::new(vec![own, managed_filter])));
            }
            None => artifact.set_dependency_filter(managed_filter),
        }
    }

    /// Apply a managed-version override to a node. Overrides always apply
    /// to transitive nodes; the root's direct declarations only receive
    /// values they lack.
    fn manage_artifact(&mut self, node_id: NodeId) {
        let key = self.arena.node(node_id).key();
        let Some(managed) = self.managed.get(&key) else {
            return;
        };
        let managed_version = managed.version().cloned();
        let managed_scope = managed.scope();
        let managed_path = managed.system_path().cloned();

        let child_of_root = self.arena.node(node_id).is_child_of_root();

        if let Some(version) = managed_version {
            if !child_of_root || self.arena.node(node_id).artifact().version().is_none() {
                let artifact = self.artifact_id(node_id);
                self.fire(ResolutionEvent::ManageVersion {
                    artifact,
                    version: version.clone(),
                });
                self.arena
                    .node_mut(node_id)
                    .artifact_mut()
                    .set_version(version);
            }
        }

        if let Some(scope) = managed_scope {
            if !child_of_root || self.arena.node(node_id).artifact().scope().is_none() {
                let artifact = self.artifact_id(node_id);
                self.fire(ResolutionEvent::ManageScope { artifact, scope });
                self.arena.node_mut(node_id).artifact_mut().set_scope(scope);
            }
        }

        if let Some(path) = managed_path {
            let node = self.arena.node(node_id);
            if node.artifact().scope() == Some(Scope::System)
                && node.artifact().system_path().is_none()
            {
                let artifact = self.artifact_id(node_id);
                self.fire(ResolutionEvent::ManageSystemPath {
                    artifact,
                    path: path.clone(),
                });
                self.arena
                    .node_mut(node_id)
                    .artifact_mut()
                    .set_system_path(path);
            }
        }
    }

    /// Select a concrete version for an artifact that has none: take the
    /// range's recommendation, or match the range against the available
    /// catalog.
    fn select_version_from_range(&mut self, node_id: NodeId) -> Result<(), Error> {
        let artifact_id = self.artifact_id(node_id);
        let trail = self
            .arena
            .node(node_id)
            .artifact()
            .dependency_trail()
            .to_vec();

        let Some(range) = self.arena.node(node_id).artifact().range().cloned() else {
            return Err(Error::over_constrained(
                "the artifact has neither a version nor a range".to_string(),
                artifact_id,
            )
            .with_trail(trail));
        };

        let version = match range.recommended() {
            Some(recommended) => recommended.clone(),
            None => {
                if range.restrictions().is_empty() {
                    return Err(Error::over_constrained(
                        "the artifact has no valid ranges".to_string(),
                        artifact_id,
                    )
                    .with_trail(trail));
                }
                let versions = self.available_versions(node_id)?;
                match range.match_version(&versions) {
                    Some(version) => version.clone(),
                    None => {
                        let message = if versions.is_empty() {
                            format!(
                                "no versions are present in the repository for the artifact with a range {}",
                                range
                            )
                        } else {
                            format!(
                                "could not find a version in {} to match the range {}",
                                fmt_versions(&versions),
                                range
                            )
                        };
                        return Err(Error::over_constrained(message, artifact_id).with_trail(trail));
                    }
                }
            }
        };

        self.arena
            .node_mut(node_id)
            .artifact_mut()
            .select_version(version.clone());
        let artifact = self.artifact_id(node_id);
        self.fire(ResolutionEvent::SelectVersionFromRange { artifact, version });
        Ok(())
    }

    /// The node's available-version catalog, fetched lazily and cached on
    /// the artifact, ascending.
    fn available_versions(&mut self, node_id: NodeId) -> Result<Vec<Version>, Error> {
        if let Some(cached) = self.arena.node(node_id).artifact().available_versions() {
            return Ok(cached.to_vec());
        }
        let artifact = self.arena.node(node_id).artifact().clone();
        let mut versions =
            self.source
                .available_versions(&artifact)
                .map_err(|source| Error::Metadata {
                    artifact: artifact.id(),
                    source,
                })?;
        versions.sort();
        self.arena
            .node_mut(node_id)
            .artifact_mut()
            .set_available_versions(versions.clone());
        Ok(versions)
    }

    /// Mediate between a previously seen node and the current one:
    /// restrict both ranges by each other, re-select clobbered versions,
    /// pick a winner through the resolver chain, and apply scope widening.
    fn mediate(&mut self, previous_id: NodeId, current_id: NodeId) -> Result<(), Error> {
        let previous_range = self.arena.node(previous_id).artifact().range().cloned();
        let current_range = self.arena.node(current_id).artifact().range().cloned();

        if let (Some(previous_range), Some(current_range)) = (previous_range, current_range) {
            let restricted = previous_range.restrict(&current_range);
            if restricted.recommended().is_none() && restricted.restrictions().is_empty() {
                let previous = self.arena.node(previous_id).artifact();
                return Err(Error::over_constrained(
                    format!(
                        "the artifact has no valid ranges after restricting {} by {}",
                        previous_range, current_range
                    ),
                    previous.id(),
                )
                .with_trail(previous.dependency_trail().to_vec()));
            }
            if restricted.recommended().is_some()
                && (previous_range.has_restrictions() || current_range.has_restrictions())
            {
                let artifact = self.artifact_id(current_id);
                self.fire(ResolutionEvent::RestrictRange {
                    artifact,
                    restricted: restricted.to_string(),
                });
            }
            self.arena
                .node_mut(previous_id)
                .artifact_mut()
                .set_range(restricted);
            let current_restricted = current_range.restrict(&previous_range);
            self.arena
                .node_mut(current_id)
                .artifact_mut()
                .set_range(current_restricted);

            // restriction clobbers the selected version; re-select from the
            // catalog where the narrowed range no longer recommends one
            for node_id in [previous_id, current_id] {
                let artifact = self.arena.node(node_id).artifact();
                if artifact.version().is_some() {
                    continue;
                }
                let Some(range) = artifact.range().cloned() else {
                    continue;
                };
                let versions = self.available_versions(node_id)?;
                match range.match_version(&versions) {
                    Some(version) => {
                        let version = version.clone();
                        self.arena
                            .node_mut(node_id)
                            .artifact_mut()
                            .select_version(version.clone());
                        let artifact = self.artifact_id(node_id);
                        self.fire(ResolutionEvent::SelectVersionFromRange { artifact, version });
                    }
                    None => {
                        let artifact = self.arena.node(node_id).artifact();
                        return Err(Error::over_constrained(
                            format!(
                                "could not find a version in {} to match the range {}",
                                fmt_versions(&versions),
                                range
                            ),
                            artifact.id(),
                        )
                        .with_trail(artifact.dependency_trail().to_vec()));
                    }
                }
            }
        }

        // conflict resolution: first verdict in the chain wins
        let mut resolved = None;
        for resolver in &self.resolvers {
            resolved = resolver
                .resolve_conflict(self.arena.node(previous_id), self.arena.node(current_id));
            if resolved.is_some() {
                break;
            }
        }

        let Some(winner) = resolved else {
            let key = self.arena.node(previous_id).key().to_string();
            let previous_version = version_label(self.arena.node(previous_id).artifact());
            let current_version = version_label(self.arena.node(current_id).artifact());
            self.record(Error::VersionConflict {
                artifact: key,
                previous: previous_version,
                current: current_version,
            });
            return Ok(());
        };

        if winner != previous_id && winner != current_id {
            let key = self.arena.node(previous_id).key().to_string();
            self.record(Error::ForeignResolution { artifact: key });
            return Ok(());
        }

        let (nearest, farthest) = if winner == previous_id {
            (previous_id, current_id)
        } else {
            (current_id, previous_id)
        };
        trace!(
            nearest = %self.artifact_id(nearest),
            farthest = %self.artifact_id(farthest),
            "conflict resolved"
        );

        if self.check_scope_update(farthest, nearest) {
            // the nearest version still wins, but the farther node carries
            // the widened scope, so it survives with the nearest's version
            self.arena.disable(nearest);
            let nearest_version = self.arena.node(nearest).artifact().version().cloned();
            if let Some(version) = nearest_version {
                self.arena
                    .node_mut(farthest)
                    .artifact_mut()
                    .set_version(version);
            }
            let omitted = self.artifact_id(nearest);
            let kept = self.artifact_id(farthest);
            self.fire(ResolutionEvent::OmitForNearer { omitted, kept });
        } else {
            self.arena.disable(farthest);
            let omitted = self.artifact_id(farthest);
            let kept = self.artifact_id(nearest);
            self.fire(ResolutionEvent::OmitForNearer { omitted, kept });
        }
        Ok(())
    }

    /// Whether the farther node's broader scope must replace the nearer
    /// node's. `compile` outranks everything, `runtime` outranks `test`
    /// and `provided`; the root's direct declarations are never widened.
    fn check_scope_update(&mut self, farthest_id: NodeId, nearest_id: NodeId) -> bool {
        let farthest_scope = self.arena.node(farthest_id).artifact().scope();
        let nearest_scope = self.arena.node(nearest_id).artifact().scope();

        let mut update = false;
        if farthest_scope == Some(Scope::Runtime)
            && matches!(nearest_scope, Some(Scope::Test) | Some(Scope::Provided))
        {
            update = true;
        }
        if farthest_scope == Some(Scope::Compile) && nearest_scope != Some(Scope::Compile) {
            update = true;
        }

        if update && self.arena.node(nearest_id).depth() < 2 {
            let artifact = self.artifact_id(nearest_id);
            if let Some(requested) = farthest_scope {
                self.fire(ResolutionEvent::UpdateScopeSuppressed { artifact, requested });
            }
            return false;
        }

        if update {
            if let Some(scope) = farthest_scope {
                let artifact = self.artifact_id(nearest_id);
                self.fire(ResolutionEvent::UpdateScope { artifact, scope });
                self.arena.node_mut(nearest_id).artifact_mut().set_scope(scope);
            }
        }
        update
    }

    /// Compact the visited-node history into the final artifact set, in
    /// discovery order.
    fn compact(&mut self) {
        for key in self.order.clone() {
            let Some(node_ids) = self.history.get(&key).cloned() else {
                continue;
            };
            for node_id in node_ids {
                if node_id == self.root || !self.arena.node(node_id).is_active() {
                    continue;
                }
                match self.arena.filter_trail(node_id, self.filter) {
                    Ok(true) => {
                        let node = self.arena.node(node_id);
                        if node.is_child_of_root() || !node.artifact().is_optional() {
                            match self.arena.dependency_trail(node_id) {
                                Ok(trail) => {
                                    let artifact = self.arena.node_mut(node_id).artifact_mut();
                                    artifact.set_dependency_trail(trail);
                                    artifact.mark_resolved();
                                    self.result.artifacts.push(artifact.clone());
                                }
                                Err(error) => self.record(error),
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(error) => self.record(error),
                }
            }
        }
    }
}

fn version_label(artifact: &Artifact) -> String {
    match artifact.version() {
        Some(version) => version.to_string(),
        None => artifact
            .range()
            .map(|range| range.to_string())
            .unwrap_or_else(|| "?".to_string()),
    }
}

/// Ascending version list for error messages, e.g. `[1.0, 2.0]`.
fn fmt_versions(versions: &[Version]) -> String {
    let mut out = String::from("[");
    for (i, version) in versions.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(version.as_str());
    }
    out.push(']');
    out
}
