// src/resolver/node.rs

//! Resolution graph nodes
//!
//! Nodes live in a per-call arena and reference each other by [`NodeId`],
//! so parent links cannot create ownership cycles and both sides of a
//! conflict can be mutated through the arena. Each node owns its
//! [`Artifact`]; there is no shared mutable record.

use crate::artifact::filter::ArtifactFilter;
use crate::artifact::{Artifact, ConflictId, RemoteRepository};
use crate::error::{Error, Result};

/// Handle to a node in the resolution arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One node of the dependency tree built during traversal
///
/// A node is created when its edge is first discovered and never destroyed;
/// losing a conflict resolution disables it, which is terminal. Disabled
/// nodes stay in the history for auditability but contribute nothing to the
/// final artifact set, and their children are never traversed further.
#[derive(Debug)]
pub struct ResolutionNode {
    id: NodeId,
    artifact: Artifact,
    parent: Option<NodeId>,
    depth: usize,
    /// Conflict identities from the root through this node.
    trail: Vec<ConflictId>,
    repositories: Vec<RemoteRepository>,
    children: Option<Vec<NodeId>>,
    active: bool,
}

impl ResolutionNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn artifact_mut(&mut self) -> &mut Artifact {
        &mut self.artifact
    }

    /// The conflict identity this node competes under.
    pub fn key(&self) -> ConflictId {
        self.artifact.conflict_id()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn repositories(&self) -> &[RemoteRepository] {
        &self.repositories
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether children have been attached (possibly an empty set).
    pub fn is_resolved(&self) -> bool {
        self.children.is_some()
    }

    /// True only for depth-1 nodes: the root's own direct declarations,
    /// which are authoritative for version and scope.
    pub fn is_child_of_root(&self) -> bool {
        self.depth == 1
    }

    pub(crate) fn disable(&mut self) {
        self.active = false;
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Arena of resolution nodes for a single collector invocation
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<ResolutionNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    pub fn node(&self, id: NodeId) -> &ResolutionNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut ResolutionNode {
        &mut self.nodes[id.0]
    }

    /// Disable a node and, transitively, every child below it: a subtree
    /// that lost conflict resolution contributes nothing to the result,
    /// including the parts that were already traversed.
    pub fn disable(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            let node = self.node_mut(node_id);
            node.disable();
            stack.extend_from_slice(node.children());
        }
    }

    /// Create the root node at depth 0.
    pub fn insert_root(&mut self, artifact: Artifact, repositories: Vec<RemoteRepository>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let trail = vec![artifact.conflict_id()];
        self.nodes.push(ResolutionNode {
            id,
            artifact,
            parent: None,
            depth: 0,
            trail,
            repositories,
            children: None,
            active: true,
        });
        id
    }

    /// Attach dependencies as children of `parent`, skipping those the
    /// filter rejects.
    ///
    /// Each child is checked against the parent's ancestor trail *before*
    /// it is attached; a dependency whose conflict identity already appears
    /// there fails with [`Error::CyclicDependency`]. Children attached up
    /// to that point stay attached, so a swallowed cycle only prunes the
    /// offending edge and everything declared after it.
    pub fn add_dependencies(
        &mut self,
        parent: NodeId,
        dependencies: Vec<Artifact>,
        repositories: &[RemoteRepository],
        filter: Option<&dyn ArtifactFilter>,
    ) -> Result<()> {
        let mut children = Vec::with_capacity(dependencies.len());
        let parent_trail = self.node(parent).trail.clone();
        let parent_depth = self.node(parent).depth;
        let parent_repositories = self.node(parent).repositories.clone();

        let mut cycle = None;
        for artifact in dependencies {
            if let Some(filter) = filter {
                if !filter.include(&artifact) {
                    continue;
                }
            }
            let key = artifact.conflict_id();
            if parent_trail.contains(&key) {
                cycle = Some(Error::CyclicDependency {
                    artifact: artifact.id(),
                    trail: parent_trail.iter().map(ToString::to_string).collect(),
                });
                break;
            }

            let child_repositories = if repositories.is_empty() {
                parent_repositories.clone()
            } else {
                repositories.to_vec()
            };
            let id = NodeId(self.nodes.len());
            let mut trail = parent_trail.clone();
            trail.push(key);
            self.nodes.push(ResolutionNode {
                id,
                artifact,
                parent: Some(parent),
                depth: parent_depth + 1,
                trail,
                repositories: child_repositories,
                children: None,
                active: true,
            });
            children.push(id);
        }

        self.node_mut(parent).children = Some(children);
        match cycle {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// The node ids from the root down to `id`, inclusive.
    fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.node(node_id).parent;
        }
        path.reverse();
        path
    }

    /// Materialize the artifact-id chain from the root to `id`, forcing a
    /// version selection on every artifact along the way. Fails with
    /// `OverConstrainedVersion` when an artifact has neither a selected nor
    /// a recommended version.
    pub fn dependency_trail(&mut self, id: NodeId) -> Result<Vec<String>> {
        let path = self.path_to_root(id);
        let mut trail = Vec::with_capacity(path.len());
        for node_id in path {
            let node = self.node_mut(node_id);
            if node.artifact.version().is_none() {
                let recommended = node
                    .artifact
                    .range()
                    .and_then(|range| range.recommended().cloned());
                match recommended {
                    Some(version) => node.artifact.select_version(version),
                    None => {
                        return Err(Error::over_constrained(
                            "unable to determine the release version",
                            node.artifact.id(),
                        ));
                    }
                }
            }
            trail.push(node.artifact.id());
        }
        Ok(trail)
    }

    /// Whether every artifact on the root-to-node chain passes the filter.
    /// Exclusions declared deep in the tree must still block attribution at
    /// shallower levels, so the whole chain is consulted.
    pub fn filter_trail(&mut self, id: NodeId, filter: Option<&dyn ArtifactFilter>) -> Result<bool> {
        let Some(filter) = filter else {
            return Ok(true);
        };
        // force version selection the same way the trail computation does
        self.dependency_trail(id)?;
        let path = self.path_to_root(id);
        Ok(path
            .into_iter()
            .all(|node_id| filter.include(&self.nodes[node_id.0].artifact)))
    }
}
