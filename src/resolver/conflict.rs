// src/resolver/conflict.rs

//! Conflict resolution policies
//!
//! When two active nodes compete for the same conflict identity, the
//! resolver chain is consulted in order and the first verdict wins. A
//! policy may abstain by returning `None`; if every policy abstains the
//! collector records a version-range violation and leaves the identity
//! unresolved.

use crate::resolver::node::{NodeId, ResolutionNode};

/// Selects the winner between two nodes competing for one conflict
/// identity
///
/// The returned id must name one of the two contenders; anything else is a
/// defect the collector reports rather than accepts.
pub trait ConflictResolver: std::fmt::Debug {
    fn resolve_conflict(&self, previous: &ResolutionNode, current: &ResolutionNode)
    -> Option<NodeId>;
}

/// The default policy: the node closer to the root wins, the previous node
/// on equal depth
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestWins;

impl ConflictResolver for NearestWins {
    fn resolve_conflict(
        &self,
        previous: &ResolutionNode,
        current: &ResolutionNode,
    ) -> Option<NodeId> {
        if previous.depth() <= current.depth() {
            Some(previous.id())
        } else {
            Some(current.id())
        }
    }
}

/// The node deeper in the tree wins, the previous node on equal depth
#[derive(Debug, Clone, Copy, Default)]
pub struct FarthestWins;

impl ConflictResolver for FarthestWins {
    fn resolve_conflict(
        &self,
        previous: &ResolutionNode,
        current: &ResolutionNode,
    ) -> Option<NodeId> {
        if previous.depth() >= current.depth() {
            Some(previous.id())
        } else {
            Some(current.id())
        }
    }
}

/// The higher version wins; abstains when either version is undetermined
#[derive(Debug, Clone, Copy, Default)]
pub struct NewestWins;

impl ConflictResolver for NewestWins {
    fn resolve_conflict(
        &self,
        previous: &ResolutionNode,
        current: &ResolutionNode,
    ) -> Option<NodeId> {
        let previous_version = previous.artifact().version()?;
        let current_version = current.artifact().version()?;
        if previous_version >= current_version {
            Some(previous.id())
        } else {
            Some(current.id())
        }
    }
}

/// The lower version wins; abstains when either version is undetermined
#[derive(Debug, Clone, Copy, Default)]
pub struct OldestWins;

impl ConflictResolver for OldestWins {
    fn resolve_conflict(
        &self,
        previous: &ResolutionNode,
        current: &ResolutionNode,
    ) -> Option<NodeId> {
        let previous_version = previous.artifact().version()?;
        let current_version = current.artifact().version()?;
        if previous_version <= current_version {
            Some(previous.id())
        } else {
            Some(current.id())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{Artifact, RemoteRepository};
    use crate::resolver::node::NodeArena;
    use crate::version::VersionRange;

    fn arena_with_two_depths() -> (NodeArena, NodeId, NodeId) {
        let mut arena = NodeArena::new();
        let root = arena.insert_root(
            Artifact::new("test", "root", VersionRange::parse("1.0").unwrap()),
            vec![RemoteRepository::new("central", "https://repo.example.org")],
        );
        arena
            .add_dependencies(
                root,
                vec![Artifact::new(
                    "test",
                    "a",
                    VersionRange::parse("1.0").unwrap(),
                )],
                &[],
                None,
            )
            .unwrap();
        let shallow = arena.node(root).children()[0];
        arena
            .add_dependencies(
                shallow,
                vec![Artifact::new(
                    "test",
                    "d",
                    VersionRange::parse("2.0").unwrap(),
                )],
                &[],
                None,
            )
            .unwrap();
        let deep = arena.node(shallow).children()[0];
        (arena, shallow, deep)
    }

    #[test]
    fn test_nearest_prefers_shallow() {
        let (arena, shallow, deep) = arena_with_two_depths();
        let resolver = NearestWins;
        assert_eq!(
            resolver.resolve_conflict(arena.node(shallow), arena.node(deep)),
            Some(shallow)
        );
        assert_eq!(
            resolver.resolve_conflict(arena.node(deep), arena.node(shallow)),
            Some(shallow)
        );
    }

    #[test]
    fn test_nearest_prefers_previous_on_tie() {
        let (arena, shallow, _) = arena_with_two_depths();
        let resolver = NearestWins;
        assert_eq!(
            resolver.resolve_conflict(arena.node(shallow), arena.node(shallow)),
            Some(shallow)
        );
    }

    #[test]
    fn test_farthest_prefers_deep() {
        let (arena, shallow, deep) = arena_with_two_depths();
        let resolver = FarthestWins;
        assert_eq!(
            resolver.resolve_conflict(arena.node(shallow), arena.node(deep)),
            Some(deep)
        );
    }

    #[test]
    fn test_newest_and_oldest_compare_versions() {
        let (arena, shallow, deep) = arena_with_two_depths();
        // shallow is 1.0, deep is 2.0
        assert_eq!(
            NewestWins.resolve_conflict(arena.node(shallow), arena.node(deep)),
            Some(deep)
        );
        assert_eq!(
            OldestWins.resolve_conflict(arena.node(shallow), arena.node(deep)),
            Some(shallow)
        );
    }

    #[test]
    fn test_version_policies_abstain_without_versions() {
        let mut arena = NodeArena::new();
        let root = arena.insert_root(
            Artifact::new("test", "root", VersionRange::parse("1.0").unwrap()),
            Vec::new(),
        );
        arena
            .add_dependencies(
                root,
                vec![Artifact::new(
                    "test",
                    "a",
                    VersionRange::parse("[1.0,2.0)").unwrap(),
                )],
                &[],
                None,
            )
            .unwrap();
        let unversioned = arena.node(root).children()[0];
        assert_eq!(
            NewestWins.resolve_conflict(arena.node(unversioned), arena.node(unversioned)),
            None
        );
        assert_eq!(
            OldestWins.resolve_conflict(arena.node(unversioned), arena.node(unversioned)),
            None
        );
    }
}
