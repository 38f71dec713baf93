//! Search node representation.
//!
//! Nodes live in an arena and refer to their parent by index, so the search
//! tree is walked back to the root without any shared ownership.

use std::ops::{Index, IndexMut};

use goapforge_core::WorldState;

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the search tree.
///
/// Each node holds a reached world state, the transition that produced it and
/// the cost of the cheapest known path from the root.
#[derive(Debug, Clone)]
pub struct PlannerNode {
    state: WorldState,

    /// Parent node (None for root).
    parent_index: Option<NodeId>,

    /// Index into the model's transitions of the edge from the parent.
    transition_index: Option<usize>,

    /// Accumulated path cost (g).
    cost: f64,

    /// Weighted distance to the goal (h).
    heuristic: f64,

    closed: bool,
}

impl PlannerNode {
    /// Creates a new root node.
    pub fn root(state: WorldState, heuristic: f64) -> Self {
        Self {
            state,
            parent_index: None,
            transition_index: None,
            cost: 0.0,
            heuristic,
            closed: false,
        }
    }

    /// Creates a child node.
    pub fn child(
        parent_index: NodeId,
        transition_index: usize,
        state: WorldState,
        cost: f64,
        heuristic: f64,
    ) -> Self {
        Self {
            state,
            parent_index: Some(parent_index),
            transition_index: Some(transition_index),
            cost,
            heuristic,
            closed: false,
        }
    }

    #[inline]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Mutable state, for lookups that bind defaults.
    #[inline]
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    #[inline]
    pub fn parent_index(&self) -> Option<NodeId> {
        self.parent_index
    }

    #[inline]
    pub fn transition_index(&self) -> Option<usize> {
        self.transition_index
    }

    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Frontier priority: cost + heuristic.
    #[inline]
    pub fn score(&self) -> f64 {
        self.cost + self.heuristic
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn mark_closed(&mut self) {
        self.closed = true;
    }

    /// Re-parents an open node onto a path that is no more expensive.
    pub fn relax(&mut self, parent_index: NodeId, transition_index: usize, cost: f64, heuristic: f64) {
        debug_assert!(!self.closed, "closed nodes are never relaxed");
        self.parent_index = Some(parent_index);
        self.transition_index = Some(transition_index);
        self.cost = cost;
        self.heuristic = heuristic;
    }
}

/// Owns every node created by one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<PlannerNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: PlannerNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root down to `id`.
    ///
    /// Only open leaves are ever re-parented, so parent links form a tree.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self[current].parent_index {
            debug_assert!(path.len() <= self.nodes.len(), "cycle in search tree");
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = PlannerNode;

    fn index(&self, id: NodeId) -> &PlannerNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut PlannerNode {
        &mut self.nodes[id.0]
    }
}
