//! Open frontier ordered by score.

use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

use crate::node::NodeId;

/// Total order over f64 scores.
#[derive(Debug, Clone, Copy)]
struct ScoreKey(f64);

impl PartialEq for ScoreKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for ScoreKey {}

impl PartialOrd for ScoreKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoreKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Nodes waiting to be expanded, lowest score first.
///
/// Nodes with equal scores leave in insertion order.
#[derive(Debug, Default)]
pub struct OpenFrontier {
    buckets: BTreeMap<ScoreKey, VecDeque<NodeId>>,
    len: usize,
}

impl OpenFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId, score: f64) {
        self.buckets.entry(ScoreKey(score)).or_default().push_back(id);
        self.len += 1;
    }

    /// Removes and returns the lowest-scored node.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        let mut bucket = self.buckets.first_entry()?;
        let id = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        if id.is_some() {
            self.len -= 1;
        }
        id
    }

    /// Removes `id` from the bucket for `score`. Returns false if absent.
    pub fn remove(&mut self, id: NodeId, score: f64) -> bool {
        let key = ScoreKey(score);
        let Some(bucket) = self.buckets.get_mut(&key) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|&n| n == id) else {
            return false;
        };
        bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        self.len -= 1;
        true
    }

    /// Open nodes in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.buckets.values().flat_map(|b| b.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
#[path = "frontier_tests.rs"]
mod tests;
