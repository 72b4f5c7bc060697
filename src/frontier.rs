/*
The set of not-yet-settled vertices during a solve.

Two backends: the crate's own `IndexedMinHeap`, and `BinaryHeapWithMap` from orx-priority-queue,
which keeps node positions in a hash map instead of a dense array.
*/

use orx_priority_queue::*;

use crate::graph::{NodeId, Weight};

pub trait Frontier {
    /// Frontier holding vertices `0..keys.len()`, vertex `v` keyed by `keys[v]`.
    fn from_keys(keys: &[Weight]) -> Self;

    fn pop_min(&mut self) -> Option<(NodeId, Weight)>;

    /// `key` must not exceed the vertex's current key.
    fn decrease_key(&mut self, vertex: NodeId, key: Weight);

    fn contains(&self, vertex: NodeId) -> bool;
}

#[derive(Debug)]
pub struct OrxFrontier {
    pq: BinaryHeapWithMap<NodeId, Weight>,
}

impl Frontier for OrxFrontier {
    fn from_keys(keys: &[Weight]) -> Self {
        let mut pq = BinaryHeapWithMap::new();
        for (vertex, &key) in keys.iter().enumerate() {
            pq.push(vertex, key);
        }
        Self { pq }
    }

    fn pop_min(&mut self) -> Option<(NodeId, Weight)> {
        self.pq.pop()
    }

    fn decrease_key(&mut self, vertex: NodeId, key: Weight) {
        self.pq.decrease_key(&vertex, key);
    }

    fn contains(&self, vertex: NodeId) -> bool {
        self.pq.contains(&vertex)
    }
}

/// Frontier backend selected at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FrontierKind {
    Indexed,
    Orx,
}

impl FrontierKind {
    pub fn name(self) -> &'static str {
        match self {
            FrontierKind::Indexed => "indexed",
            FrontierKind::Orx => "orx",
        }
    }
}
