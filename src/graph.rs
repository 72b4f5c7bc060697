/*
Undirected graph with two independent, non-negative weights per edge (price and time).

Each undirected edge is stored as two half-edges, one in the adjacency list of each endpoint.
Adjacency lists are flat vectors indexed by vertex; traversal yields the most recently added
half-edge first.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub type NodeId = usize;
/// Weight of a single flight. Path totals are widened to `Weight`, so a sum over fewer than
/// 2^32 edges never reaches `INF`.
pub type EdgeWeight = u32;
pub type Weight = u64;

/// Distance of a vertex that has not been reached.
pub const INF: Weight = Weight::MAX;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub to: NodeId,
    pub price: EdgeWeight,
    pub time: EdgeWeight,
}

/// Which edge weight a solve optimizes. The other one is carried along as a side cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Criterion {
    Price,
    Time,
}

impl Criterion {
    pub const ALL: [Criterion; 2] = [Criterion::Price, Criterion::Time];

    #[inline]
    pub fn weight(self, edge: &HalfEdge) -> Weight {
        Weight::from(match self {
            Criterion::Price => edge.price,
            Criterion::Time => edge.time,
        })
    }

    #[inline]
    pub fn side_weight(self, edge: &HalfEdge) -> Weight {
        Weight::from(match self {
            Criterion::Price => edge.time,
            Criterion::Time => edge.price,
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Price => write!(f, "price"),
            Criterion::Time => write!(f, "time"),
        }
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "price" | "p" => Ok(Criterion::Price),
            "time" | "t" => Ok(Criterion::Time),
            _ => Err(format!(
                "unknown criterion {:?}, possible options are: (\"price\", \"time\")",
                s
            )),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<HalfEdge>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, time, price)` tuples, added in slice order.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(NodeId, NodeId, EdgeWeight, EdgeWeight)],
    ) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(u, v, time, price) in edges {
            graph.add_edge(u, v, time, price);
        }
        graph
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges added so far.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn contains_vertex(&self, v: NodeId) -> bool {
        v < self.adjacency.len()
    }

    /// Adds an undirected edge. Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, time: EdgeWeight, price: EdgeWeight) {
        let n = self.vertex_count();
        assert!(u < n && v < n, "edge ({}, {}) out of range for {} vertices", u, v, n);
        self.adjacency[u].push(HalfEdge { to: v, price, time });
        self.adjacency[v].push(HalfEdge { to: u, price, time });
        self.edge_count += 1;
    }

    pub fn try_add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        time: EdgeWeight,
        price: EdgeWeight,
    ) -> Result<()> {
        for vertex in [u, v] {
            if !self.contains_vertex(vertex) {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }
        self.add_edge(u, v, time, price);
        Ok(())
    }

    /// Half-edges leaving `u`, latest-added first. Panics if `u` is out of range.
    #[inline]
    pub fn neighbors(&self, u: NodeId) -> impl DoubleEndedIterator<Item = &HalfEdge> + ExactSizeIterator + '_ {
        self.adjacency[u].iter().rev()
    }

    #[inline]
    pub fn degree(&self, u: NodeId) -> usize {
        self.adjacency[u].len()
    }

    /// Lightest `criterion` weight among the (possibly parallel) edges `u -> v`.
    pub fn edge_weight(&self, u: NodeId, v: NodeId, criterion: Criterion) -> Option<Weight> {
        self.neighbors(u)
            .filter(|e| e.to == v)
            .map(|e| criterion.weight(e))
            .min()
    }
}
