use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierKind, OrxFrontier};
use crate::graph::{Criterion, NodeId, Weight, WeightedGraph, INF};
use crate::indexed_heap::IndexedMinHeap;
use crate::path;

/// Per-vertex outcome of one solve. `dist` is in the optimized channel, `cost` in the other
/// channel, accumulated along the same optimal path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverResult {
    pub source: NodeId,
    pub destination: NodeId,
    pub criterion: Criterion,
    dist: Vec<Weight>,
    cost: Vec<Weight>,
    parent: Vec<Option<NodeId>>,
}

impl SolverResult {
    /// Optimal `criterion` total to `v`, `None` when unreachable.
    pub fn distance(&self, v: NodeId) -> Option<Weight> {
        Some(self.dist[v]).filter(|&d| d != INF)
    }

    /// Side-channel total along the optimal path to `v`, `None` when unreachable.
    pub fn cost(&self, v: NodeId) -> Option<Weight> {
        self.distance(v).map(|_| self.cost[v])
    }

    pub fn parent(&self, v: NodeId) -> Option<NodeId> {
        self.parent[v]
    }

    pub fn is_reachable(&self, v: NodeId) -> bool {
        self.dist[v] != INF
    }

    /// Raw distances, `INF` for unreachable vertices.
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Path from the source to `v`, or `None` if `v` is unreachable.
    pub fn path_to(&self, v: NodeId) -> Result<Option<Vec<NodeId>>> {
        if v >= self.dist.len() {
            return Err(Error::InvalidVertex {
                vertex: v,
                vertex_count: self.dist.len(),
            });
        }
        if !self.is_reachable(v) {
            return Ok(None);
        }
        path::reconstruct(&self.parent, v).map(Some)
    }

    pub fn path(&self) -> Result<Option<Vec<NodeId>>> {
        self.path_to(self.destination)
    }
}

/// Dijkstra from `source` under `criterion`, using the indexed binary heap as frontier.
pub fn solve(
    graph: &WeightedGraph,
    source: NodeId,
    destination: NodeId,
    criterion: Criterion,
) -> Result<SolverResult> {
    solve_with::<IndexedMinHeap>(graph, source, destination, criterion)
}

pub fn solve_using(
    kind: FrontierKind,
    graph: &WeightedGraph,
    source: NodeId,
    destination: NodeId,
    criterion: Criterion,
) -> Result<SolverResult> {
    match kind {
        FrontierKind::Indexed => solve_with::<IndexedMinHeap>(graph, source, destination, criterion),
        FrontierKind::Orx => solve_with::<OrxFrontier>(graph, source, destination, criterion),
    }
}

pub fn solve_with<F: Frontier>(
    graph: &WeightedGraph,
    source: NodeId,
    destination: NodeId,
    criterion: Criterion,
) -> Result<SolverResult> {
    let n = graph.vertex_count();
    for vertex in [source, destination] {
        if vertex >= n {
            return Err(Error::InvalidVertex {
                vertex,
                vertex_count: n,
            });
        }
    }

    let mut dist = vec![INF; n];
    let mut cost: Vec<Weight> = vec![0; n];
    let mut parent = vec![None; n];
    dist[source] = 0;

    let mut frontier = F::from_keys(&dist);
    let mut settled = 0_usize;

    while let Some((u, d)) = frontier.pop_min() {
        settled += 1;
        // Everything left is unreachable.
        if d == INF {
            continue;
        }
        for edge in graph.neighbors(u) {
            let v = edge.to;
            if !frontier.contains(v) {
                continue;
            }
            let next = d + criterion.weight(edge);
            if next < dist[v] {
                dist[v] = next;
                cost[v] = cost[u] + criterion.side_weight(edge);
                parent[v] = Some(u);
                frontier.decrease_key(v, next);
            }
        }
    }

    tracing::debug!(
        source,
        destination,
        %criterion,
        settled,
        reachable = dist.iter().filter(|&&d| d != INF).count(),
        "dijkstra finished"
    );

    Ok(SolverResult {
        source,
        destination,
        criterion,
        dist,
        cost,
        parent,
    })
}
