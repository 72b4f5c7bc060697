//! Cheapest and fastest routes over a small flight network.
//!
//! Each flight carries a price and a duration. A solve runs Dijkstra under one of the two,
//! tracks the other along the winning path, and keeps parent pointers for path recovery.

pub mod dijkstra;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod indexed_heap;
pub mod network;
pub mod path;
pub mod report;

pub use dijkstra::{solve, solve_using, solve_with, SolverResult};
pub use error::{Error, Result};
pub use graph::{Criterion, WeightedGraph};
