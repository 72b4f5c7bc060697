use crate::graph::NodeId;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex {vertex} out of range for {vertex_count} vertices")]
    InvalidVertex { vertex: NodeId, vertex_count: usize },

    #[error("parent chain loops back on vertex {vertex}")]
    ParentCycle { vertex: NodeId },

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("route file contains no flights")]
    EmptyNetwork,

    #[error("malformed route on line {line}: {reason}")]
    MalformedRoute { line: u64, reason: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
