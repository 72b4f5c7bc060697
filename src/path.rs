use hashbrown::HashSet;

use crate::error::{Error, Result};
use crate::graph::NodeId;

/// Walks `parent` pointers back from `destination` to the vertex with no parent and returns
/// the vertices in travel order, that root first.
///
/// A destination without a parent yields just `[destination]`. Fails if the chain revisits a
/// vertex or points outside `parent`.
pub fn reconstruct(parent: &[Option<NodeId>], destination: NodeId) -> Result<Vec<NodeId>> {
    let check = |v: NodeId| {
        if v < parent.len() {
            Ok(v)
        } else {
            Err(Error::InvalidVertex {
                vertex: v,
                vertex_count: parent.len(),
            })
        }
    };

    let mut path = vec![check(destination)?];
    let mut visited = HashSet::new();
    visited.insert(destination);
    let mut cur = destination;
    while let Some(prev) = parent[cur] {
        let prev = check(prev)?;
        if !visited.insert(prev) {
            return Err(Error::ParentCycle { vertex: prev });
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_chain_from_root() {
        let parent = vec![None, Some(0), Some(1), Some(2), Some(0)];
        assert_eq!(reconstruct(&parent, 3).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(reconstruct(&parent, 4).unwrap(), vec![0, 4]);
    }

    #[test]
    fn root_is_its_own_path() {
        let parent = vec![None, Some(0)];
        assert_eq!(reconstruct(&parent, 0).unwrap(), vec![0]);
    }

    #[test]
    fn cycle_is_reported() {
        let parent = vec![None, Some(2), Some(3), Some(1)];
        let err = reconstruct(&parent, 1).unwrap_err();
        assert!(matches!(err, Error::ParentCycle { vertex: 1 }));
    }

    #[test]
    fn out_of_range_is_reported() {
        let parent = vec![None, Some(7)];
        assert!(matches!(
            reconstruct(&parent, 1),
            Err(Error::InvalidVertex { vertex: 7, vertex_count: 2 })
        ));
        assert!(matches!(
            reconstruct(&parent, 9),
            Err(Error::InvalidVertex { vertex: 9, .. })
        ));
    }
}
