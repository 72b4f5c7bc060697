/*
Binary min-heap over vertex ids with decrease-key.

The backing array `slots` holds every vertex exactly once. The first `size` slots form the heap;
vertices past `size` have been extracted and never come back. `position[v]` is the slot that
currently holds `v`, so membership is `position[v] < size` and decrease-key can find its entry
without a search.

    parent(i) = (i - 1) / 2,  left(i) = 2i + 1,  right(i) = 2i + 2
    keys[slots[parent(i)]] <= keys[slots[i]]  for 0 < i < size
*/

use crate::frontier::Frontier;
use crate::graph::{NodeId, Weight};

#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<NodeId>,
    position: Vec<usize>,
    keys: Vec<Weight>,
    size: usize,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

impl IndexedMinHeap {
    /// Builds a heap holding vertices `0..keys.len()`, vertex `v` keyed by `keys[v]`. O(V).
    pub fn build(keys: &[Weight]) -> Self {
        let n = keys.len();
        let mut heap = Self {
            slots: (0..n).collect(),
            position: (0..n).collect(),
            keys: keys.to_vec(),
            size: n,
        };
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn contains(&self, vertex: NodeId) -> bool {
        self.position[vertex] < self.size
    }

    /// Removes the vertex with the smallest key. Ties come out in heap order.
    pub fn extract_min(&mut self) -> Option<(NodeId, Weight)> {
        if self.is_empty() {
            return None;
        }
        let root = self.slots[0];
        let last = self.size - 1;
        self.swap_slots(0, last);
        self.size = last;
        self.sift_down(0);
        Some((root, self.keys[root]))
    }

    /// Lowers the key of an active vertex and restores heap order.
    ///
    /// Panics if `vertex` was already extracted. Raising a key breaks heap order, which is
    /// caught in debug builds.
    pub fn decrease_key(&mut self, vertex: NodeId, new_key: Weight) {
        assert!(self.contains(vertex), "decrease_key on settled vertex {}", vertex);
        debug_assert!(
            new_key <= self.keys[vertex],
            "decrease_key would raise key of {} from {} to {}",
            vertex,
            self.keys[vertex],
            new_key
        );
        self.keys[vertex] = new_key;
        self.sift_up(self.position[vertex]);
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.position[self.slots[a]] = a;
        self.position[self.slots[b]] = b;
    }

    #[inline]
    fn slot_key(&self, i: usize) -> Weight {
        self.keys[self.slots[i]]
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.slot_key(i) < self.slot_key(parent(i)) {
            self.swap_slots(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            let (l, r) = (left(i), right(i));
            if l < self.size && self.slot_key(l) < self.slot_key(smallest) {
                smallest = l;
            }
            if r < self.size && self.slot_key(r) < self.slot_key(smallest) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
impl IndexedMinHeap {
    fn len(&self) -> usize {
        self.size
    }

    fn key(&self, vertex: NodeId) -> Weight {
        self.keys[vertex]
    }

    fn root(&self) -> Option<NodeId> {
        self.slots[..self.size].first().copied()
    }

    fn is_heap_ordered(&self) -> bool {
        (1..self.size).all(|i| self.slot_key(parent(i)) <= self.slot_key(i))
    }
}

impl Frontier for IndexedMinHeap {
    fn from_keys(keys: &[Weight]) -> Self {
        IndexedMinHeap::build(keys)
    }

    fn pop_min(&mut self) -> Option<(NodeId, Weight)> {
        self.extract_min()
    }

    fn decrease_key(&mut self, vertex: NodeId, key: Weight) {
        IndexedMinHeap::decrease_key(self, vertex, key)
    }

    fn contains(&self, vertex: NodeId) -> bool {
        IndexedMinHeap::contains(self, vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::INF;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn it_works() {
        let mut heap = IndexedMinHeap::build(&[10, 5, 7, 8, INF]);
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.root(), Some(1));
        heap.decrease_key(4, 2);
        assert_eq!(heap.extract_min(), Some((4, 2)));
        assert_eq!(heap.extract_min(), Some((1, 5)));
        assert!(!heap.contains(1));
        assert!(heap.contains(0));
        assert_eq!(heap.extract_min(), Some((2, 7)));
        assert_eq!(heap.extract_min(), Some((3, 8)));
        assert_eq!(heap.extract_min(), Some((0, 10)));
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.root(), None);
    }

    #[test]
    fn build_places_minimum_at_root() {
        let heap = IndexedMinHeap::build(&[INF, INF, INF, 0, INF, INF]);
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.root(), Some(3));
        assert_eq!(heap.key(3), 0);
        for v in 0..6 {
            assert!(heap.contains(v));
            assert_eq!(heap.slots[heap.position[v]], v);
        }
    }

    #[test]
    fn empty_heap() {
        let mut heap = IndexedMinHeap::build(&[]);
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn decrease_key_to_equal_is_allowed() {
        let mut heap = IndexedMinHeap::build(&[3, 3, 3]);
        heap.decrease_key(2, 3);
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.key(2), 3);
    }

    #[test]
    #[should_panic(expected = "settled vertex")]
    fn decrease_key_on_extracted_vertex_panics() {
        let mut heap = IndexedMinHeap::build(&[0, 1]);
        heap.extract_min();
        heap.decrease_key(0, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "would raise key")]
    fn raising_a_key_is_caught_in_debug() {
        let mut heap = IndexedMinHeap::build(&[0, 1]);
        heap.decrease_key(1, 5);
    }

    #[test]
    fn random_operations_keep_heap_order() {
        for seed in 0..20_u64 {
            let mut rng = StdRng::seed_from_u64(0x4EA9_0000 + seed);
            let n = rng.random_range(1..64);
            let keys: Vec<Weight> = (0..n)
                .map(|_| if rng.random_bool(0.3) { INF } else { rng.random_range(0..1_000) })
                .collect();
            let mut heap = IndexedMinHeap::build(&keys);
            assert!(heap.is_heap_ordered(), "seed={seed}");

            let mut last_extracted = 0;
            while !heap.is_empty() {
                if rng.random_bool(0.6) {
                    let v = rng.random_range(0..n);
                    let upper = heap.key(v).min(1_000);
                    if heap.contains(v) && upper >= last_extracted {
                        let lowered = rng.random_range(last_extracted..=upper);
                        heap.decrease_key(v, lowered);
                    }
                } else {
                    let (v, key) = heap.extract_min().unwrap();
                    assert!(key >= last_extracted, "seed={seed}");
                    assert!(!heap.contains(v));
                    last_extracted = key;
                }
                assert!(heap.is_heap_ordered(), "seed={seed}");
                for slot in 0..heap.len() {
                    assert_eq!(heap.position[heap.slots[slot]], slot, "seed={seed}");
                }
            }
        }
    }
}
