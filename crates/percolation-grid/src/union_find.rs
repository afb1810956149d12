//! Weighted quick-union with path compression.
//!
//! Union by size keeps trees logarithmically shallow and path halving during
//! `find` flattens them further, giving near-constant amortized cost per
//! operation (inverse Ackermann).
//!
//! Element ids are plain `usize` values in `0..len`. Passing an id outside that
//! range panics, the same as indexing a slice.

/// Disjoint-set forest over a fixed universe of elements.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl WeightedQuickUnion {
    /// Create `len` singleton sets, one per element `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.components
    }

    /// Canonical representative of the set containing `p`.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Whether `p` and `q` are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merge the sets containing `p` and `q`. Merging a set with itself is a no-op.
    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }

        // Smaller tree hangs under the larger root
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.components -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_as_singletons() {
        let mut uf = WeightedQuickUnion::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for p in 0..5 {
            assert_eq!(uf.find(p), p);
        }
        assert!(!uf.connected(0, 1));
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = WeightedQuickUnion::new(10);
        uf.union(4, 3);
        uf.union(3, 8);
        uf.union(6, 5);
        uf.union(9, 4);

        assert!(uf.connected(8, 9));
        assert!(uf.connected(5, 6));
        assert!(!uf.connected(5, 8));
        assert_eq!(uf.count(), 6);
    }

    #[test]
    fn redundant_union_keeps_count() {
        let mut uf = WeightedQuickUnion::new(4);
        uf.union(0, 1);
        uf.union(1, 0);
        uf.union(0, 0);
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn chain_collapses_to_one_component() {
        let n = 1_000;
        let mut uf = WeightedQuickUnion::new(n);
        for p in 1..n {
            uf.union(p - 1, p);
        }
        assert_eq!(uf.count(), 1);
        assert!(uf.connected(0, n - 1));
    }

    #[test]
    fn empty_universe() {
        let uf = WeightedQuickUnion::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_element_panics() {
        let mut uf = WeightedQuickUnion::new(3);
        uf.find(3);
    }

    /// Naive labelling used as an oracle: every element carries its set id.
    fn oracle_connected(labels: &[usize], p: usize, q: usize) -> bool {
        labels[p] == labels[q]
    }

    fn oracle_union(labels: &mut [usize], p: usize, q: usize) {
        let (from, to) = (labels[p], labels[q]);
        for label in labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    proptest! {
        #[test]
        fn agrees_with_naive_labelling(
            ops in prop::collection::vec((0usize..32, 0usize..32), 0..64),
        ) {
            let mut uf = WeightedQuickUnion::new(32);
            let mut labels: Vec<usize> = (0..32).collect();

            for &(p, q) in &ops {
                uf.union(p, q);
                oracle_union(&mut labels, p, q);
            }

            for p in 0..32 {
                for q in 0..32 {
                    prop_assert_eq!(uf.connected(p, q), oracle_connected(&labels, p, q));
                }
            }

            let mut distinct = labels.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(uf.count(), distinct.len());
        }
    }
}
