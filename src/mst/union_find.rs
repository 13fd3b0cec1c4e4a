//! Disjoint-set forest used by the Kruskal builder

/// Parent-pointer forest with union by rank and path halving
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Create `size` singleton sets
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Number of disjoint sets
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `x`
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `a` and `b`
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.components -= 1;
        true
    }

    #[cfg(test)]
    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.components(), 4);
        for i in 0..4 {
            assert_eq!(sets.find(i), i);
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut sets = DisjointSet::new(5);

        assert!(sets.union(0, 1));
        assert!(sets.union(3, 4));
        assert!(sets.connected(0, 1));
        assert!(!sets.connected(1, 3));
        assert_eq!(sets.components(), 3);

        assert!(sets.union(1, 4));
        assert!(sets.connected(0, 3));
        assert_eq!(sets.components(), 2);
    }

    #[test]
    fn test_union_same_set_is_rejected() {
        let mut sets = DisjointSet::new(3);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(2, 0));
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::new(0);
        assert_eq!(sets.components(), 0);
    }
}
