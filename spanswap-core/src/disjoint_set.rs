//! Union-find (disjoint set union) used during MST construction.
//!
//! Kruskal's algorithm accepts an edge exactly when its endpoints still live
//! in different sets, so [`DisjointSet::union`] reports whether a merge
//! happened. Sets are merged by size; `find` compresses the whole path it
//! walks.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Number of disjoint sets currently tracked.
    pub(crate) fn set_count(&self) -> usize {
        self.sets
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when both were already in the same set.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }

        let (root, child) = choose_root(&self.size, left, right);
        self.parent[child] = root;
        self.size[root] = self.size[root].saturating_add(self.size[child]);
        self.sets -= 1;
        true
    }
}

/// Picks the larger tree as the new root; equal sizes keep the lower index.
fn choose_root(size: &[usize], a: usize, b: usize) -> (usize, usize) {
    match size[a].cmp(&size[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    }
}
