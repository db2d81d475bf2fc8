#[derive(Default)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {

    pub(crate) fn new() -> Self {
        UnionFind { parent: Vec::new(), size: Vec::new() }
    }

    /// Adds a new singleton set and returns its element.
    pub(crate) fn make_set(&mut self) -> usize {
        let element = self.parent.len();
        self.parent.push(element);
        self.size.push(1);
        element
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Merges the sets containing `m` and `n`. Returns false if they were
    /// already the same set.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let root_m = self.find(m);
        let root_n = self.find(n);
        if root_m == root_n {
            return false;
        }
        let (small, large) = if self.size[root_m] < self.size[root_n] {
            (root_m, root_n)
        } else {
            (root_n, root_m)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        true
    }
}
