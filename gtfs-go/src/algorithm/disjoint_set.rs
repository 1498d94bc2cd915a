/// union-find over the integers `0..n` with path compression and union by
/// rank. after any sequence of unions, `find` returns the same root for two
/// elements exactly when they were joined directly or through other elements.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// the root of the set containing `x`.
    ///
    /// # Panics
    /// if `x` is out of bounds
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // compress the path walked above
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// joins the sets of `a` and `b`. returns false if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// every set as a list of its members in ascending order, with sets
    /// ordered by their smallest member.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![vec![]; self.len()];
        for x in 0..self.len() {
            let root = self.find(x);
            by_root[root].push(x);
        }
        let mut sets: Vec<Vec<usize>> = by_root.into_iter().filter(|s| !s.is_empty()).collect();
        sets.sort_by_key(|s| s[0]);
        sets
    }
}
