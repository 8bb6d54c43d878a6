use super::*;

/// Representation using an Adjacency-Array.
///
/// Every neighborhood is kept sorted in ascending order and free of duplicates, which fixes the
/// order in which traversals visit neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl AdjArray {
    /// Creates a graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Derives the adjacency list of an incidence matrix.
    ///
    /// Columns with fewer than two marked rows are skipped, over-full columns only contribute
    /// their first two marked rows. Parallel columns collapse into one edge.
    pub fn from_incidence(matrix: &IncidenceMatrix) -> Self {
        let mut graph = Self::new(matrix.rows());
        for Edge(u, v) in matrix.column_edges().flatten() {
            graph.nbs[u as usize].push(v);
            graph.nbs[v as usize].push(u);
        }
        graph.normalize();
        graph
    }

    /// Creates a graph from a list of (undirected) edges. Loops and duplicates are dropped.
    ///
    /// # Panics
    /// Panics if an endpoint is not in `0..n`.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if u != v {
                graph.nbs[u as usize].push(v);
                graph.nbs[v as usize].push(u);
            }
        }
        graph.normalize();
        graph
    }

    /// Sorts and deduplicates all neighborhoods and recounts the edges
    fn normalize(&mut self) {
        let mut degree_sum = 0usize;
        for nbs in &mut self.nbs {
            nbs.sort_unstable();
            nbs.dedup();
            degree_sum += nbs.len();
        }
        self.num_edges = (degree_sum / 2) as NumEdges;
    }

    /// Returns *true* if `v` is a neighbor of `u` exactly when `u` is a neighbor of `v`
    pub fn is_symmetric(&self) -> bool {
        self.vertices().all(|u| {
            self.as_neighbors_slice(u)
                .iter()
                .all(|&v| self.as_neighbors_slice(v).binary_search(&u).is_ok())
        })
    }

    /// Returns *true* if every neighborhood is strictly ascending
    pub fn is_strictly_sorted(&self) -> bool {
        self.nbs.iter().all(|nbs| nbs.windows(2).all(|w| w[0] < w[1]))
    }
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].binary_search(&v).is_ok()
    }
}

impl NeighborsSlice for AdjArray {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}
