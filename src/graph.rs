/*!
# Incidence Graph

[`IncidenceGraph`] is the single owned aggregate the console session works on. It keeps

- the configured number of vertices and edges,
- the incidence matrix,
- the set of existing (normalized) edges and the edge list in column order,
- the adjacency list derived from the matrix.

The matrix is the source of truth. Every mutation of it has to be followed by an explicit
[`IncidenceGraph::rebuild`], which recomputes the edge list, the edge set and the adjacency list.
Builders (manual input, random generation) call it themselves.
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    edge::*,
    error::*,
    gens::EdgeSampling,
    node::*,
    ops::*,
    repr::*,
};

/// Undirected graph stored as incidence matrix with a derived adjacency list
#[derive(Debug, Clone)]
pub struct IncidenceGraph {
    bounds: EdgeBounds,
    matrix: IncidenceMatrix,
    existing_edges: FxHashSet<Edge>,
    edge_list: Vec<Option<Edge>>,
    adjacency: AdjArray,
    dirty: bool,
}

impl IncidenceGraph {
    /// Creates a graph with `n` vertices, `m` edge columns and an all-zero matrix.
    ///
    /// # Errors
    /// Fails if `n < 2` or if `m` is not in `[n - 1, n (n - 1) / 2]`.
    pub fn new(n: NumNodes, m: NumEdges) -> GraphResult<Self> {
        let bounds = EdgeBounds::for_vertices(n)?;
        if !bounds.contains(m) {
            return Err(GraphError::EdgeCountOutOfRange {
                got: m,
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self {
            bounds,
            matrix: IncidenceMatrix::new(n, m),
            existing_edges: FxHashSet::default(),
            edge_list: vec![None; m as usize],
            adjacency: AdjArray::new(n),
            dirty: false,
        })
    }

    /// Creates a graph whose `j`-th column holds the `j`-th edge of `edges`.
    ///
    /// # Errors
    /// Same as [`IncidenceGraph::new`] with `m = edges.len()`, and additionally fails if an
    /// endpoint is not a vertex.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        let mut graph = Self::new(n, edges.len() as NumEdges)?;
        for (j, &Edge(u, v)) in edges.iter().enumerate() {
            graph.try_set_incidence(u, j as NumEdges, 1)?;
            graph.try_set_incidence(v, j as NumEdges, 1)?;
        }
        graph.rebuild();
        Ok(graph)
    }

    /// Creates a random simple graph with `n` vertices and exactly `m` edges.
    ///
    /// The generated edges are sorted by `(min, max)` and column `j` of the matrix holds the
    /// `j`-th of them.
    ///
    /// # Errors
    /// Same as [`IncidenceGraph::new`].
    pub fn random<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        sampling: EdgeSampling,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(n, m)?;
        graph.fill_random(rng, sampling);
        Ok(graph)
    }

    /// Replaces the matrix content with `m` random distinct edges and rebuilds the graph
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, sampling: EdgeSampling) {
        let n = self.number_of_nodes();
        let m = self.number_of_edges();

        let mut edges = sampling
            .generate(rng, n, m, &self.bounds)
            .into_iter()
            .map(|e| e.normalized())
            .collect_vec();
        edges.sort_unstable();
        debug_assert!(edges.windows(2).all(|w| w[0] != w[1]));

        self.matrix.clear();
        for (j, &Edge(u, v)) in edges.iter().enumerate() {
            self.matrix.connect(j as NumEdges, u, v);
        }
        self.rebuild();

        info!(n, m, ?sampling, "generated random graph");
    }

    /// Sets cell `(v, e)` of the incidence matrix. The adjacency list is stale until
    /// [`IncidenceGraph::rebuild`] is called.
    /// ** Panics if `v >= n || e >= m` **
    pub fn set_incidence(&mut self, v: Node, e: NumEdges, value: Incidence) {
        self.matrix.set(v, e, value);
        self.dirty = true;
    }

    /// Checked variant of [`IncidenceGraph::set_incidence`]
    pub fn try_set_incidence(&mut self, v: Node, e: NumEdges, value: Incidence) -> GraphResult<()> {
        self.matrix.try_set(v, e, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Recomputes edge list, edge set and adjacency list from the incidence matrix
    pub fn rebuild(&mut self) {
        self.edge_list = self
            .matrix
            .column_edges()
            .map(|e| e.map(|e| e.normalized()))
            .collect();
        self.existing_edges = self.edge_list.iter().flatten().copied().collect();
        self.adjacency = AdjArray::from_incidence(&self.matrix);
        self.dirty = false;

        let skipped = self.edge_list.iter().filter(|e| e.is_none()).count();
        if skipped > 0 {
            debug!(skipped, "incidence columns without two endpoints were skipped");
        }
    }

    /// Returns *true* if the matrix changed since the last [`IncidenceGraph::rebuild`]
    pub fn needs_rebuild(&self) -> bool {
        self.dirty
    }

    /// Returns the admissible edge counts for this number of vertices
    pub fn bounds(&self) -> EdgeBounds {
        self.bounds
    }

    /// Returns the incidence matrix
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        &self.matrix
    }

    /// Returns the adjacency list derived at the last rebuild
    pub fn adjacency(&self) -> &AdjArray {
        debug_assert!(!self.dirty, "adjacency list is stale, call rebuild()");
        &self.adjacency
    }

    /// Returns the edge of every column (`None` for columns without two endpoints)
    pub fn edge_list(&self) -> &[Option<Edge>] {
        &self.edge_list
    }

    /// Returns *true* if the undirected edge `{u, v}` is stored in some column
    pub fn contains_edge(&self, u: Node, v: Node) -> bool {
        self.existing_edges.contains(&Edge(u, v).normalized())
    }

    /// Returns the number of distinct edges encoded by the matrix
    pub fn number_of_distinct_edges(&self) -> NumEdges {
        self.existing_edges.len() as NumEdges
    }
}

impl GraphNodeOrder for IncidenceGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.rows()
    }
}

impl GraphEdgeOrder for IncidenceGraph {
    /// Returns the configured number of edges, i.e. matrix columns
    fn number_of_edges(&self) -> NumEdges {
        self.matrix.columns()
    }
}

impl AdjacencyList for IncidenceGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency().neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency().degree_of(u)
    }
}

impl NeighborsSlice for IncidenceGraph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.adjacency().as_neighbors_slice(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_simple(graph: &IncidenceGraph) {
        let m = graph.number_of_edges();
        assert!(graph.incidence_matrix().is_well_formed());
        assert_eq!(graph.number_of_distinct_edges(), m);

        let edges = graph.edge_list().iter().map(|e| e.unwrap()).collect_vec();
        assert_eq!(edges.len(), m as usize);
        assert!(edges.iter().all(|e| !e.is_loop() && e.is_normalized()));
        assert!(edges.windows(2).all(|w| w[0] < w[1]));

        let adj = graph.adjacency();
        assert!(adj.is_symmetric());
        assert!(adj.is_strictly_sorted());
        assert_eq!(adj.number_of_edges(), m);
        assert_eq!(adj.ordered_edges().collect_vec(), edges);
    }

    #[test]
    fn rejects_invalid_sizes() {
        assert_eq!(
            IncidenceGraph::new(1, 0).unwrap_err(),
            GraphError::TooFewVertices { got: 1, min: 2 }
        );
        assert_eq!(
            IncidenceGraph::new(4, 2).unwrap_err(),
            GraphError::EdgeCountOutOfRange {
                got: 2,
                min: 3,
                max: 6
            }
        );
        assert!(IncidenceGraph::new(4, 7).is_err());
        assert!(IncidenceGraph::new(4, 6).is_ok());
        assert!(IncidenceGraph::from_edges(3, [(0, 1), (1, 5)]).is_err());
    }

    #[test]
    fn random_graphs_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for sampling in [EdgeSampling::Rejection, EdgeSampling::Exact, EdgeSampling::Auto] {
            for n in [2 as NumNodes, 3, 5, 8, 13] {
                let bounds = EdgeBounds::for_vertices(n).unwrap();
                for m in bounds.min..=bounds.max {
                    let graph = IncidenceGraph::random(rng, n, m, sampling).unwrap();
                    assert!(!graph.needs_rebuild());
                    assert_simple(&graph);
                }
            }
        }
    }

    #[test]
    fn two_vertices_single_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let graph = IncidenceGraph::random(rng, 2, 1, EdgeSampling::Rejection).unwrap();
        assert_eq!(graph.edge_list(), &[Some(Edge(0, 1))]);
        assert_eq!(graph.incidence_matrix().row(0), &[1]);
        assert_eq!(graph.incidence_matrix().row(1), &[1]);
    }

    #[test]
    fn manual_entry_requires_rebuild() {
        let mut graph = IncidenceGraph::new(3, 2).unwrap();
        graph.set_incidence(0, 0, 1);
        graph.set_incidence(2, 0, 1);
        graph.set_incidence(1, 1, 1);
        assert!(graph.needs_rebuild());

        graph.rebuild();
        assert_eq!(graph.edge_list(), &[Some(Edge(0, 2)), None]);
        assert!(graph.contains_edge(2, 0));
        assert!(!graph.contains_edge(0, 1));
        assert_eq!(graph.as_neighbors_slice(0), &[2]);
        assert!(graph.is_isolated(1));

        graph.set_incidence(0, 1, 1);
        graph.rebuild();
        assert_eq!(graph.edge_list(), &[Some(Edge(0, 2)), Some(Edge(0, 1))]);
        assert_eq!(graph.as_neighbors_slice(0), &[1, 2]);
    }
}
