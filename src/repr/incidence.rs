use smallvec::SmallVec;

use super::*;

/// Value of a single incidence matrix cell
pub type Incidence = u8;

/// Rows of a column that are marked, but at most the first two of them
pub type ColumnEndpoints = SmallVec<[Node; 2]>;

/// A `n x m` incidence matrix: a `1` at `(v, e)` means that vertex `v` is an endpoint of edge `e`.
///
/// Cells are stored row-major. Nothing forces a column to contain exactly two `1`-entries;
/// columns entered by hand may be empty or over-full and are treated permissively by
/// [`IncidenceMatrix::edge_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    n: NumNodes,
    m: NumEdges,
    cells: Vec<Incidence>,
}

impl IncidenceMatrix {
    /// Creates an all-zero matrix with `n` rows and `m` columns
    pub fn new(n: NumNodes, m: NumEdges) -> Self {
        Self {
            n,
            m,
            cells: vec![0; n as usize * m as usize],
        }
    }

    /// Creates a matrix whose `j`-th column connects the endpoints of the `j`-th edge.
    ///
    /// # Panics
    /// Panics if an endpoint is not in `0..n`.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(|e| e.into()).collect();
        let mut matrix = Self::new(n, edges.len() as NumEdges);
        for (j, Edge(u, v)) in edges.into_iter().enumerate() {
            matrix.connect(j as NumEdges, u, v);
        }
        matrix
    }

    #[inline]
    fn index(&self, v: Node, e: NumEdges) -> usize {
        assert!(v < self.n && e < self.m);
        v as usize * self.m as usize + e as usize
    }

    /// Returns the number of rows
    pub fn rows(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of columns
    pub fn columns(&self) -> NumEdges {
        self.m
    }

    /// Returns the value at `(v, e)`
    /// ** Panics if `v >= n || e >= m` **
    pub fn get(&self, v: Node, e: NumEdges) -> Incidence {
        self.cells[self.index(v, e)]
    }

    /// Returns *true* if `v` is marked as endpoint of `e`
    pub fn is_incident(&self, v: Node, e: NumEdges) -> bool {
        self.get(v, e) == 1
    }

    /// Sets the value at `(v, e)` and returns the previous one.
    /// Any non-zero value is stored as `1`.
    /// ** Panics if `v >= n || e >= m` **
    pub fn set(&mut self, v: Node, e: NumEdges, value: Incidence) -> Incidence {
        let idx = self.index(v, e);
        std::mem::replace(&mut self.cells[idx], (value != 0) as Incidence)
    }

    /// Checked variant of [`IncidenceMatrix::set`]
    pub fn try_set(&mut self, v: Node, e: NumEdges, value: Incidence) -> GraphResult<Incidence> {
        if v >= self.n {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertices: self.n,
            });
        }
        if e >= self.m {
            return Err(GraphError::EdgeOutOfRange {
                edge: e,
                edges: self.m,
            });
        }
        Ok(self.set(v, e, value))
    }

    /// Marks `u` and `v` as the endpoints of column `e`
    pub fn connect(&mut self, e: NumEdges, u: Node, v: Node) {
        self.set(u, e, 1);
        self.set(v, e, 1);
    }

    /// Resets every cell to `0`
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns one row of the matrix
    pub fn row(&self, v: Node) -> &[Incidence] {
        let begin = v as usize * self.m as usize;
        &self.cells[begin..begin + self.m as usize]
    }

    /// Scans column `e` top to bottom and returns the first (at most two) marked rows
    pub fn column_endpoints(&self, e: NumEdges) -> ColumnEndpoints {
        (0..self.n)
            .filter(|&v| self.is_incident(v, e))
            .take(2)
            .collect()
    }

    /// Returns the edge encoded by column `e`, or `None` if fewer than two rows are marked.
    /// Rows beyond the first two marked ones are ignored.
    pub fn edge_of(&self, e: NumEdges) -> Option<Edge> {
        match self.column_endpoints(e).as_slice() {
            &[u, v] => Some(Edge(u, v)),
            _ => None,
        }
    }

    /// Iterates over the edges of all columns (see [`IncidenceMatrix::edge_of`])
    pub fn column_edges(&self) -> impl Iterator<Item = Option<Edge>> + '_ {
        (0..self.m).map(|e| self.edge_of(e))
    }

    /// Returns *true* if every column has exactly two `1`-entries
    pub fn is_well_formed(&self) -> bool {
        (0..self.m).all(|e| (0..self.n).filter(|&v| self.is_incident(v, e)).count() == 2)
    }
}

impl GraphNodeOrder for IncidenceMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for IncidenceMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.m
    }
}
