use std::fmt::{Debug, Display};

use crate::{
    error::{GraphError, GraphResult},
    node::*,
};

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same
/// edge; most places store the [`Edge::normalized`] form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges (i.e. incidence matrix columns) to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Simple bijection from `0..(n choose 2)` to all possible normalized edges of `n` nodes.
    ///
    /// Every node is assigned the next `(n - 1)/2` neighbors modulo `n` (up to rounding) and the
    /// resulting edge is normalized. Never produces a loop.
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(n >= MIN_VERTICES as u64);
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        // `n - 1` is even: every node enumerates the same number of neighbors
        if n & 1 == 1 {
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        } else {
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            // Lower half enumerates `floor((n - 1) / 2)` neighbors and is already normalized
            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                return Edge(u as Node, v as Node);
            }

            // Upper half enumerates `ceil((n - 1) / 2)` neighbors
            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// Admissible number of edges for a graph with a given number of vertices.
///
/// The lower bound `n - 1` is the fewest edges a connected graph can have, the upper bound
/// `n (n - 1) / 2` is the number of edges of the complete simple graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeBounds {
    pub min: NumEdges,
    pub max: NumEdges,
}

impl EdgeBounds {
    /// Computes the bounds for `n` vertices.
    ///
    /// # Errors
    /// Fails if `n < 2` or if the complete graph on `n` vertices has more than
    /// `NumEdges::MAX` edges.
    pub fn for_vertices(n: NumNodes) -> GraphResult<Self> {
        if n < MIN_VERTICES {
            return Err(GraphError::TooFewVertices {
                got: n,
                min: MIN_VERTICES,
            });
        }

        let n = n as u64;
        let max = n * (n - 1) / 2;
        let max = NumEdges::try_from(max).map_err(|_| GraphError::TooManyVertices {
            got: n as NumNodes,
        })?;

        Ok(Self {
            min: (n - 1) as NumEdges,
            max,
        })
    }

    /// Returns *true* if `m` lies within `[min, max]`
    pub fn contains(&self, m: NumEdges) -> bool {
        (self.min..=self.max).contains(&m)
    }

    /// Returns *true* if `m` requests more than half of all possible edges
    pub fn is_dense(&self, m: NumEdges) -> bool {
        2 * (m as u64) > self.max as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn normalized_and_loops() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{}", Edge(0, 7)), "(0,7)");
    }

    #[test]
    fn from_u64_undir_is_bijective() {
        for n in 2..20u64 {
            let edges = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_u64_undir(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
            assert!(edges.iter().all(|e| (e.1 as u64) < n));

            let unique = edges.iter().sorted().dedup().count();
            assert_eq!(unique, edges.len());
        }
    }

    #[test]
    fn edge_bounds() {
        assert!(EdgeBounds::for_vertices(1).is_err());

        let bounds = EdgeBounds::for_vertices(2).unwrap();
        assert_eq!(bounds, EdgeBounds { min: 1, max: 1 });

        let bounds = EdgeBounds::for_vertices(5).unwrap();
        assert_eq!(bounds, EdgeBounds { min: 4, max: 10 });
        assert!(bounds.contains(4) && bounds.contains(10));
        assert!(!bounds.contains(3) && !bounds.contains(11));
        assert!(bounds.is_dense(6));
        assert!(!bounds.is_dense(5));

        assert!(EdgeBounds::for_vertices(100_000).is_err());
    }
}
