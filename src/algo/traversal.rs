/*!
Depth-first traversal and the reachability report built on top of it.

This module provides:
- [`DfsPreorder`]: an iterative pre-order DFS using an explicit stack,
- a recursive pre-order DFS producing the very same order,
- [`Reachability`]: the outcome of a traversal from a start vertex, including the
  isolated-start case and full/partial coverage detection,
- a [`Traversal`] trait that exposes all of it directly on graph data structures.

Neighbors are always explored in ascending order. The visited state is created fresh for
every traversal and dropped with it.
*/

use std::{fmt::Display, str::FromStr};

use tracing::{debug, info};

use super::*;

/// Implementation used to run a depth-first search
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// One call frame per visited node; depth bounded by the number of nodes
    #[default]
    Recursive,
    /// Explicit stack, see [`DfsPreorder`]
    Iterative,
}

impl Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalMode::Recursive => write!(f, "recursive"),
            TraversalMode::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for TraversalMode {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "recursive" => Ok(TraversalMode::Recursive),
            "iterative" => Ok(TraversalMode::Iterative),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown TraversalMode: {s}"),
            )),
        }
    }
}

/// Iterative pre-order depth-first search.
///
/// Nodes are marked when they are popped, and the unvisited neighbors of a popped node are
/// pushed in descending order. Hence the smallest unvisited neighbor is explored next, which
/// reproduces the order of the recursive formulation exactly.
pub struct DfsPreorder<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DfsPreorder<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_vertex(start));
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
        }
    }

    /// Checks if a given node `u` has already been visited.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G> Iterator for DfsPreorder<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            // a node may sit on the stack several times
            if self.visited.get_bit(u) {
                continue;
            }
            self.visited.set_bit(u);

            let begin = self.stack.len();
            self.stack
                .extend(self.graph.neighbors_of(u).filter(|&v| !self.visited.get_bit(v)));
            self.stack[begin..].reverse();

            return Some(u);
        }
        None
    }
}

fn dfs_recursive_into<G>(graph: &G, u: Node, visited: &mut NodeBitSet, order: &mut Vec<Node>)
where
    G: AdjacencyList,
{
    visited.set_bit(u);
    order.push(u);

    for v in graph.neighbors_of(u) {
        if !visited.get_bit(v) {
            dfs_recursive_into(graph, v, visited, order);
        }
    }
}

/// Result of a depth-first traversal that actually ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsReport {
    /// Node the traversal started at
    pub start: Node,
    /// Visited nodes in pre-order
    pub order: Vec<Node>,
    /// Number of nodes of the traversed graph
    pub total: NumNodes,
}

impl DfsReport {
    /// Returns the number of visited nodes
    pub fn visited_count(&self) -> NumNodes {
        self.order.len() as NumNodes
    }

    /// Returns *true* if every node of the graph was visited
    pub fn is_complete(&self) -> bool {
        self.visited_count() == self.total
    }
}

/// Reachability of all nodes from a start vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// The start vertex has no neighbors; no traversal was made and nothing counts as visited
    Isolated { start: Node, total: NumNodes },
    /// The traversal ran from a start vertex with at least one neighbor
    Traversed(DfsReport),
}

impl Reachability {
    /// Returns the start vertex
    pub fn start(&self) -> Node {
        match self {
            Reachability::Isolated { start, .. } => *start,
            Reachability::Traversed(report) => report.start,
        }
    }

    /// Returns the number of nodes of the graph
    pub fn total(&self) -> NumNodes {
        match self {
            Reachability::Isolated { total, .. } => *total,
            Reachability::Traversed(report) => report.total,
        }
    }

    /// Returns the number of visited nodes; `0` for an isolated start
    pub fn visited_count(&self) -> NumNodes {
        match self {
            Reachability::Isolated { .. } => 0,
            Reachability::Traversed(report) => report.visited_count(),
        }
    }

    /// Returns the visiting order; empty for an isolated start
    pub fn order(&self) -> &[Node] {
        match self {
            Reachability::Isolated { .. } => &[],
            Reachability::Traversed(report) => &report.order,
        }
    }

    /// Returns *true* if the traversal covered the whole graph
    pub fn is_complete(&self) -> bool {
        matches!(self, Reachability::Traversed(report) if report.is_complete())
    }

    /// Returns *true* if the start vertex has no neighbors
    pub fn is_isolated(&self) -> bool {
        matches!(self, Reachability::Isolated { .. })
    }
}

/// Provides depth-first traversals directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first pre-order**, smallest neighbor first.
    ///
    /// # Examples
    /// ```
    /// use incidence_dfs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 2), (0, 1), (1, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> DfsPreorder<'_, Self> {
        DfsPreorder::new(self, start)
    }

    /// Recursive counterpart of [`Traversal::dfs`] returning the full visiting order.
    /// ** Panics if `start >= n` **
    fn dfs_recursive(&self, start: Node) -> Vec<Node> {
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::new();
        dfs_recursive_into(self, start, &mut visited, &mut order);
        order
    }

    /// Returns the visiting order of a depth-first search with the selected implementation.
    /// ** Panics if `start >= n` **
    fn dfs_order(&self, start: Node, mode: TraversalMode) -> Vec<Node> {
        match mode {
            TraversalMode::Recursive => self.dfs_recursive(start),
            TraversalMode::Iterative => self.dfs(start).collect(),
        }
    }

    /// Computes which nodes are reachable from `start`.
    ///
    /// If `start` has no neighbors, no traversal is made and [`Reachability::Isolated`] is
    /// returned.
    ///
    /// # Errors
    /// Fails if `start` is not a vertex of the graph.
    ///
    /// # Examples
    /// ```
    /// use incidence_dfs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1), (2, 3)]);
    ///
    /// let reach = g.reachability(0, TraversalMode::Recursive).unwrap();
    /// assert_eq!(reach.order(), &[0, 1]);
    /// assert_eq!(reach.visited_count(), 2);
    /// assert!(!reach.is_complete());
    /// ```
    fn reachability(&self, start: Node, mode: TraversalMode) -> GraphResult<Reachability> {
        if !self.has_vertex(start) {
            return Err(GraphError::VertexOutOfRange {
                vertex: start,
                vertices: self.number_of_nodes(),
            });
        }

        let total = self.number_of_nodes();
        if self.is_isolated(start) {
            debug!(start, "start vertex is isolated");
            return Ok(Reachability::Isolated { start, total });
        }

        let order = self.dfs_order(start, mode);
        info!(start, %mode, visited = order.len(), total, "depth-first traversal finished");

        Ok(Reachability::Traversed(DfsReport {
            start,
            order,
            total,
        }))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const MODES: [TraversalMode; 2] = [TraversalMode::Recursive, TraversalMode::Iterative];

    #[test]
    fn dfs_path() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

        for mode in MODES {
            let reach = graph.reachability(0, mode).unwrap();
            assert_eq!(reach.order(), &[0, 1, 2, 3]);
            assert_eq!(reach.visited_count(), 4);
            assert_eq!(reach.total(), 4);
            assert!(reach.is_complete());
        }
    }

    #[test]
    fn dfs_two_components() {
        let graph = AdjArray::from_edges(4, [(0, 1), (2, 3)]);

        for mode in MODES {
            let reach = graph.reachability(0, mode).unwrap();
            assert_eq!(reach.order(), &[0, 1]);
            assert_eq!(reach.visited_count(), 2);
            assert!(!reach.is_complete());

            let reach = graph.reachability(3, mode).unwrap();
            assert_eq!(reach.order(), &[3, 2]);
        }
    }

    #[test]
    fn dfs_ascending_neighbors() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        assert_eq!(graph.dfs_recursive(1), vec![1, 0, 5, 4, 3, 2]);
        assert_eq!(graph.dfs(1).collect_vec(), vec![1, 0, 5, 4, 3, 2]);
        assert_eq!(graph.dfs(5).collect_vec(), vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn dfs_backtracks_to_earlier_neighbors() {
        // 0 is adjacent to 1 and 3, and 3 is reached through 1 first
        let graph = AdjArray::from_edges(5, [(0, 1), (0, 3), (1, 2), (2, 3), (0, 4)]);

        for mode in MODES {
            assert_eq!(graph.dfs_order(0, mode), vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn isolated_start() {
        let graph = AdjArray::from_edges(3, [(1, 2)]);

        for mode in MODES {
            let reach = graph.reachability(0, mode).unwrap();
            assert!(reach.is_isolated());
            assert_eq!(reach, Reachability::Isolated { start: 0, total: 3 });
            assert_eq!(reach.visited_count(), 0);
            assert!(reach.order().is_empty());
            assert!(!reach.is_complete());
        }
    }

    #[test]
    fn start_out_of_range() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(
            graph.reachability(3, TraversalMode::Iterative),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertices: 3
            })
        );
    }

    #[test]
    fn modes_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 5, 10, 30] {
            let bounds = EdgeBounds::for_vertices(n).unwrap();
            for m in [bounds.min, (bounds.min + bounds.max) / 2, bounds.max] {
                for _ in 0..5 {
                    let graph = IncidenceGraph::random(rng, n, m, EdgeSampling::Auto).unwrap();

                    for start in graph.vertices() {
                        let recursive = graph.dfs_recursive(start);
                        let iterative = graph.dfs(start).collect_vec();
                        assert_eq!(recursive, iterative);

                        assert!(recursive.len() <= n as usize);
                        assert_eq!(recursive.iter().unique().count(), recursive.len());
                        assert_eq!(recursive[0], start);
                    }
                }
            }
        }
    }

    #[test]
    fn complete_iff_connected() {
        // triangle plus a pendant path, then the same with the path cut off
        let connected = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
        let split = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 0), (3, 4)]);

        for start in connected.vertices() {
            assert!(connected.reachability(start, TraversalMode::Recursive).unwrap().is_complete());
            assert!(!split.reachability(start, TraversalMode::Iterative).unwrap().is_complete());
        }
    }

    #[test]
    fn parse_mode() {
        for mode in MODES {
            assert_eq!(mode.to_string().parse::<TraversalMode>().unwrap(), mode);
        }
        assert!("bfs".parse::<TraversalMode>().is_err());
    }
}
