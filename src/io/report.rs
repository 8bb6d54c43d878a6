//! # Report
//!
//! Plain text rendering of an [`IncidenceGraph`] and of a [`Reachability`] result.
//! Matrix cells are separated by a configurable separator (a tab by default).

use std::io::{Result, Write};

use itertools::Itertools;

use crate::{algo::Reachability, graph::IncidenceGraph, prelude::*};

/// Writes graph summaries and traversal results
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Separator between incidence matrix cells
    separator: String,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
        }
    }
}

impl Reporter {
    /// Creates a new (default) reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between incidence matrix cells
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Reporter {
        self.separator = separator.into();
        self
    }

    /// Writes counts, graph type, edge list, incidence matrix and adjacency list
    pub fn write_summary<W: Write>(&self, graph: &IncidenceGraph, mut writer: W) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Number of vertices: {}", graph.number_of_nodes())?;
        writeln!(writer, "Number of edges: {}", graph.number_of_edges())?;
        writeln!(writer, "Graph type: undirected")?;
        writeln!(writer, "Representation: incidence matrix")?;

        self.write_edge_list(graph.edge_list(), &mut writer)?;
        self.write_incidence_matrix(graph.incidence_matrix(), &mut writer)?;
        self.write_adjacency_list(graph.adjacency(), &mut writer)
    }

    /// Writes one line `e{j}: (u,v)` per column; columns without an edge are shown as `-`
    pub fn write_edge_list<W: Write>(&self, edges: &[Option<Edge>], mut writer: W) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Edge list:")?;
        for (j, edge) in edges.iter().enumerate() {
            match edge {
                Some(edge) => writeln!(writer, "e{j}: {edge}")?,
                None => writeln!(writer, "e{j}: -")?,
            }
        }
        Ok(())
    }

    /// Writes the matrix as a table with one row per vertex and one column per edge
    pub fn write_incidence_matrix<W: Write>(
        &self,
        matrix: &IncidenceMatrix,
        mut writer: W,
    ) -> Result<()> {
        let sep = &self.separator;

        writeln!(writer)?;
        writeln!(
            writer,
            "Incidence matrix ({} vertices x {} edges)",
            matrix.rows(),
            matrix.columns()
        )?;
        writeln!(
            writer,
            "Vertex{sep}{}",
            (0..matrix.columns()).map(|j| format!("e{j}")).join(sep)
        )?;
        for v in matrix.vertices() {
            writeln!(writer, "{v}{sep}{}", matrix.row(v).iter().join(sep))?;
        }
        Ok(())
    }

    /// Writes `Vertex {u}: a, b, c` per vertex, `()` for vertices without neighbors
    pub fn write_adjacency_list<G, W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        G: AdjacencyList,
        W: Write,
    {
        writeln!(writer)?;
        writeln!(writer, "Adjacency list:")?;
        for u in graph.vertices() {
            if graph.is_isolated(u) {
                writeln!(writer, "Vertex {u}: ()")?;
            } else {
                writeln!(writer, "Vertex {u}: {}", graph.neighbors_of(u).join(", "))?;
            }
        }
        Ok(())
    }

    /// Writes the visiting order, the number of visited vertices and whether all were visited
    pub fn write_reachability<W: Write>(&self, reach: &Reachability, mut writer: W) -> Result<()> {
        let start = reach.start();
        let total = reach.total();

        if reach.is_isolated() {
            return writeln!(
                writer,
                "Vertex {start} is isolated, it has no adjacent vertices."
            );
        }

        let visited = reach.visited_count();
        writeln!(writer, "DFS traversal from vertex {start}:")?;
        writeln!(writer, "{}", reach.order().iter().join(" "))?;
        writeln!(writer)?;
        writeln!(writer, "Visited vertices: {visited} of {total}")?;
        if reach.is_complete() {
            writeln!(writer, "All vertices of the graph were visited.")
        } else {
            writeln!(
                writer,
                "Not all vertices were visited, only {visited} of {total}."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{Traversal, TraversalMode};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn summary_of_path() {
        let graph = IncidenceGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let text = render(|w| Reporter::new().write_summary(&graph, w));

        assert_eq!(
            text,
            "\nNumber of vertices: 3\n\
             Number of edges: 2\n\
             Graph type: undirected\n\
             Representation: incidence matrix\n\
             \nEdge list:\ne0: (0,1)\ne1: (1,2)\n\
             \nIncidence matrix (3 vertices x 2 edges)\n\
             Vertex\te0\te1\n\
             0\t1\t0\n\
             1\t1\t1\n\
             2\t0\t1\n\
             \nAdjacency list:\n\
             Vertex 0: 1\n\
             Vertex 1: 0, 2\n\
             Vertex 2: 1\n"
        );
    }

    #[test]
    fn malformed_column_and_isolated_vertex() {
        let mut graph = IncidenceGraph::new(3, 2).unwrap();
        graph.set_incidence(0, 0, 1);
        graph.set_incidence(1, 0, 1);
        graph.set_incidence(2, 1, 1);
        graph.rebuild();

        let text = render(|w| Reporter::new().write_edge_list(graph.edge_list(), w));
        assert_eq!(text, "\nEdge list:\ne0: (0,1)\ne1: -\n");

        let text = render(|w| Reporter::new().write_adjacency_list(graph.adjacency(), w));
        assert!(text.ends_with("Vertex 2: ()\n"));
    }

    #[test]
    fn custom_separator() {
        let matrix = IncidenceMatrix::from_edges(2, [(0, 1)]);
        let text = render(|w| Reporter::new().separator(" | ").write_incidence_matrix(&matrix, w));
        assert!(text.contains("Vertex | e0\n0 | 1\n1 | 1\n"));
    }

    #[test]
    fn reachability_messages() {
        let graph = AdjArray::from_edges(4, [(0, 1), (2, 3)]);
        let reporter = Reporter::new();

        let partial = graph.reachability(0, TraversalMode::Recursive).unwrap();
        let text = render(|w| reporter.write_reachability(&partial, w));
        assert_eq!(
            text,
            "DFS traversal from vertex 0:\n0 1\n\nVisited vertices: 2 of 4\n\
             Not all vertices were visited, only 2 of 4.\n"
        );

        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let full = graph.reachability(0, TraversalMode::Iterative).unwrap();
        let text = render(|w| reporter.write_reachability(&full, w));
        assert!(text.starts_with("DFS traversal from vertex 0:\n0 1 2 3\n"));
        assert!(text.contains("Visited vertices: 4 of 4\n"));
        assert!(text.ends_with("All vertices of the graph were visited.\n"));

        let graph = AdjArray::from_edges(3, [(1, 2)]);
        let isolated = graph.reachability(0, TraversalMode::Recursive).unwrap();
        let text = render(|w| reporter.write_reachability(&isolated, w));
        assert_eq!(text, "Vertex 0 is isolated, it has no adjacent vertices.\n");
    }
}
