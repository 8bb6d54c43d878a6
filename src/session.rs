/*!
# Session

The interactive dialogue: ask for the graph size, build the graph by hand or randomly, print it,
ask for a start vertex and report which vertices a depth-first traversal reaches.

[`Session::run`] performs one complete dialogue on any reader/writer pair. Invalid answers are
re-prompted, so the only way a session ends early is running out of input.
*/

use std::io::{BufRead, Result, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    algo::{Reachability, Traversal, TraversalMode},
    gens::EdgeSampling,
    graph::IncidenceGraph,
    io::{Console, Reporter},
    prelude::*,
};

/// Settings of an interactive session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Seed for random graph generation; drawn from the OS if unset
    pub seed: Option<u64>,
    /// Strategy for drawing random edges
    pub sampling: EdgeSampling,
    /// Implementation of the depth-first search
    pub traversal: TraversalMode,
    /// Wait for a final line of input before returning
    pub wait_for_exit: bool,
}

impl SessionConfig {
    /// Creates the random number generator described by this config
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Everything a finished session produced
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub graph: IncidenceGraph,
    pub reachability: Reachability,
}

/// One interactive dialogue
pub struct Session<R, W> {
    config: SessionConfig,
    console: Console<R, W>,
    reporter: Reporter,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session reading answers from `input` and writing everything else to `output`
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            config,
            console: Console::new(input, output),
            reporter: Reporter::new(),
        }
    }

    /// Consumes the session and returns reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.console.into_inner()
    }

    /// Runs the full dialogue once.
    ///
    /// # Errors
    /// Fails if reading or writing fails, in particular if the input ends early.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let n = self.ask_vertices()?;
        let m = self.ask_edges(n)?;

        let graph = if self.console.confirm("Enter the graph manually? (y/n): ")? {
            self.build_from_input(n, m)?
        } else {
            let mut rng = self.config.rng();
            self.build_random(&mut rng, n, m)?
        };

        self.reporter.write_summary(&graph, self.console.output())?;

        let reachability = self.traverse(&graph)?;

        writeln!(self.console.output())?;
        writeln!(self.console.output(), "Traversal finished.")?;
        if self.config.wait_for_exit {
            self.console.read_line()?;
        }

        Ok(SessionOutcome {
            graph,
            reachability,
        })
    }

    fn ask_vertices(&mut self) -> Result<NumNodes> {
        self.console.prompt_value(
            format!("Enter the number of vertices (at least {MIN_VERTICES}): "),
            format!("The number of vertices must be at least {MIN_VERTICES}. Try again."),
            |&n: &NumNodes| EdgeBounds::for_vertices(n).is_ok(),
        )
    }

    fn ask_edges(&mut self, n: NumNodes) -> Result<NumEdges> {
        let bounds = EdgeBounds::for_vertices(n)?;

        self.console.prompt_value(
            format!(
                "Enter the number of edges (at least {} and at most {}): ",
                bounds.min, bounds.max
            ),
            format!(
                "The number of edges must lie between {} and {}. Try again.",
                bounds.min, bounds.max
            ),
            |&m: &NumEdges| bounds.contains(m),
        )
    }

    /// Reads every cell of the incidence matrix. Columns are not checked for consistency.
    pub fn build_from_input(&mut self, n: NumNodes, m: NumEdges) -> Result<IncidenceGraph> {
        let mut graph = IncidenceGraph::new(n, m)?;

        writeln!(self.console.output(), "Enter the incidence matrix:")?;
        for v in 0..n {
            for e in 0..m {
                let value = self.console.prompt_value(
                    format!("Vertex {v}, edge {e} (0 or 1): "),
                    "Invalid value. Try again.",
                    |&x: &Incidence| x <= 1,
                )?;
                graph.set_incidence(v, e, value);
            }
        }
        graph.rebuild();

        info!(
            n,
            m,
            well_formed = graph.incidence_matrix().is_well_formed(),
            "read incidence matrix"
        );
        Ok(graph)
    }

    /// Generates a random graph with the configured sampling strategy
    pub fn build_random(
        &mut self,
        rng: &mut impl Rng,
        n: NumNodes,
        m: NumEdges,
    ) -> Result<IncidenceGraph> {
        let graph = IncidenceGraph::random(rng, n, m, self.config.sampling)?;
        writeln!(
            self.console.output(),
            "Generated a random graph ({} sampling).",
            self.config.sampling.resolve(m, &graph.bounds())
        )?;
        Ok(graph)
    }

    fn traverse(&mut self, graph: &IncidenceGraph) -> Result<Reachability> {
        let n = graph.number_of_nodes();
        let start: Node = self.console.prompt_value(
            "Start vertex for DFS: ",
            "Invalid input. Try again.",
            |&v: &Node| v < n,
        )?;

        let reachability = graph.reachability(start, self.config.traversal)?;
        self.reporter
            .write_reachability(&reachability, self.console.output())?;

        Ok(reachability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: SessionConfig, input: &str) -> (Result<SessionOutcome>, String) {
        let mut session = Session::new(config, input.as_bytes(), Vec::new());
        let outcome = session.run();
        let (_, output) = session.into_inner();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn seeded() -> SessionConfig {
        SessionConfig {
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn manual_path() {
        // columns: e0 = {0,1}, e1 = {1,2}, e2 = {2,3}
        let input = "4\n3\ny\n1\n0\n0\n1\n1\n0\n0\n1\n1\n0\n0\n1\n0\n";
        let (outcome, output) = run(seeded(), input);
        let outcome = outcome.unwrap();

        assert_eq!(
            outcome.graph.edge_list(),
            &[Some(Edge(0, 1)), Some(Edge(1, 2)), Some(Edge(2, 3))]
        );
        assert_eq!(outcome.reachability.order(), &[0, 1, 2, 3]);
        assert!(outcome.reachability.is_complete());
        assert!(output.contains("All vertices of the graph were visited."));
        assert!(output.ends_with("Traversal finished.\n"));
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let input = "1\nx\n3\n1\n9\n2\nn\n-1\n3\n0\n";
        let (outcome, output) = run(seeded(), input);
        let outcome = outcome.unwrap();

        assert_eq!(outcome.graph.number_of_nodes(), 3);
        assert_eq!(outcome.graph.number_of_edges(), 2);
        assert_eq!(
            output
                .matches("The number of vertices must be at least 2. Try again.")
                .count(),
            2
        );
        assert_eq!(
            output
                .matches("The number of edges must lie between 2 and 3. Try again.")
                .count(),
            2
        );
        assert_eq!(output.matches("Invalid input. Try again.").count(), 2);
        assert_eq!(outcome.reachability.start(), 0);
    }

    #[test]
    fn random_graph_is_reproducible() {
        let input = "6\n9\nn\n2\n";
        let (first, _) = run(seeded(), input);
        let (second, _) = run(seeded(), input);
        let (first, second) = (first.unwrap(), second.unwrap());

        assert_eq!(first.graph.edge_list(), second.graph.edge_list());
        assert_eq!(first.reachability, second.reachability);
        assert_eq!(first.graph.number_of_distinct_edges(), 9);
    }

    #[test]
    fn waits_for_final_line() {
        let config = SessionConfig {
            wait_for_exit: true,
            ..seeded()
        };
        let (outcome, _) = run(config.clone(), "2\n1\nn\n0\n");
        assert_eq!(
            outcome.unwrap_err().kind(),
            std::io::ErrorKind::UnexpectedEof
        );

        let (outcome, _) = run(config, "2\n1\nn\n0\n\n");
        assert!(outcome.unwrap().reachability.is_complete());
    }
}
