//! Interactive depth-first reachability on small undirected graphs.
//!
//! Asks for the number of vertices and edges, builds the incidence matrix by hand or randomly,
//! prints the graph and reports which vertices a DFS from a chosen start vertex reaches.
//! The dialogue runs on stdin/stdout, logs go to stderr.

use std::io::{self, ErrorKind};

use clap::Parser;
use incidence_dfs::{
    algo::TraversalMode,
    gens::EdgeSampling,
    session::{Session, SessionConfig},
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Build an undirected graph from an incidence matrix and explore it depth-first
#[derive(Parser, Debug)]
#[command(name = "incidence-dfs")]
#[command(version)]
#[command(about = "Build an undirected graph from an incidence matrix and explore it depth-first")]
struct Cli {
    /// Seed for random graph generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Random edge sampling: rejection, exact or auto
    #[arg(long, default_value_t = EdgeSampling::Rejection)]
    sampling: EdgeSampling,

    /// Depth-first search implementation: recursive or iterative
    #[arg(long, default_value_t = TraversalMode::Recursive)]
    traversal: TraversalMode,

    /// Exit right after the traversal instead of waiting for a final line
    #[arg(long)]
    no_wait: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for SessionConfig {
    fn from(cli: &Cli) -> Self {
        SessionConfig {
            seed: cli.seed,
            sampling: cli.sampling,
            traversal: cli.traversal,
            wait_for_exit: !cli.no_wait,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from(&cli);
    info!(?config, "starting session");

    let mut session = Session::new(config, io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(outcome) => info!(
            visited = outcome.reachability.visited_count(),
            total = outcome.reachability.total(),
            "session finished"
        ),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => info!("input closed, leaving"),
        Err(e) => error!("session aborted: {e}"),
    }
}
