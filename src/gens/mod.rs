/*!
# Graph Generators

Random edge generators for simple undirected graphs with a fixed number of nodes and edges.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Rejection::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()`.

Supported strategies:
- [`Rejection`]: draws random vertex pairs and rejects loops and already drawn pairs,
- [`Gnm`]: samples edge indices without replacement, so every draw produces a new edge.

[`EdgeSampling`] selects one of them at runtime.
*/

use std::{fmt::Display, str::FromStr};

use rand::Rng;

use crate::{edge::*, node::*};

mod gnm;
mod rejection;

pub use gnm::*;
pub use rejection::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Strategy used to draw the edges of a random graph
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum EdgeSampling {
    /// Draw vertex pairs until an unused, loop-free pair is found
    #[default]
    Rejection,
    /// Sample edge indices without replacement
    Exact,
    /// [`EdgeSampling::Exact`] if more than half of all possible edges are requested,
    /// [`EdgeSampling::Rejection`] otherwise
    Auto,
}

impl EdgeSampling {
    /// Resolves [`EdgeSampling::Auto`] for a request of `m` edges
    pub fn resolve(self, m: NumEdges, bounds: &EdgeBounds) -> Self {
        match self {
            EdgeSampling::Auto if bounds.is_dense(m) => EdgeSampling::Exact,
            EdgeSampling::Auto => EdgeSampling::Rejection,
            other => other,
        }
    }

    /// Generates `m` distinct, loop-free edges on `n` nodes with the selected strategy
    pub fn generate<R>(self, rng: &mut R, n: NumNodes, m: NumEdges, bounds: &EdgeBounds) -> Vec<Edge>
    where
        R: Rng,
    {
        match self.resolve(m, bounds) {
            EdgeSampling::Exact => Gnm::new().nodes(n).edges(m).generate(rng),
            _ => Rejection::new().nodes(n).edges(m).generate(rng),
        }
    }
}

impl Display for EdgeSampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EdgeSampling::Rejection => "rejection",
            EdgeSampling::Exact => "exact",
            EdgeSampling::Auto => "auto",
        };
        write!(f, "{name}")
    }
}

impl FromStr for EdgeSampling {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "rejection" => Ok(EdgeSampling::Rejection),
            "exact" => Ok(EdgeSampling::Exact),
            "auto" => Ok(EdgeSampling::Auto),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown EdgeSampling: {s}"),
            )),
        }
    }
}
