/*!
`incidence_dfs` builds small **undirected** graphs from an incidence matrix and reports which
vertices a depth-first search reaches from a given start vertex.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of vertices.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` are the same edge and most places store the normalized form.

A graph is entered (or generated) as an `n x m` [`IncidenceMatrix`](crate::repr::IncidenceMatrix)
and converted into a sorted, duplicate-free [`AdjArray`](crate::repr::AdjArray) for traversal.
[`IncidenceGraph`](crate::graph::IncidenceGraph) owns both and rebuilds the latter on request.

# Usage

- [`prelude`] includes nodes, edges, basic graph operation traits and both representations,
- [`algo`] includes the depth-first traversals and the [`Reachability`](crate::algo::Reachability) report,
- [`gens`] includes the random edge generators,
- [`io`] includes console prompting and text reports,
- [`session`] ties everything together into the interactive dialogue.

```rust
use incidence_dfs::{prelude::*, algo::*};

let graph = IncidenceGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
let reach = graph.reachability(0, TraversalMode::Iterative).unwrap();

assert_eq!(reach.order(), &[0, 1, 2, 3]);
assert!(reach.is_complete());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod session;

/// `incidence_dfs::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, both representations and the owning graph aggregate.
pub mod prelude {
    pub use super::{
        edge::*, error::*, gens::EdgeSampling, graph::IncidenceGraph, node::*, ops::*, repr::*,
    };
}
