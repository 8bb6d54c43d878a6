/*!
# Representations

Two storage backends for the same undirected graph:

- [`IncidenceMatrix`]: the `n x m` 0/1 matrix a graph is entered or generated as,
- [`AdjArray`]: the sorted, duplicate-free adjacency list derived from it and used for traversal.

Conversion only goes one way: [`AdjArray::from_incidence`] rebuilds the adjacency list from scratch
whenever the matrix was changed.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod adjacency;
mod incidence;

pub use adjacency::*;
pub use incidence::*;
