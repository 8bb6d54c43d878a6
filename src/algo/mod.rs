/*!
# Graph Algorithms

Algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use incidence_dfs::algo::*;
```
*/

pub mod traversal;

use crate::prelude::*;

pub use traversal::*;
