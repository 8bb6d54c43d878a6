/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are small and entered interactively.
Vertices are numbered `0` to `n - 1`, exactly as they appear in the rows of an incidence matrix.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Smallest number of vertices a graph may be configured with
pub const MIN_VERTICES: NumNodes = 2;
