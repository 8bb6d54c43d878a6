use fxhash::FxHashSet;
use tracing::trace;

use super::*;

/// Generator for simple random graphs with `n` nodes and `m` edges via rejection sampling.
///
/// Repeatedly draws two random nodes and keeps the pair if it is no loop and was not drawn
/// before (as an unordered pair). Edges are emitted in draw order and normalized.
///
/// Termination is probabilistic: each draw succeeds with probability
/// `(max - drawn) / (n (n - 1) / 2) * (n - 1) / n > 0` as long as `m <= n (n - 1) / 2`.
/// For requests close to the complete graph prefer [`Gnm`].
#[derive(Debug, Copy, Clone, Default)]
pub struct Rejection {
    n: NumNodes,
    m: NumEdges,
}

impl Rejection {
    /// Creates a new empty generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Rejection {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Rejection {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for Rejection {
    /// # Panics
    /// - If `n < 2`
    /// - If `m` exceeds the number of possible edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n >= MIN_VERTICES, "At least two nodes must be generated!");
        let max = self.n as u64 * (self.n as u64 - 1) / 2;
        assert!(self.m as u64 <= max, "Too many edges requested!");

        RejectionSampler {
            n: self.n,
            rem: self.m,
            existing: FxHashSet::default(),
            rng,
        }
    }
}

/// Iterator drawing random node pairs until `rem` new edges were found
pub struct RejectionSampler<'a, R>
where
    R: Rng,
{
    n: NumNodes,
    rem: NumEdges,
    existing: FxHashSet<Edge>,
    rng: &'a mut R,
}

impl<R> Iterator for RejectionSampler<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }

        let mut rejected = 0u64;
        loop {
            let u = self.rng.random_range(0..self.n);
            let v = self.rng.random_range(0..self.n);
            let edge = Edge(u, v).normalized();

            if !edge.is_loop() && self.existing.insert(edge) {
                if rejected > 0 {
                    trace!(rejected, %edge, "accepted edge after retries");
                }
                self.rem -= 1;
                return Some(edge);
            }
            rejected += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R> ExactSizeIterator for RejectionSampler<'_, R> where R: Rng {}
