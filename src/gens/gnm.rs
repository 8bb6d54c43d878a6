use fxhash::FxHashMap;

use super::*;

/// Generator for uniform simple `G(n,m)` graphs with `n` nodes and `m` edges.
///
/// Edge indices in `0..n (n - 1) / 2` are sampled without replacement and mapped to edges by
/// [`Edge::from_u64_undir`]. Every draw yields a new edge, so generation takes exactly `m`
/// random draws no matter how dense the requested graph is.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: u64,
    m: u64,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n as u64;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m as u64;
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over a random `G(n,m)` edge set.
    ///
    /// # Panics
    /// - If `n < 2`
    /// - If `m` exceeds the number of possible edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(
            self.n >= MIN_VERTICES as u64,
            "At least two nodes must be generated!"
        );
        GnmGenerator::new(rng, self.n, self.m)
    }
}

/// Given `n` nodes, this iterator produces exactly `m` uniformly random and distinct
/// undirected edges without replacement.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// A sparse map simulates an in-place Fisher-Yates shuffle of `0..end`, so only the drawn
/// prefix of the permutation is ever materialized.
pub struct GnmGenerator<'a, R>
where
    R: Rng,
{
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    rng: &'a mut R,
}

impl<'a, R> GnmGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new `GnmGenerator`.
    ///
    /// # Panics
    /// Panics if `m > n (n - 1) / 2`, which would violate sampling without replacement.
    pub fn new(rng: &'a mut R, n: u64, m: u64) -> Self {
        let end = n * (n - 1) / 2;
        assert!(m <= end, "Too many edges requested!");

        let mut map = FxHashMap::default();
        map.reserve(m as usize);

        Self {
            n,
            rem: m,
            cur: 0,
            end,
            map,
            rng,
        }
    }

    /// Selects the next unique edge index.
    ///
    /// Position `cur` of the virtual permutation is swapped with a random position in
    /// `cur..end`; the map remembers the values of all positions touched so far.
    fn next_step(&mut self) -> Option<u64> {
        if self.rem == 0 {
            return None;
        }

        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        let replacement = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, replacement);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }
}

impl<R> Iterator for GnmGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(|x| Edge::from_u64_undir(x, self.n))
    }

    /// Returns the number of edges remaining to be generated.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R> ExactSizeIterator for GnmGenerator<'_, R> where R: Rng {}
