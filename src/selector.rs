use num_traits::{PrimInt, Signed};
use crate::Selection;

pub(super) mod exact;
pub(super) mod greedy;

/// The per-tree selection strategy options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// O(size·K) heuristic: seed with a diameter pair, then repeatedly add
    /// the node with the largest distance sum to the chosen set. Fast, not
    /// guaranteed optimal.
    Greedy,
    /// O(size·K²) tree dynamic program with reconstruction. Provably
    /// maximizes the pairwise distance sum.
    Exact,
}

impl Strategy {
    /// Solves one connected tree: picks `k` of its candidate nodes maximizing
    /// the pairwise distance sum. `adjacency` is densely indexed; the caller
    /// guarantees it is acyclic, that `2 <= k <= size`, and that at least `k`
    /// candidates exist.
    pub(crate) fn solve_tree<T: PrimInt + Signed>(
        &self,
        adjacency: &[Vec<usize>],
        k: usize,
        candidates: &[bool],
    ) -> Selection<T> {
        match self {
            Strategy::Greedy => greedy::solve(adjacency, k, candidates),
            Strategy::Exact => exact::solve(adjacency, k, candidates),
        }
    }
}
