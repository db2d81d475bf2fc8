/// The outcome of a solve: the chosen node ids and the sum of pairwise path
/// distances among them.
///
/// Node ids use the indexing of the graph the solve ran on. The score type
/// `T` is the signed integer type the solve was invoked with; `i64` is
/// recommended, since pairwise sums grow quadratically in the target count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    /// The chosen node ids, free of duplicates.
    pub nodes: Vec<usize>,
    /// The sum of pairwise path distances among the chosen nodes.
    pub score: T,
}
