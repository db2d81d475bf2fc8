use num_traits::PrimInt;

/// Sentinel "no excluded neighbour" marker for traversals rooted at a node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Fills `dist` so that `dist[v]` is the number of edges on the unique path
/// from `source` to `v`. The buffer is owned by the caller and reused across
/// invocations; entries for nodes outside the source's component are left
/// untouched.
///
/// Runs an explicit-stack depth-first traversal, excluding the neighbour each
/// node was entered from so every edge is walked once per direction. Cycles
/// in the component make this loop forever; callers uphold the tree
/// precondition.
pub(crate) fn fill_distances<T: PrimInt>(adjacency: &[Vec<usize>], source: usize, dist: &mut [T]) {
    dist[source] = T::zero();
    let mut stack = vec![(source, NO_PARENT)];
    while let Some((x, parent)) = stack.pop() {
        let dist_x = dist[x];
        for &y in &adjacency[x] {
            if y != parent {
                dist[y] = dist_x + T::one();
                stack.push((y, x));
            }
        }
    }
}

/// Returns a pair of candidate nodes realizing the tree's diameter restricted
/// to the candidate set, via the two-sweep technique: the farthest candidate
/// from any starting candidate is an endpoint of some diameter.
///
/// Ties on "farthest" go to the lowest node id (first maximum found). The
/// caller guarantees at least two candidates.
pub(crate) fn most_distant_pair<T: PrimInt>(
    adjacency: &[Vec<usize>],
    candidates: &[bool],
    dist: &mut [T],
) -> (usize, usize) {
    let start = candidates.iter().position(|&c| c)
        .expect("most distant pair requested with no candidate nodes");
    fill_distances(adjacency, start, dist);
    let first = farthest_candidate(dist, candidates);
    fill_distances(adjacency, first, dist);
    let second = farthest_candidate(dist, candidates);
    (first, second)
}

fn farthest_candidate<T: PrimInt>(dist: &[T], candidates: &[bool]) -> usize {
    let mut best = None;
    for (i, &is_candidate) in candidates.iter().enumerate() {
        if is_candidate && (best.is_none() || dist[i] > dist[best.unwrap()]) {
            best = Some(i);
        }
    }
    best.expect("most distant pair requested with no candidate nodes")
}
