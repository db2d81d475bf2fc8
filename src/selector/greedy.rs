use num_traits::PrimInt;
use crate::distance::{fill_distances, most_distant_pair};
use crate::Selection;

/// Greedy maximization heuristic. Seeds the chosen set with a most distant
/// candidate pair, then repeatedly adds the unchosen candidate whose summed
/// distance to the chosen set is largest, until `k` nodes are chosen.
///
/// Ties are broken by lowest node id as a side effect of linear scan order.
/// Time O(k·size), memory O(size).
pub(crate) fn solve<T: PrimInt>(
    adjacency: &[Vec<usize>],
    k: usize,
    candidates: &[bool],
) -> Selection<T> {
    let n = adjacency.len();
    assert!(2 <= k && k <= n, "selection target {k} out of range for component of size {n}");

    let mut chosen = Vec::with_capacity(k);
    let mut is_chosen = vec![false; n];
    // dists[i] is the sum of distances from node i to currently chosen nodes
    let mut dists = vec![T::zero(); n];
    let mut scratch = vec![T::zero(); n];
    let mut total = T::zero();

    let (first, second) = most_distant_pair(adjacency, candidates, &mut scratch);
    choose(first, adjacency, &mut chosen, &mut is_chosen, &mut dists, &mut scratch, &mut total);
    choose(second, adjacency, &mut chosen, &mut is_chosen, &mut dists, &mut scratch, &mut total);

    while chosen.len() < k {
        let mut best = None;
        for i in 0..n {
            if candidates[i] && !is_chosen[i]
                && (best.is_none() || dists[i] > dists[best.unwrap()]) {
                best = Some(i);
            }
        }
        let best = best.expect("ran out of candidate nodes before reaching the selection target");
        choose(best, adjacency, &mut chosen, &mut is_chosen, &mut dists, &mut scratch, &mut total);
    }

    Selection { nodes: chosen, score: total }
}

fn choose<T: PrimInt>(
    x: usize,
    adjacency: &[Vec<usize>],
    chosen: &mut Vec<usize>,
    is_chosen: &mut [bool],
    dists: &mut [T],
    scratch: &mut [T],
    total: &mut T,
) {
    assert!(!is_chosen[x], "node {x} chosen twice");
    *total = *total + dists[x];
    is_chosen[x] = true;
    chosen.push(x);
    fill_distances(adjacency, x, scratch);
    for i in 0..dists.len() {
        dists[i] = dists[i] + scratch[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency_from(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); n];
        for &(a, b) in edges {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        adjacency
    }

    #[test]
    fn path_endpoints_for_two() {
        let adjacency = adjacency_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let result: Selection<i64> = solve(&adjacency, 2, &vec![true; 5]);
        let mut nodes = result.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![0, 4], nodes);
        assert_eq!(4, result.score);
    }

    #[test]
    fn star_leaves_for_three() {
        let adjacency = adjacency_from(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let result: Selection<i64> = solve(&adjacency, 3, &vec![true; 5]);
        assert_eq!(3, result.nodes.len());
        assert!(!result.nodes.contains(&0));
        assert_eq!(6, result.score);
    }

    #[test]
    fn whole_tree_when_target_is_size() {
        let adjacency = adjacency_from(4, &[(0, 1), (1, 2), (1, 3)]);
        let result: Selection<i64> = solve(&adjacency, 4, &vec![true; 4]);
        let mut nodes = result.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![0, 1, 2, 3], nodes);
        // All pairs: d(0,1)+d(0,2)+d(0,3)+d(1,2)+d(1,3)+d(2,3) = 1+2+2+1+1+2
        assert_eq!(9, result.score);
    }

    #[test]
    fn respects_candidate_restriction() {
        let adjacency = adjacency_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let candidates = vec![true, true, true, false, false];
        let result: Selection<i64> = solve(&adjacency, 2, &candidates);
        let mut nodes = result.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![0, 2], nodes);
        assert_eq!(2, result.score);
    }

    #[test]
    fn score_matches_reported_contributions() {
        // Spider with three legs of length two hanging off node 0.
        let adjacency = adjacency_from(
            7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        let result: Selection<i64> = solve(&adjacency, 3, &vec![true; 7]);
        // The three leg tips are pairwise 4 apart.
        let mut nodes = result.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![2, 4, 6], nodes);
        assert_eq!(12, result.score);
    }
}
