use num_traits::{PrimInt, Signed};
use crate::distance::NO_PARENT;
use crate::Selection;

/// Marks a reconstruction cell no merge has written.
const UNSET: usize = usize::MAX;

/// Exact tree dynamic program. Picks `k` candidate nodes of one tree whose
/// pairwise distance sum is provably maximal.
///
/// The tree is rooted at node 0 and processed post-order. For each node a
/// `(children + 1) × (k + 1)` table holds the best score achievable from
/// edges strictly inside the node's subtree, indexed by children merged so
/// far and nodes selected so far. Merging a child with `j` selected
/// descendants adds `j·(k − j)` for the child boundary edge: every path
/// between a selected descendant and any of the other `k − j` eventually
/// selected nodes crosses that edge exactly once, with `k` the fixed global
/// target rather than a subtree-local count. A parallel table records the
/// `j` that won each cell for the reconstruction walk.
///
/// Time O(size·k²), memory O(size·k); tables live until the solve returns.
pub(crate) fn solve<T: PrimInt + Signed>(
    adjacency: &[Vec<usize>],
    k: usize,
    candidates: &[bool],
) -> Selection<T> {
    let n = adjacency.len();
    assert!(2 <= k && k <= n, "selection target {k} out of range for component of size {n}");

    // Children-before-parent order is the reverse of an iterative preorder.
    let mut parent = vec![NO_PARENT; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![0];
    while let Some(x) = stack.pop() {
        order.push(x);
        for &y in &adjacency[x] {
            if y != parent[x] {
                parent[y] = x;
                stack.push(y);
            }
        }
    }

    // Cells no selection can reach hold the sentinel and are skipped in
    // merges, never added to.
    let unreachable = T::min_value();
    let mut scores: Vec<Vec<Vec<T>>> = vec![Vec::new(); n];
    let mut routes: Vec<Vec<Vec<usize>>> = vec![Vec::new(); n];

    for &x in order.iter().rev() {
        let n_children = adjacency[x].iter().filter(|&&y| y != parent[x]).count();
        let mut score = vec![vec![unreachable; k + 1]; n_children + 1];
        let mut route = vec![vec![UNSET; k + 1]; n_children + 1];

        score[0][0] = T::zero();
        if candidates[x] {
            score[0][1] = T::zero();
        }

        let mut idx = 0;
        for &y in &adjacency[x] {
            if y == parent[x] {
                continue;
            }
            let child_row = scores[y].last()
                .expect("child table missing in post-order merge");
            for i in 0..=k {
                if score[idx][i] == unreachable {
                    continue;
                }
                for j in 0..=(k - i) {
                    if child_row[j] == unreachable {
                        continue;
                    }
                    let crossing = T::from(j * (k - j)).unwrap();
                    let merged = score[idx][i] + child_row[j] + crossing;
                    if merged > score[idx + 1][i + j] {
                        score[idx + 1][i + j] = merged;
                        route[idx + 1][i + j] = j;
                    }
                }
            }
            idx += 1;
        }

        scores[x] = score;
        routes[x] = route;
    }

    let total = scores[0].last().expect("root table missing")[k];
    assert!(total != unreachable, "no feasible selection of {k} candidate nodes");

    // Walk back down, splitting the remaining target across children in
    // reverse merge order via the recorded routes.
    let mut chosen = Vec::with_capacity(k);
    let mut walk = vec![(0, k)];
    while let Some((x, mut remaining)) = walk.pop() {
        let mut idx = scores[x].len() - 1;
        for &y in adjacency[x].iter().rev() {
            if y == parent[x] {
                continue;
            }
            let into_child = routes[x][idx][remaining];
            assert!(into_child != UNSET, "reconstruction consulted an unwritten cell at node {x}");
            walk.push((y, into_child));
            remaining -= into_child;
            idx -= 1;
        }
        assert!(idx == 0, "reconstruction child index mismatch at node {x}");
        assert!(remaining <= 1, "reconstruction left {remaining} selections at node {x}");
        if remaining == 1 {
            chosen.push(x);
        }
    }

    Selection { nodes: chosen, score: total }
}
