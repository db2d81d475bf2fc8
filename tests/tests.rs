use std::collections::VecDeque;
use dispersion::{
    Dispersion, DispersionError, DispersionParams, ForestBuilder, Graph, Strategy,
};

#[test]
fn path_ends_are_the_most_dispersed_pair() {
    let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    for strategy in [Strategy::Exact, Strategy::Greedy] {
        let params = DispersionParams::builder().strategy(strategy).build();
        let selection = Dispersion::new(&graph, params).solve::<i64>(2).unwrap();
        let mut nodes = selection.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![0, 4], nodes);
        assert_eq!(4, selection.score);
    }
}

#[test]
fn star_picks_three_leaves() {
    let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    for strategy in [Strategy::Exact, Strategy::Greedy] {
        let params = DispersionParams::builder().strategy(strategy).build();
        let selection = Dispersion::new(&graph, params).solve::<i64>(3).unwrap();
        assert_eq!(3, selection.nodes.len());
        assert!(!selection.nodes.contains(&0));
        assert_eq!(6, selection.score);
    }
}

#[test]
fn forest_quota_splits_across_components() {
    // Component A: 0-1-2, component B: 3-4-5. K = 4 gives each a quota of
    // two, so both contribute their endpoints.
    let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]).unwrap();
    let selection = Dispersion::default_params(&graph).solve::<i64>(4).unwrap();
    let mut nodes = selection.nodes.clone();
    nodes.sort_unstable();
    assert_eq!(vec![0, 2, 3, 5], nodes);
    assert_eq!(4, selection.score);
}

#[test]
fn exact_dominates_greedy() {
    let graph = Graph::from_edges(
        10,
        &[(0, 1), (1, 2), (2, 3), (3, 4), (1, 5), (2, 6), (3, 7), (7, 8), (8, 9)],
    ).unwrap();
    for k in 2..=10 {
        let exact = solve_with(&graph, Strategy::Exact, k);
        let greedy = solve_with(&graph, Strategy::Greedy, k);
        assert!(exact.score >= greedy.score, "greedy beat exact at k = {k}");
    }
}

#[test]
fn reported_scores_match_recomputed_pairwise_sums() {
    let graph = Graph::from_edges(
        10,
        &[(0, 1), (1, 2), (2, 3), (3, 4), (1, 5), (2, 6), (3, 7), (7, 8), (8, 9)],
    ).unwrap();
    for k in 2..=10 {
        for strategy in [Strategy::Exact, Strategy::Greedy] {
            let selection = solve_with(&graph, strategy, k);
            assert_eq!(k, selection.nodes.len());
            assert_eq!(selection.score, pairwise_sum(&graph, &selection.nodes));
        }
    }
}

#[test]
fn candidate_restriction_is_honored() {
    let graph = Graph::from_edges(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]).unwrap();
    let candidates = vec![1, 3, 5];
    for strategy in [Strategy::Exact, Strategy::Greedy] {
        let params = DispersionParams::builder()
            .strategy(strategy)
            .candidates(candidates.clone())
            .build();
        let selection = Dispersion::new(&graph, params).solve::<i64>(2).unwrap();
        let mut nodes = selection.nodes.clone();
        nodes.sort_unstable();
        assert_eq!(vec![1, 5], nodes);
        assert_eq!(4, selection.score);
    }
}

#[test]
fn empty_graph() {
    let graph = Graph::from_edges(0, &[]).unwrap();
    let result = Dispersion::default_params(&graph).solve::<i64>(2);
    assert!(matches!(result, Err(DispersionError::EmptyGraph)));
}

#[test]
fn target_out_of_range() {
    let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let result = Dispersion::default_params(&graph).solve::<i64>(5);
    assert!(matches!(result, Err(DispersionError::TargetOutOfRange(..))));
}

#[test]
fn cyclic_component() {
    let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let result = Dispersion::default_params(&graph).solve::<i64>(4);
    assert!(matches!(result, Err(DispersionError::CyclicComponent(..))));
}

#[test]
fn solve_tree_wants_a_tree() {
    let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
    let result = Dispersion::default_params(&graph).solve_tree::<i64>(2);
    assert!(matches!(result, Err(DispersionError::NotATree(..))));
}

#[test]
fn solve_tree_returns_exactly_k_nodes() {
    let graph = Graph::from_edges(
        8, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (6, 7)]).unwrap();
    for k in 2..=8 {
        let selection = Dispersion::default_params(&graph).solve_tree::<i64>(k).unwrap();
        assert_eq!(k, selection.nodes.len());
        assert_eq!(selection.score, pairwise_sum(&graph, &selection.nodes));
    }
}

#[test]
fn builder_output_feeds_the_solver() {
    let mut builder = ForestBuilder::new();
    builder.add_pair("amsterdam", "brussels");
    builder.add_pair("brussels", "cologne");
    builder.add_pair("cologne", "dresden");
    // Closes a cycle; suppressed.
    builder.add_pair("dresden", "amsterdam");
    builder.add_pair("lisbon", "madrid");

    assert_eq!(6, builder.n_vertices());
    assert_eq!(4, builder.edges().len());

    let graph = Graph::from_edges(builder.n_vertices(), builder.edges()).unwrap();
    let selection = Dispersion::default_params(&graph).solve::<i64>(3).unwrap();
    // The four-city chain holds quota two, the pair rounds down to one and
    // is skipped.
    assert_eq!(2, selection.nodes.len());
    assert_eq!(3, selection.score);
}

fn solve_with(graph: &Graph, strategy: Strategy, k: usize) -> dispersion::Selection<i64> {
    let params = DispersionParams::builder().strategy(strategy).build();
    Dispersion::new(graph, params).solve::<i64>(k).unwrap()
}

fn pairwise_sum(graph: &Graph, nodes: &[usize]) -> i64 {
    let mut total = 0;
    for (i, &x) in nodes.iter().enumerate() {
        let dist = bfs_distances(graph, x);
        for &y in &nodes[i + 1..] {
            total += dist[y];
        }
    }
    total
}

fn bfs_distances(graph: &Graph, source: usize) -> Vec<i64> {
    let mut dist = vec![-1; graph.n_nodes()];
    dist[source] = 0;
    let mut queue = VecDeque::from([source]);
    while let Some(x) = queue.pop_front() {
        for &y in graph.neighbours(x) {
            if dist[y] == -1 {
                dist[y] = dist[x] + 1;
                queue.push_back(y);
            }
        }
    }
    dist
}
