use num_traits::{PrimInt, Signed};
use crate::{DispersionError, DispersionParams, Graph, Selection};

/// The maximum-dispersion selection engine. Picks K nodes of a tree or
/// forest maximizing the sum of pairwise path distances among them.
pub struct Dispersion<'a> {
    graph: &'a Graph,
    n_nodes: usize,
    params: DispersionParams,
}

impl<'a> Dispersion<'a> {
    /// Creates a selection engine over a graph using a custom parameter
    /// configuration.
    ///
    /// # Parameters
    /// * `graph` - a reference to the forest to select from. No connected
    ///             component may contain a cycle.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The selection engine instance.
    ///
    /// # Examples
    /// ```
    ///use dispersion::{Dispersion, DispersionParams, Graph, Strategy};
    ///
    ///let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    ///let params = DispersionParams::builder()
    ///    .strategy(Strategy::Greedy)
    ///    .build();
    ///let solver = Dispersion::new(&graph, params);
    /// ```
    pub fn new(graph: &'a Graph, params: DispersionParams) -> Self {
        let n_nodes = graph.n_nodes();
        Dispersion { graph, n_nodes, params }
    }

    /// Creates a selection engine over a graph using the default parameters.
    ///
    /// # Parameters
    /// * `graph` - a reference to the forest to select from. No connected
    ///             component may contain a cycle.
    ///
    /// # Returns
    /// * The selection engine instance.
    ///
    /// # Examples
    /// ```
    ///use dispersion::{Dispersion, Graph};
    ///
    ///let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    ///let solver = Dispersion::default_params(&graph);
    /// ```
    pub fn default_params(graph: &'a Graph) -> Self {
        Dispersion::new(graph, DispersionParams::default())
    }

    /// Solves the forest-level selection: discovers connected components,
    /// gives each a quota of `k` proportional to its size
    /// (`⌊k·size/n_nodes⌋`), solves each component with the configured
    /// strategy, and merges the per-component selections.
    ///
    /// Components whose quota is 0 or 1 are skipped; a single selected node
    /// has no partner to form a pairwise distance. Because quotas are
    /// floored, the merged selection may hold fewer than `k` nodes.
    ///
    /// # Parameters
    /// * `k` - the number of nodes to select; `2 <= k <= n_nodes`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the selection: the chosen
    ///   node ids and the total score. An error is returned if the graph is
    ///   empty, `k` is out of range, a configured candidate id is out of
    ///   range, or a solved component turns out to contain a cycle.
    ///
    /// # Examples
    /// ```
    ///use dispersion::{Dispersion, Graph};
    ///
    ///// Two separate paths of three nodes each.
    ///let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]).unwrap();
    ///let solver = Dispersion::default_params(&graph);
    ///let selection = solver.solve::<i64>(4).unwrap();
    ///assert_eq!(4, selection.score);
    /// ```
    pub fn solve<T: PrimInt + Signed>(&self, k: usize) -> Result<Selection<T>, DispersionError> {
        self.validate_target(k)?;
        let candidates = self.candidate_mask()?;

        let mut visited = vec![false; self.n_nodes];
        let mut to_local = vec![0; self.n_nodes];
        let mut chosen = Vec::new();
        let mut total = T::zero();

        for root in 0..self.n_nodes {
            if visited[root] {
                continue;
            }
            let component = self.collect_component(root, &mut visited);
            let quota = k * component.len() / self.n_nodes;
            if quota <= 1 {
                continue;
            }
            let local_candidates: Vec<bool> =
                component.iter().map(|&global| candidates[global]).collect();
            let target = quota.min(local_candidates.iter().filter(|&&c| c).count());
            if target < 2 {
                continue;
            }

            let (local_adjacency, n_local_edges) =
                self.remap_component(&component, &mut to_local);
            if n_local_edges != component.len() - 1 {
                return Err(DispersionError::CyclicComponent(format!(
                    "component containing node {root} has {n_local_edges} edges \
                    over {} nodes", component.len())));
            }

            let selection: Selection<T> =
                self.params.strategy.solve_tree(&local_adjacency, target, &local_candidates);
            total = total + selection.score;
            chosen.extend(selection.nodes.iter().map(|&local| component[local]));
        }

        Ok(Selection { nodes: chosen, score: total })
    }

    /// Solves the selection on a graph that is one connected tree, with the
    /// full target `k` and no quota math. The selection holds exactly `k`
    /// nodes unless a candidate restriction shrinks the feasible target.
    ///
    /// # Parameters
    /// * `k` - the number of nodes to select; `2 <= k <= n_nodes`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the selection. On top of the
    ///   `solve` errors, an error is returned if the graph is not a single
    ///   connected tree.
    ///
    /// # Examples
    /// ```
    ///use dispersion::{Dispersion, Graph};
    ///
    ///let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    ///let solver = Dispersion::default_params(&graph);
    ///let selection = solver.solve_tree::<i64>(2).unwrap();
    ///let mut nodes = selection.nodes;
    ///nodes.sort_unstable();
    ///assert_eq!(vec![0, 4], nodes);
    ///assert_eq!(4, selection.score);
    /// ```
    pub fn solve_tree<T: PrimInt + Signed>(&self, k: usize) -> Result<Selection<T>, DispersionError> {
        self.validate_target(k)?;
        let candidates = self.candidate_mask()?;

        if self.graph.n_edges() != self.n_nodes - 1 {
            return Err(DispersionError::NotATree(format!(
                "{} edges over {} nodes", self.graph.n_edges(), self.n_nodes)));
        }
        let mut visited = vec![false; self.n_nodes];
        let component = self.collect_component(0, &mut visited);
        if component.len() != self.n_nodes {
            return Err(DispersionError::NotATree(format!(
                "only {} of {} nodes reachable from node 0", component.len(), self.n_nodes)));
        }

        let target = k.min(candidates.iter().filter(|&&c| c).count());
        if target < 2 {
            return Err(DispersionError::TargetOutOfRange(
                String::from("fewer than two candidate nodes")));
        }

        Ok(self.params.strategy.solve_tree(self.graph.adjacency(), target, &candidates))
    }

    fn validate_target(&self, k: usize) -> Result<(), DispersionError> {
        if self.n_nodes == 0 {
            return Err(DispersionError::EmptyGraph);
        }
        if k < 2 || k > self.n_nodes {
            return Err(DispersionError::TargetOutOfRange(
                format!("target {k} not in 2..={}", self.n_nodes)));
        }
        Ok(())
    }

    fn candidate_mask(&self) -> Result<Vec<bool>, DispersionError> {
        let candidate_list = match &self.params.candidates {
            None => return Ok(vec![true; self.n_nodes]),
            Some(list) => list,
        };
        let mut mask = vec![false; self.n_nodes];
        for &id in candidate_list {
            if id >= self.n_nodes {
                return Err(DispersionError::NodeOutOfRange(
                    format!("candidate {id} beyond {} nodes", self.n_nodes)));
            }
            mask[id] = true;
        }
        Ok(mask)
    }

    fn collect_component(&self, root: usize, visited: &mut [bool]) -> Vec<usize> {
        let mut component = Vec::new();
        let mut stack = vec![root];
        visited[root] = true;
        while let Some(x) = stack.pop() {
            component.push(x);
            for &y in self.graph.neighbours(x) {
                if !visited[y] {
                    visited[y] = true;
                    stack.push(y);
                }
            }
        }
        component
    }

    /// Re-indexes a component's adjacency into dense local ids `0..size`.
    /// Returns the local adjacency and the component's undirected edge count.
    fn remap_component(
        &self,
        component: &[usize],
        to_local: &mut [usize],
    ) -> (Vec<Vec<usize>>, usize) {
        for (local, &global) in component.iter().enumerate() {
            to_local[global] = local;
        }
        let mut adjacency = vec![Vec::new(); component.len()];
        let mut half_edges = 0;
        for (local, &global) in component.iter().enumerate() {
            for &y in self.graph.neighbours(global) {
                adjacency[local].push(to_local[y]);
                half_edges += 1;
            }
        }
        (adjacency, half_edges / 2)
    }
}
