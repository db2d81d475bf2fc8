use crate::DispersionError;

/// An undirected forest held as an adjacency list over dense node ids
/// `0..n_nodes`. Neighbour order follows edge insertion order.
///
/// The selection engine assumes no connected component contains a cycle.
/// That property is not enforced here; components are checked when they are
/// actually solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    n_edges: usize,
}

impl Graph {
    /// Builds a graph from an undirected edge list. Each edge appends to the
    /// neighbour lists of both endpoints.
    ///
    /// # Parameters
    /// * `n_nodes` - the number of nodes; ids must lie in `0..n_nodes`.
    /// * `edges` - the undirected edges as `(a, b)` pairs.
    ///
    /// # Returns
    /// * A result containing the graph, or an error if an edge endpoint is
    ///   outside `0..n_nodes`.
    ///
    /// # Examples
    /// ```
    ///use dispersion::Graph;
    ///
    ///let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    ///assert_eq!(5, graph.n_nodes());
    ///assert_eq!(4, graph.n_edges());
    /// ```
    pub fn from_edges(n_nodes: usize, edges: &[(usize, usize)]) -> Result<Graph, DispersionError> {
        let mut adjacency = vec![Vec::new(); n_nodes];
        for &(a, b) in edges {
            if a >= n_nodes || b >= n_nodes {
                return Err(DispersionError::NodeOutOfRange(
                    format!("edge ({a}, {b}) references a node beyond {n_nodes} nodes")));
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        Ok(Graph { adjacency, n_edges: edges.len() })
    }

    /// The number of nodes in the graph, including isolated ones.
    pub fn n_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of undirected edges the graph was built from.
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// The neighbours of `node` in insertion order.
    pub fn neighbours(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}
