use std::collections::HashMap;
use crate::union_find::UnionFind;

/// Accumulates named vertex pairs into a spanning forest over dense 0-based
/// ids, the input format the selection engine consumes.
///
/// Vertex names are deduplicated into ids in first-seen order. A pair only
/// becomes an edge when its endpoints are not already connected through
/// earlier edges, so the emitted edge list is acyclic no matter how tangled
/// the raw pairs are.
///
/// # Examples
/// ```
///use dispersion::{ForestBuilder, Graph};
///
///let mut builder = ForestBuilder::new();
///builder.add_pair("alice", "bob");
///builder.add_pair("bob", "carol");
///// Already connected through bob; no edge is emitted.
///builder.add_pair("carol", "alice");
///
///assert_eq!(3, builder.n_vertices());
///assert_eq!(2, builder.edges().len());
///let graph = Graph::from_edges(builder.n_vertices(), builder.edges()).unwrap();
///assert_eq!(3, graph.n_nodes());
/// ```
#[derive(Default)]
pub struct ForestBuilder {
    ids: HashMap<String, usize>,
    union_find: UnionFind,
    edges: Vec<(usize, usize)>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        ForestBuilder {
            ids: HashMap::new(),
            union_find: UnionFind::new(),
            edges: Vec::new(),
        }
    }

    /// Registers a vertex name without adding any edge, and returns its
    /// dense id. Names already seen keep their id.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.union_find.make_set();
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Offers a vertex-name pair. Both names are registered; the edge is
    /// emitted only when the endpoints are not already in the same connected
    /// component.
    ///
    /// # Returns
    /// * whether an edge was emitted
    pub fn add_pair(&mut self, a: &str, b: &str) -> bool {
        let id_a = self.add_vertex(a);
        let id_b = self.add_vertex(b);
        if self.union_find.union(id_a, id_b) {
            self.edges.push((id_a, id_b));
            true
        } else {
            false
        }
    }

    /// The number of distinct vertex names seen so far, including vertices
    /// that ended up without any edge.
    pub fn n_vertices(&self) -> usize {
        self.ids.len()
    }

    /// The emitted spanning-forest edges, in emission order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The dense id a name was assigned, if it has been seen.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }
}
