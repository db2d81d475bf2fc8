//! Maximum-dispersion node selection on trees and forests in pure Rust.
//! Generic over signed integer score types.
//!
//! Given a forest of N nodes and a target K, the engine picks K nodes whose
//! sum of pairwise path distances is as large as possible. Two strategies
//! are available behind one interface:
//!  1. `Strategy::Exact` - a tree dynamic program that provably maximizes
//!     the pairwise distance sum, in O(N·K²) time, with an explicit
//!     reconstruction pass recovering the chosen nodes; and
//!  2. `Strategy::Greedy` - an O(N·K) heuristic that seeds the selection
//!     with a diameter pair of the tree (found by the classic double-sweep)
//!     and then repeatedly adds the node farthest in total from everything
//!     chosen so far. Fast, and usually close to optimal, but not
//!     guaranteed.
//!
//! Disconnected inputs are handled by solving each connected component with
//! a share of K proportional to its size and merging the results. A
//! `ForestBuilder` is included for turning streams of named vertex pairs
//! into the dense spanning-forest edge lists the engine consumes.
//!
//! # Examples
//! ```
//!use dispersion::{Dispersion, Graph};
//!
//!// A path of five nodes: the two ends are the most spread-out pair.
//!let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
//!let solver = Dispersion::default_params(&graph);
//!let selection = solver.solve::<i64>(2).unwrap();
//!let mut nodes = selection.nodes;
//!nodes.sort_unstable();
//!assert_eq!(vec![0, 4], nodes);
//!assert_eq!(4, selection.score);
//! ```
//!
//! # References
//! * [Handler, G.Y. Minimax location of a facility in an undirected tree graph.](https://doi.org/10.1287/trsc.7.3.287)
//!   (origin of the two-sweep diameter technique)
//! * [Ravi, S.S.; Rosenkrantz, D.J.; Tayi, G.K. Heuristic and special case algorithms for dispersion problems.](https://doi.org/10.1287/opre.42.2.299)

pub use crate::dispersion::Dispersion;
pub use crate::error::DispersionError;
pub use crate::forest_builder::ForestBuilder;
pub use crate::graph::Graph;
pub use crate::params::{DispersionParams, ParamsBuilder};
pub use crate::selection::Selection;
pub use crate::selector::Strategy;

mod dispersion;
mod distance;
mod error;
mod forest_builder;
mod graph;
mod params;
mod selection;
mod selector;
mod union_find;
