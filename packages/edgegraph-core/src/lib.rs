//! edgegraph-core — streaming edge-list projection into weighted simple graphs
//!
//! Converts a stream of duplicate, time-stamped source→target records (a
//! conceptual multigraph) into a weighted simple graph ready for downstream
//! analysis and embedding:
//!
//! 1. **Projection** ([`builder`]): sequential fold of records under an
//!    immutable [`ProjectionPolicy`] (field mapping, timestamp filter,
//!    duplicate-merge rule).
//! 2. **Statistics** ([`stats`]): uniform-width histogram over edge weights.
//! 3. **Pruning** ([`prune`]): threshold + [`CutPolicy`] edge filter with
//!    optional isolate removal.
//! 4. **Extraction** ([`components`]): largest weakly connected component as
//!    an induced subgraph.
//!
//! ```
//! use edgegraph_core::{
//!     build_graph, cut_edges, largest_component, weight_histogram,
//!     CutPolicy, DirectedGraph, ProjectionPolicy,
//! };
//!
//! let records = vec![
//!     vec!["a".to_string(), "b".to_string(), "1".to_string(), "2016-06-01".to_string()],
//!     vec!["a".to_string(), "b".to_string(), "1".to_string(), "2016-06-02".to_string()],
//!     vec!["c".to_string(), "d".to_string(), "1".to_string(), "2016-01-01".to_string()],
//! ];
//! let policy = ProjectionPolicy::new(0, 1)
//!     .and_then(|p| p.with_timestamp_filter(3, "2016-05-01"))
//!     .unwrap();
//!
//! let graph = build_graph(records, &policy, DirectedGraph::new()).unwrap();
//! assert_eq!(graph.edge_weight("a", "b"), Some(2.0));
//!
//! let histogram = weight_histogram(&graph, 4).unwrap();
//! assert_eq!(histogram.total(), 1);
//!
//! let pruned = cut_edges(&graph, 10.0, CutPolicy::LargerThanExclusive, true).unwrap();
//! let core = largest_component(&pruned);
//! assert_eq!(core.vertex_count(), 2);
//! ```
//!
//! The record source (delimited-file tokenizing, header handling) lives in
//! `edgegraph-io`; the core only sees field-lists.

pub mod builder;
pub mod components;
pub mod errors;
pub mod graph;
pub mod projection;
pub mod prune;
pub mod stats;

pub use builder::{build_graph, GraphBuilder};
pub use components::{connected_components, largest_component};
pub use errors::{ProjectError, Result};
pub use graph::{DirectedGraph, ProjectedGraph, UndirectedGraph};
pub use projection::{MergeRule, ProjectionPolicy, TimestampFilter};
pub use prune::{cut_edges, CutPolicy};
pub use stats::{weight_histogram, WeightHistogram};
