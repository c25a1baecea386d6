//! Weighted simple graph with petgraph
//!
//! `ProjectedGraph` is the output type of the whole pipeline: a weighted
//! simple graph over string-labelled vertices, backed by a petgraph `Graph`
//! plus a label → node-index map for O(1) lookup by label.
//!
//! The simple-graph invariant lives here: `upsert_edge` overwrites the edge
//! for an existing (source, target) key instead of adding a parallel edge.
//! For undirected graphs the key is the unordered pair.

use ahash::AHashMap;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction, EdgeType, Undirected};

/// Per-edge payload.
///
/// `weight` is the public scalar; `merged` counts how many input records were
/// folded into this edge, which the running-average merge rule needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeSlot {
    pub(crate) weight: f64,
    pub(crate) merged: u32,
}

impl EdgeSlot {
    pub(crate) fn single(weight: f64) -> Self {
        Self { weight, merged: 1 }
    }
}

/// Weighted simple graph over opaque string vertex labels
///
/// Generic over petgraph's `EdgeType`: `DirectedGraph` keys edges by ordered
/// pair, `UndirectedGraph` by unordered pair. Vertices are created implicitly
/// the first time they appear as an endpoint and are never removed by the
/// builder (pruning constructs a fresh graph instead).
pub struct ProjectedGraph<Ty: EdgeType = Directed> {
    graph: Graph<String, EdgeSlot, Ty>,
    label_to_node: AHashMap<String, NodeIndex>,
}

/// Directed weighted simple graph (the reference projection target)
pub type DirectedGraph = ProjectedGraph<Directed>;

/// Undirected weighted simple graph
pub type UndirectedGraph = ProjectedGraph<Undirected>;

impl<Ty: EdgeType> Default for ProjectedGraph<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeType> ProjectedGraph<Ty> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
            label_to_node: AHashMap::new(),
        }
    }

    /// Create an empty graph with preallocated capacity
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: Graph::with_capacity(vertices, edges),
            label_to_node: AHashMap::with_capacity(vertices),
        }
    }

    /// True for directed graphs (ordered edge keys)
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if a vertex with this label exists
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.label_to_node.contains_key(label)
    }

    /// Look up the weight of the edge (source, target), if present.
    ///
    /// For undirected graphs the orientation of the lookup does not matter.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.edge_slot(source, target).map(|slot| slot.weight)
    }

    /// Vertex labels in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Edges as (source, target, weight) in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight().weight,
            )
        })
    }

    /// Materialize the edge list as owned triples (outbound boundary helper)
    pub fn to_edge_list(&self) -> Vec<(String, String, f64)> {
        self.edges()
            .map(|(s, t, w)| (s.to_string(), t.to_string(), w))
            .collect()
    }

    /// Out-degree of a vertex, `None` if the label is unknown.
    ///
    /// For undirected graphs this is the incident-edge count.
    pub fn out_degree(&self, label: &str) -> Option<usize> {
        let idx = self.vertex_index(label)?;
        Some(self.graph.edges_directed(idx, Direction::Outgoing).count())
    }

    /// In-degree of a vertex, `None` if the label is unknown.
    ///
    /// For undirected graphs this is the incident-edge count.
    pub fn in_degree(&self, label: &str) -> Option<usize> {
        let idx = self.vertex_index(label)?;
        Some(self.graph.edges_directed(idx, Direction::Incoming).count())
    }

    /// Total degree of a vertex, `None` if the label is unknown.
    ///
    /// Directed graphs count in + out (a self-loop counts twice); undirected
    /// graphs count incident edges.
    pub fn degree(&self, label: &str) -> Option<usize> {
        let idx = self.vertex_index(label)?;
        if Ty::is_directed() {
            let outgoing = self.graph.edges_directed(idx, Direction::Outgoing).count();
            let incoming = self.graph.edges_directed(idx, Direction::Incoming).count();
            Some(outgoing + incoming)
        } else {
            Some(self.graph.edges(idx).count())
        }
    }

    // ------------------------------------------------------------
    // Crate-internal surface (builder / pruner / extractor)
    // ------------------------------------------------------------

    pub(crate) fn inner(&self) -> &Graph<String, EdgeSlot, Ty> {
        &self.graph
    }

    pub(crate) fn vertex_index(&self, label: &str) -> Option<NodeIndex> {
        self.label_to_node.get(label).copied()
    }

    /// Insert the vertex if absent, returning its index either way
    pub(crate) fn ensure_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.label_to_node.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.label_to_node.insert(label.to_string(), idx);
        idx
    }

    pub(crate) fn edge_slot(&self, source: &str, target: &str) -> Option<EdgeSlot> {
        let source_idx = self.vertex_index(source)?;
        let target_idx = self.vertex_index(target)?;
        // find_edge ignores orientation on undirected graphs
        self.graph
            .find_edge(source_idx, target_idx)
            .map(|edge_idx| self.graph[edge_idx])
    }

    /// Insert or overwrite the edge (source, target), creating endpoints as
    /// needed. Overwrite-by-key is what keeps the graph simple.
    pub(crate) fn upsert_edge(&mut self, source: &str, target: &str, slot: EdgeSlot) {
        let source_idx = self.ensure_vertex(source);
        let target_idx = self.ensure_vertex(target);
        match self.graph.find_edge(source_idx, target_idx) {
            Some(edge_idx) => self.graph[edge_idx] = slot,
            None => {
                self.graph.add_edge(source_idx, target_idx, slot);
            }
        }
    }
}

impl<Ty: EdgeType> Clone for ProjectedGraph<Ty> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            label_to_node: self.label_to_node.clone(),
        }
    }
}

impl<Ty: EdgeType> std::fmt::Debug for ProjectedGraph<Ty> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectedGraph")
            .field("directed", &Ty::is_directed())
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
