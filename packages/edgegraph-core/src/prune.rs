//! Threshold pruning of edges by weight
//!
//! Produces a fresh graph containing only the edges that survive a threshold
//! comparison, optionally dropping vertices left without incident edges. The
//! input graph is never mutated.

use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ProjectError, Result};
use crate::graph::ProjectedGraph;

/// Which edges a prune removes, relative to the threshold.
///
/// The names encode what gets *cut*, not what is kept: `LargerThanExclusive`
/// cuts edges strictly larger than the threshold, so the survivors are the
/// edges with weight <= threshold. This inversion comes from the source
/// system and is preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutPolicy {
    /// Cut edges with weight > threshold
    LargerThanExclusive,
    /// Cut edges with weight >= threshold
    LargerThanInclusive,
    /// Cut edges with weight < threshold
    SmallerThanExclusive,
    /// Cut edges with weight <= threshold
    SmallerThanInclusive,
}

impl CutPolicy {
    /// True if an edge with this weight is removed under the threshold
    pub fn cuts(self, weight: f64, threshold: f64) -> bool {
        match self {
            CutPolicy::LargerThanExclusive => weight > threshold,
            CutPolicy::LargerThanInclusive => weight >= threshold,
            CutPolicy::SmallerThanExclusive => weight < threshold,
            CutPolicy::SmallerThanInclusive => weight <= threshold,
        }
    }
}

/// Prune edges by weight, returning a new graph.
///
/// Vertices are all carried over unless `prune_isolates` is set, in which
/// case vertices with no surviving incident edge are dropped. An empty
/// result is valid output, not an error. The threshold must be finite and
/// non-negative (weights live on a non-negative domain; a NaN threshold
/// would make every comparison silently false).
pub fn cut_edges<Ty: EdgeType>(
    graph: &ProjectedGraph<Ty>,
    threshold: f64,
    cut_policy: CutPolicy,
    prune_isolates: bool,
) -> Result<ProjectedGraph<Ty>> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ProjectError::config(format!(
            "prune threshold must be finite and non-negative, got {threshold}"
        )));
    }

    let inner = graph.inner();
    let mut keeps_edge = vec![false; inner.edge_count()];
    let mut has_surviving_edge = vec![false; inner.node_count()];
    for edge in inner.edge_references() {
        if !cut_policy.cuts(edge.weight().weight, threshold) {
            keeps_edge[edge.id().index()] = true;
            has_surviving_edge[edge.source().index()] = true;
            has_surviving_edge[edge.target().index()] = true;
        }
    }

    let surviving_edges = keeps_edge.iter().filter(|&&keep| keep).count();
    let mut result = ProjectedGraph::with_capacity(inner.node_count(), surviving_edges);

    // Vertex insertion order of the input is preserved in the output.
    for idx in inner.node_indices() {
        if !prune_isolates || has_surviving_edge[idx.index()] {
            result.ensure_vertex(&inner[idx]);
        }
    }
    for edge in inner.edge_references() {
        if keeps_edge[edge.id().index()] {
            result.upsert_edge(&inner[edge.source()], &inner[edge.target()], *edge.weight());
        }
    }

    info!(
        threshold,
        policy = ?cut_policy,
        prune_isolates,
        edges_before = graph.edge_count(),
        edges_after = result.edge_count(),
        vertices_after = result.vertex_count(),
        "pruned graph by edge weight"
    );
    Ok(result)
}
