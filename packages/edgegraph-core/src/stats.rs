//! Weight statistics over a built graph
//!
//! Uniform-width histogram of edge weights, used to pick a pruning threshold.
//!
//! # Bin semantics
//!
//! ```text
//! edges:  e[0] < e[1] < ... < e[k]     (k + 1 boundaries, k bins)
//! counts: counts[i] = |{ w : e[i] <= w < e[i+1] }|
//! ```
//!
//! except the top bin, which is closed on both ends: a weight exactly equal
//! to the sample maximum lands in bin `k - 1`, never in a phantom bin `k`.
//! This matches conventional histogram semantics and the boundary counts
//! depend on it.

use petgraph::EdgeType;
use serde::Serialize;
use tracing::debug;

use crate::errors::{ProjectError, Result};
use crate::graph::ProjectedGraph;

/// Histogram over the edge weights of a graph snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightHistogram {
    bin_edges: Vec<f64>,
    counts: Vec<u64>,
}

impl WeightHistogram {
    /// Bin boundaries; one more entry than [`counts`](Self::counts)
    pub fn bin_edges(&self) -> &[f64] {
        &self.bin_edges
    }

    /// Per-bin sample counts
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of samples across all bins (equals the edge count of the
    /// graph the histogram was computed from)
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Compute a uniform-width histogram of the graph's edge weights.
///
/// Pure read: the graph is not mutated. Errors on `bin_count == 0`
/// (configuration) and on a graph with no edges (a silent all-zero histogram
/// would mislead the threshold choice downstream).
pub fn weight_histogram<Ty: EdgeType>(
    graph: &ProjectedGraph<Ty>,
    bin_count: usize,
) -> Result<WeightHistogram> {
    if bin_count == 0 {
        return Err(ProjectError::config("histogram bin_count must be > 0"));
    }

    let weights: Vec<f64> = graph.edges().map(|(_, _, weight)| weight).collect();
    if weights.is_empty() {
        return Err(ProjectError::empty_graph("weight_histogram"));
    }

    let mut min_w = f64::INFINITY;
    let mut max_w = f64::NEG_INFINITY;
    for &w in &weights {
        min_w = min_w.min(w);
        max_w = max_w.max(w);
    }
    let span = max_w - min_w;

    let mut bin_edges = Vec::with_capacity(bin_count + 1);
    for i in 0..=bin_count {
        bin_edges.push(min_w + span * (i as f64) / (bin_count as f64));
    }
    // Pin the endpoints exactly; the interior points may carry fp rounding.
    bin_edges[0] = min_w;
    bin_edges[bin_count] = max_w;

    let mut counts = vec![0u64; bin_count];
    for &w in &weights {
        let bin = if span == 0.0 {
            // Degenerate sample: every weight equals the max, and the top
            // bin is the closed one.
            bin_count - 1
        } else {
            let raw = ((w - min_w) / span * (bin_count as f64)).floor() as usize;
            raw.min(bin_count - 1)
        };
        counts[bin] += 1;
    }

    debug!(
        samples = weights.len(),
        bins = bin_count,
        min = min_w,
        max = max_w,
        "computed weight histogram"
    );
    Ok(WeightHistogram { bin_edges, counts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::graph::DirectedGraph;
    use crate::projection::ProjectionPolicy;
    use pretty_assertions::assert_eq;

    fn graph_with_weights(weights: &[u32]) -> DirectedGraph {
        // Distinct vertex pairs, weight w via w duplicate records.
        let policy = ProjectionPolicy::new(0, 1).unwrap();
        let mut records = Vec::new();
        for (i, &w) in weights.iter().enumerate() {
            for _ in 0..w {
                records.push(vec![format!("s{i}"), format!("t{i}")]);
            }
        }
        build_graph(records, &policy, DirectedGraph::new()).unwrap()
    }

    #[test]
    fn test_histogram_conserves_edge_count() {
        let graph = graph_with_weights(&[1, 2, 3, 4, 5, 9]);
        for bin_count in 1..=8 {
            let histogram = weight_histogram(&graph, bin_count).unwrap();
            assert_eq!(histogram.total(), graph.edge_count() as u64);
            assert_eq!(histogram.bin_edges().len(), bin_count + 1);
            assert_eq!(histogram.counts().len(), bin_count);
        }
    }

    #[test]
    fn test_max_weight_lands_in_last_bin() {
        let graph = graph_with_weights(&[1, 2, 10]);
        let histogram = weight_histogram(&graph, 3).unwrap();
        // Bins over [1, 10]: [1,4) [4,7) [7,10]
        assert_eq!(histogram.counts(), &[2, 0, 1]);
        assert_eq!(histogram.bin_edges()[0], 1.0);
        assert_eq!(histogram.bin_edges()[3], 10.0);
    }

    #[test]
    fn test_boundary_weight_goes_to_upper_bin() {
        let graph = graph_with_weights(&[1, 2, 3]);
        let histogram = weight_histogram(&graph, 2).unwrap();
        // Bins over [1, 3]: [1,2) [2,3]; the weight 2 belongs to the second.
        assert_eq!(histogram.counts(), &[1, 2]);
    }

    #[test]
    fn test_degenerate_uniform_weights() {
        let graph = graph_with_weights(&[4, 4, 4]);
        let histogram = weight_histogram(&graph, 5).unwrap();
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.counts()[4], 3);
        assert_eq!(histogram.bin_edges().len(), 6);
    }

    #[test]
    fn test_zero_bins_is_a_configuration_error() {
        let graph = graph_with_weights(&[1]);
        assert!(matches!(
            weight_histogram(&graph, 0),
            Err(ProjectError::Config(_))
        ));
    }

    #[test]
    fn test_empty_graph_is_an_error_not_a_default() {
        let graph = DirectedGraph::new();
        assert!(matches!(
            weight_histogram(&graph, 4),
            Err(ProjectError::EmptyGraph { .. })
        ));
    }

    #[test]
    fn test_histogram_serializes_for_reporting() {
        let graph = graph_with_weights(&[1, 3]);
        let histogram = weight_histogram(&graph, 2).unwrap();
        let json = serde_json::to_value(&histogram).unwrap();
        assert_eq!(json["counts"], serde_json::json!([1, 1]));
        assert_eq!(json["bin_edges"], serde_json::json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_histogram_does_not_mutate_graph() {
        let graph = graph_with_weights(&[1, 2, 3]);
        let before = graph.to_edge_list();
        let _ = weight_histogram(&graph, 4).unwrap();
        assert_eq!(graph.to_edge_list(), before);
    }
}
