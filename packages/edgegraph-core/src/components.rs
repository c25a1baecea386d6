//! Connected-component extraction
//!
//! Components are computed over undirected reachability regardless of the
//! graph's directedness: the pipeline wants the largest *weakly* connected
//! piece of a directed projection, not strong components. BFS from each
//! unvisited vertex, O(V + E).

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::EdgeType;
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::graph::ProjectedGraph;

/// Enumerate connected components as vertex-label groups.
///
/// Components appear in discovery order (BFS start vertices are taken in
/// insertion order), and members within a component in BFS visit order.
pub fn connected_components<Ty: EdgeType>(graph: &ProjectedGraph<Ty>) -> Vec<Vec<String>> {
    component_indices(graph)
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|idx| graph.inner()[idx].clone())
                .collect()
        })
        .collect()
}

/// Induced subgraph of the largest connected component.
///
/// Largest by vertex count; on a tie the component discovered first wins,
/// which is deterministic for a given build order. Edge direction and weight
/// are preserved; edges crossing out of the component are dropped with it.
/// An empty input yields an empty graph ("largest of zero components" is
/// vacuously empty).
pub fn largest_component<Ty: EdgeType>(graph: &ProjectedGraph<Ty>) -> ProjectedGraph<Ty> {
    let components = component_indices(graph);
    // Strict comparison keeps the first-discovered component on ties.
    let mut winner: Option<&Vec<NodeIndex>> = None;
    for component in &components {
        if winner.map_or(true, |best| component.len() > best.len()) {
            winner = Some(component);
        }
    }
    let Some(winner) = winner else {
        return ProjectedGraph::new();
    };

    let inner = graph.inner();
    let mut in_winner = vec![false; inner.node_count()];
    for &idx in winner {
        in_winner[idx.index()] = true;
    }

    let mut result = ProjectedGraph::with_capacity(winner.len(), winner.len());
    // Insertion order of the original graph, restricted to the component.
    for idx in inner.node_indices() {
        if in_winner[idx.index()] {
            result.ensure_vertex(&inner[idx]);
        }
    }
    for edge in inner.edge_references() {
        if in_winner[edge.source().index()] && in_winner[edge.target().index()] {
            result.upsert_edge(&inner[edge.source()], &inner[edge.target()], *edge.weight());
        }
    }

    debug!(
        components = components.len(),
        winner_vertices = result.vertex_count(),
        winner_edges = result.edge_count(),
        "extracted largest connected component"
    );
    result
}

/// BFS over undirected reachability; components in discovery order
fn component_indices<Ty: EdgeType>(graph: &ProjectedGraph<Ty>) -> Vec<Vec<NodeIndex>> {
    let inner = graph.inner();
    let mut visited = vec![false; inner.node_count()];
    let mut components = Vec::new();

    for start in inner.node_indices() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(idx) = queue.pop_front() {
            for neighbor in inner.neighbors_undirected(idx) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    component.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }
    components
}
