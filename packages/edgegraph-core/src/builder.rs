//! Streaming graph builder
//!
//! Sequential fold of a record stream into a [`ProjectedGraph`]. Records are
//! field-lists (one `Vec<String>` per record) produced by an external
//! tokenizer; header rows must have been stripped before they reach here.
//!
//! Ownership discipline: the builder takes the graph by value and hands it
//! back from [`GraphBuilder::finish`], so exactly one stage owns the graph at
//! any time. Early termination is just dropping the record iterator; the
//! graph then reflects exactly the records pushed so far.

use petgraph::EdgeType;
use tracing::{debug, info};

use crate::errors::{ProjectError, Result};
use crate::graph::ProjectedGraph;
use crate::projection::ProjectionPolicy;

/// Incremental record-at-a-time builder.
///
/// Use this directly when the record source is fallible or needs interleaved
/// control; use [`build_graph`] for the plain iterator case.
pub struct GraphBuilder<'p, Ty: EdgeType> {
    policy: &'p ProjectionPolicy,
    graph: ProjectedGraph<Ty>,
    records_seen: usize,
    records_accepted: usize,
}

impl<'p, Ty: EdgeType> GraphBuilder<'p, Ty> {
    /// Start a build that folds records into `graph` under `policy`.
    ///
    /// The graph may be non-empty; an earlier build's output can be extended.
    pub fn new(policy: &'p ProjectionPolicy, graph: ProjectedGraph<Ty>) -> Self {
        debug!(
            source_index = policy.source_index(),
            target_index = policy.target_index(),
            merge = ?policy.merge_rule(),
            "starting edge projection"
        );
        Self {
            policy,
            graph,
            records_seen: 0,
            records_accepted: 0,
        }
    }

    /// Fold one record into the graph.
    ///
    /// Returns `Ok(true)` if the record was accepted, `Ok(false)` if the
    /// inclusion predicate rejected it (no mutation). A record too short for
    /// the configured field indices aborts the build with a schema error.
    pub fn push(&mut self, record: &[String]) -> Result<bool> {
        let record_index = self.records_seen;
        self.records_seen += 1;

        if record.len() <= self.policy.max_field_index() {
            // Name the first configured index the record cannot satisfy.
            let field_index = [
                Some(self.policy.source_index()),
                Some(self.policy.target_index()),
                self.policy.timestamp_filter().map(|f| f.field_index),
                self.policy.weight_index(),
            ]
            .into_iter()
            .flatten()
            .filter(|&index| index >= record.len())
            .min()
            .unwrap_or(self.policy.max_field_index());
            return Err(ProjectError::Schema {
                record_index,
                field_index,
                field_count: record.len(),
            });
        }

        if let Some(filter) = self.policy.timestamp_filter() {
            if !filter.includes(&record[filter.field_index]) {
                return Ok(false);
            }
        }

        let contribution = match self.policy.weight_index() {
            None => 1.0,
            Some(field_index) => {
                let value = record[field_index].trim();
                value.parse::<f64>().map_err(|_| ProjectError::WeightParse {
                    record_index,
                    field_index,
                    value: value.to_string(),
                })?
            }
        };

        let source = &record[self.policy.source_index()];
        let target = &record[self.policy.target_index()];
        let existing = self.graph.edge_slot(source, target);
        let slot = self.policy.merge_rule().apply(existing, contribution);
        self.graph.upsert_edge(source, target, slot);

        self.records_accepted += 1;
        Ok(true)
    }

    /// Finish the build, log a summary, and hand the graph back
    pub fn finish(self) -> ProjectedGraph<Ty> {
        info!(
            records = self.records_seen,
            accepted = self.records_accepted,
            rejected = self.records_seen - self.records_accepted,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "edge projection complete"
        );
        self.graph
    }
}

/// Project a record stream into a weighted simple graph.
///
/// Fail-fast: the first malformed record aborts the whole build, since a
/// record that cannot satisfy the policy's field indices usually signals
/// schema drift rather than an isolated bad line.
pub fn build_graph<Ty, I>(
    records: I,
    policy: &ProjectionPolicy,
    graph: ProjectedGraph<Ty>,
) -> Result<ProjectedGraph<Ty>>
where
    Ty: EdgeType,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut builder = GraphBuilder::new(policy, graph);
    for record in records {
        builder.push(&record)?;
    }
    Ok(builder.finish())
}
