//! One-call edge-file loading
//!
//! Convenience front door for the common case: open a delimited edge file,
//! build a projection policy from a flat options struct, and run the core
//! builder over it. Anything more exotic can drive
//! [`CsvRecordSource`] + `edgegraph_core::GraphBuilder` directly.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use edgegraph_core::{
    DirectedGraph, GraphBuilder, MergeRule, ProjectedGraph, ProjectionPolicy,
};
use petgraph::EdgeType;

use crate::csv_source::CsvRecordSource;
use crate::error::Result;

/// Flat configuration for [`load`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field delimiter; defaults to tab
    pub delimiter: u8,
    /// Whether the file starts with a header row (skipped before projection)
    pub has_headers: bool,
    /// Field index of the edge source
    pub source_index: usize,
    /// Field index of the edge target
    pub target_index: usize,
    /// Optional numeric weight field; unit contributions when absent
    pub weight_index: Option<usize>,
    /// Optional timestamp filter: (field index, inclusive lexicographic cutoff)
    pub timestamp_cutoff: Option<(usize, String)>,
    /// Duplicate-edge merge rule
    pub merge: MergeRule,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            has_headers: true,
            source_index: 0,
            target_index: 1,
            weight_index: None,
            timestamp_cutoff: None,
            merge: MergeRule::Sum,
        }
    }
}

impl LoadOptions {
    /// Build the projection policy these options describe.
    ///
    /// Validation is eager, so a bad configuration fails here, before the
    /// file is read.
    pub fn policy(&self) -> Result<ProjectionPolicy> {
        let mut policy = ProjectionPolicy::new(self.source_index, self.target_index)?;
        if let Some((field_index, cutoff)) = &self.timestamp_cutoff {
            policy = policy.with_timestamp_filter(*field_index, cutoff.clone())?;
        }
        if let Some(weight_index) = self.weight_index {
            policy = policy.with_weight_field(weight_index)?;
        }
        Ok(policy.with_merge(self.merge))
    }
}

/// Fold every record of a source into the given graph.
///
/// Streams: one record is in memory at a time. The first tokenizer or
/// projection error aborts the load.
pub fn from_source<R, Ty>(
    source: CsvRecordSource<R>,
    policy: &ProjectionPolicy,
    graph: ProjectedGraph<Ty>,
) -> Result<ProjectedGraph<Ty>>
where
    R: Read,
    Ty: EdgeType,
{
    let mut builder = GraphBuilder::new(policy, graph);
    for record in source {
        builder.push(&record?)?;
    }
    Ok(builder.finish())
}

/// Load a delimited edge file into a directed weighted simple graph
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DirectedGraph> {
    let path = path.as_ref();
    let policy = options.policy()?;
    info!(path = %path.display(), "loading edge list");
    let source = CsvRecordSource::from_path(path, options.delimiter, options.has_headers)?;
    from_source(source, &policy, DirectedGraph::new())
}
