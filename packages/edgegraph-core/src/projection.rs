//! Projection policy: how raw records become simple-graph edges
//!
//! The input stream is conceptually a multigraph (duplicate, time-stamped
//! source→target records). A `ProjectionPolicy` captures everything needed to
//! collapse it into a simple graph: which fields hold the endpoints, which
//! records to include, and how duplicate edges merge.
//!
//! The policy is an immutable value object, validated eagerly at construction
//! so a misconfigured run fails before any record is touched.

use serde::{Deserialize, Serialize};

use crate::errors::{ProjectError, Result};
use crate::graph::EdgeSlot;

/// How duplicate records for the same (source, target) key combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeRule {
    /// Add each contribution to the running weight (the reference rule;
    /// with unit contributions the weight is the record count)
    Sum,
    /// Keep a running mean of the contributions seen so far
    Average,
    /// The latest record's contribution wins
    ReplaceLatest,
    /// The first record wins; later duplicates are rejected
    KeepFirst,
}

impl MergeRule {
    /// Fold one contribution into the (possibly absent) existing edge slot
    pub(crate) fn apply(self, existing: Option<EdgeSlot>, contribution: f64) -> EdgeSlot {
        match existing {
            None => EdgeSlot::single(contribution),
            Some(slot) => {
                let merged = slot.merged.saturating_add(1);
                let weight = match self {
                    MergeRule::Sum => slot.weight + contribution,
                    MergeRule::Average => {
                        (slot.weight * f64::from(slot.merged) + contribution) / f64::from(merged)
                    }
                    MergeRule::ReplaceLatest => contribution,
                    MergeRule::KeepFirst => slot.weight,
                };
                EdgeSlot { weight, merged }
            }
        }
    }
}

/// Timestamp-based inclusion predicate.
///
/// Timestamps are compared lexicographically as opaque strings, which is
/// correct for fixed-width sortable encodings such as `YYYY-MM-DD HH:MM:SS`
/// (a date-only cutoff prefix compares fine against full timestamps). No
/// parsing is attempted; a non-sortable encoding will silently misfilter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFilter {
    /// Field index holding the timestamp
    pub field_index: usize,
    /// Inclusive lower bound: records with timestamp >= cutoff are kept
    pub cutoff: String,
}

impl TimestampFilter {
    /// True if a record with this timestamp should be included
    pub fn includes(&self, timestamp: &str) -> bool {
        timestamp >= self.cutoff.as_str()
    }
}

/// Immutable per-run projection configuration
///
/// Shared read-only across all record applications. Construct with
/// [`ProjectionPolicy::new`] and the `with_*` builders:
///
/// ```
/// use edgegraph_core::{MergeRule, ProjectionPolicy};
///
/// let policy = ProjectionPolicy::new(0, 1)
///     .and_then(|p| p.with_timestamp_filter(3, "2016-05-01"))
///     .map(|p| p.with_merge(MergeRule::Sum))
///     .unwrap();
/// assert_eq!(policy.merge_rule(), MergeRule::Sum);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPolicy {
    source_index: usize,
    target_index: usize,
    timestamp_filter: Option<TimestampFilter>,
    weight_index: Option<usize>,
    merge: MergeRule,
}

impl ProjectionPolicy {
    /// Create a policy mapping the given field indices to edge endpoints.
    ///
    /// Defaults: no timestamp filter, unit contributions, `MergeRule::Sum`.
    pub fn new(source_index: usize, target_index: usize) -> Result<Self> {
        if source_index == target_index {
            return Err(ProjectError::config(format!(
                "source and target cannot share field index {source_index}"
            )));
        }
        Ok(Self {
            source_index,
            target_index,
            timestamp_filter: None,
            weight_index: None,
            merge: MergeRule::Sum,
        })
    }

    /// Keep only records whose timestamp field is >= `cutoff` (lexicographic)
    pub fn with_timestamp_filter(mut self, field_index: usize, cutoff: impl Into<String>) -> Result<Self> {
        let cutoff = cutoff.into();
        if cutoff.is_empty() {
            return Err(ProjectError::config("timestamp cutoff cannot be empty"));
        }
        if field_index == self.source_index || field_index == self.target_index {
            return Err(ProjectError::config(format!(
                "timestamp field index {field_index} collides with an endpoint index"
            )));
        }
        self.timestamp_filter = Some(TimestampFilter { field_index, cutoff });
        Ok(self)
    }

    /// Take each record's contribution from a numeric weight field instead of
    /// the default unit contribution
    pub fn with_weight_field(mut self, field_index: usize) -> Result<Self> {
        if field_index == self.source_index || field_index == self.target_index {
            return Err(ProjectError::config(format!(
                "weight field index {field_index} collides with an endpoint index"
            )));
        }
        self.weight_index = Some(field_index);
        Ok(self)
    }

    /// Set the duplicate-edge merge rule
    pub fn with_merge(mut self, merge: MergeRule) -> Self {
        self.merge = merge;
        self
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn timestamp_filter(&self) -> Option<&TimestampFilter> {
        self.timestamp_filter.as_ref()
    }

    pub fn weight_index(&self) -> Option<usize> {
        self.weight_index
    }

    pub fn merge_rule(&self) -> MergeRule {
        self.merge
    }

    /// Largest field index this policy reads; records must be at least one
    /// field longer than this
    pub fn max_field_index(&self) -> usize {
        let mut max = self.source_index.max(self.target_index);
        if let Some(filter) = &self.timestamp_filter {
            max = max.max(filter.field_index);
        }
        if let Some(weight_index) = self.weight_index {
            max = max.max(weight_index);
        }
        max
    }
}
