// Property-based tests for the projection invariants: simple-graph shape,
// histogram conservation and boundary handling, cut monotonicity, isolate
// pruning.

use proptest::prelude::*;

use edgegraph_core::{
    build_graph, cut_edges, weight_histogram, CutPolicy, DirectedGraph, ProjectionPolicy,
};

/// Random endpoint label from a small alphabet so duplicates are common
fn label_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]).prop_map(str::to_string)
}

fn pair_strategy() -> impl Strategy<Value = (String, String)> {
    (label_strategy(), label_strategy()).prop_filter("no self-loops", |(s, t)| s != t)
}

fn weighted_records_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec((pair_strategy(), 1u32..=100), 1..64).prop_map(|entries| {
        entries
            .into_iter()
            .map(|((source, target), weight)| vec![source, target, weight.to_string()])
            .collect()
    })
}

fn weighted_graph(records: Vec<Vec<String>>) -> DirectedGraph {
    let policy = ProjectionPolicy::new(0, 1)
        .unwrap()
        .with_weight_field(2)
        .unwrap();
    build_graph(records, &policy, DirectedGraph::new()).unwrap()
}

proptest! {
    #[test]
    fn prop_simple_graph_invariant(records in weighted_records_strategy()) {
        let distinct_pairs = records
            .iter()
            .map(|r| (r[0].clone(), r[1].clone()))
            .collect::<std::collections::HashSet<_>>();
        let graph = weighted_graph(records);
        // One edge per ordered pair no matter how many duplicates came in.
        prop_assert_eq!(graph.edge_count(), distinct_pairs.len());
    }

    #[test]
    fn prop_histogram_conserves_samples(
        records in weighted_records_strategy(),
        bin_count in 1usize..=16,
    ) {
        let graph = weighted_graph(records);
        let histogram = weight_histogram(&graph, bin_count).unwrap();
        prop_assert_eq!(histogram.total(), graph.edge_count() as u64);
        prop_assert_eq!(histogram.bin_edges().len(), bin_count + 1);
    }

    #[test]
    fn prop_histogram_max_weight_in_last_bin(
        records in weighted_records_strategy(),
        bin_count in 1usize..=16,
    ) {
        let graph = weighted_graph(records);
        let max_weight = graph
            .edges()
            .map(|(_, _, w)| w)
            .fold(f64::NEG_INFINITY, f64::max);
        let histogram = weight_histogram(&graph, bin_count).unwrap();

        prop_assert_eq!(*histogram.bin_edges().last().unwrap(), max_weight);
        prop_assert!(*histogram.counts().last().unwrap() >= 1);
    }

    #[test]
    fn prop_cut_monotonicity(
        records in weighted_records_strategy(),
        low in 0.0f64..100.0,
        delta in 0.0f64..100.0,
    ) {
        let graph = weighted_graph(records);
        let high = low + delta;
        let strict = cut_edges(&graph, low, CutPolicy::LargerThanExclusive, false).unwrap();
        let loose = cut_edges(&graph, high, CutPolicy::LargerThanExclusive, false).unwrap();

        // A lower threshold cuts more: survivors at `low` ⊆ survivors at `high`.
        for (source, target, weight) in strict.edges() {
            prop_assert_eq!(loose.edge_weight(source, target), Some(weight));
        }
    }

    #[test]
    fn prop_isolate_pruning(
        records in weighted_records_strategy(),
        threshold in 0.0f64..100.0,
    ) {
        let graph = weighted_graph(records);

        let pruned = cut_edges(&graph, threshold, CutPolicy::SmallerThanInclusive, true).unwrap();
        for label in pruned.vertices() {
            prop_assert!(pruned.degree(label).unwrap() >= 1);
        }

        let kept = cut_edges(&graph, threshold, CutPolicy::SmallerThanInclusive, false).unwrap();
        prop_assert_eq!(kept.vertex_count(), graph.vertex_count());
    }
}
