// File-to-graph loading through the whole stack: tempfile on disk → CSV
// tokenizer → projection policy → weighted simple graph.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use edgegraph_core::{cut_edges, largest_component, CutPolicy, ProjectError};
use edgegraph_io::{load, IoError, LoadOptions};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_tsv_with_header() {
    let file = write_temp(
        "SOURCE_SUBREDDIT\tTARGET_SUBREDDIT\tPOST_ID\tTIMESTAMP\n\
         askreddit\tpics\tp1\t2016-06-01 10:00:00\n\
         askreddit\tpics\tp2\t2016-06-02 11:00:00\n\
         askreddit\tfunny\tp3\t2016-07-01 09:30:00\n\
         oldsub\tpics\tp4\t2014-01-01 00:00:00\n",
    );
    let options = LoadOptions {
        timestamp_cutoff: Some((3, "2016-05-01".to_string())),
        ..LoadOptions::default()
    };
    let graph = load(file.path(), &options).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight("askreddit", "pics"), Some(2.0));
    assert_eq!(graph.edge_weight("askreddit", "funny"), Some(1.0));
    assert!(!graph.contains_vertex("oldsub"));
}

#[test]
fn test_load_then_prune_then_extract() {
    let file = write_temp(
        "a\tb\t2016-06-01\n\
         a\tb\t2016-06-02\n\
         a\tb\t2016-06-03\n\
         b\tc\t2016-06-04\n\
         x\ty\t2016-06-05\n",
    );
    let options = LoadOptions {
        has_headers: false,
        timestamp_cutoff: Some((2, "2016-01-01".to_string())),
        ..LoadOptions::default()
    };
    let graph = load(file.path(), &options).unwrap();
    assert_eq!(graph.edge_count(), 3);

    // Cut singleton edges, drop isolates, take the biggest surviving piece.
    let pruned = cut_edges(&graph, 1.0, CutPolicy::SmallerThanInclusive, true).unwrap();
    let core = largest_component(&pruned);

    assert_eq!(core.vertex_count(), 2);
    assert_eq!(core.edge_weight("a", "b"), Some(3.0));
}

#[test]
fn test_schema_error_reports_data_row_ordinal() {
    // The header row is not counted: the bad row is data record 1.
    let file = write_temp(
        "source\ttarget\tts\n\
         a\tb\t2016-06-01\n\
         truncated\n",
    );
    let options = LoadOptions {
        timestamp_cutoff: Some((2, "2016-01-01".to_string())),
        ..LoadOptions::default()
    };
    let err = load(file.path(), &options).unwrap_err();

    match err {
        IoError::Project(ProjectError::Schema { record_index, field_count, .. }) => {
            assert_eq!(record_index, 1);
            assert_eq!(field_count, 1);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load("/definitely/not/here.tsv", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}
