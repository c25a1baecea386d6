//! edgegraph-io — delimited-file record sources for edgegraph-core
//!
//! The core pipeline consumes ordered sequences of field-lists; this crate
//! produces them from CSV/TSV files and bundles the common
//! open-file → policy → build path into one call:
//!
//! ```no_run
//! use edgegraph_io::{load, LoadOptions};
//!
//! let options = LoadOptions {
//!     timestamp_cutoff: Some((3, "2016-05-01".to_string())),
//!     ..LoadOptions::default()
//! };
//! let graph = load("reddit_edges.tsv", &options).unwrap();
//! println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());
//! ```

pub mod csv_source;
pub mod error;
pub mod loader;

pub use csv_source::CsvRecordSource;
pub use error::{IoError, Result};
pub use loader::{from_source, load, LoadOptions};
