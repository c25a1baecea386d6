//! CSV/TSV-backed record source
//!
//! Wraps a `csv::Reader` into the lazy field-list sequence the core builder
//! consumes: one `Vec<String>` per data row, header row (if any) swallowed
//! here so it never reaches the projection. Single pass; restart by
//! reopening the underlying reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;

/// Lazy record source over a delimited byte stream.
///
/// The reader is configured `flexible`, so rows with uneven field counts are
/// handed through as-is; deciding whether a short row is an error is the
/// projection policy's call (it reports the record ordinal and missing
/// index), not the tokenizer's.
pub struct CsvRecordSource<R: Read> {
    headers: Option<Vec<String>>,
    records: csv::StringRecordsIntoIter<R>,
}

impl CsvRecordSource<File> {
    /// Open a delimited file as a record source
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8, has_headers: bool) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), delimiter, has_headers, "opening edge file");
        let file = File::open(path)?;
        Self::new(file, delimiter, has_headers)
    }
}

impl<R: Read> CsvRecordSource<R> {
    /// Wrap any reader as a record source
    pub fn new(reader: R, delimiter: u8, has_headers: bool) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(reader);
        let headers = if has_headers {
            Some(csv_reader.headers()?.iter().map(String::from).collect())
        } else {
            None
        };
        Ok(Self {
            headers,
            records: csv_reader.into_records(),
        })
    }

    /// Column names from the header row, if the source had one
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

impl<R: Read> Iterator for CsvRecordSource<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|result| {
            result
                .map(|record| record.iter().map(String::from).collect())
                .map_err(Into::into)
        })
    }
}
