//! Line-delimited JSON dump reading.
//!
//! Every dump line is one JSON object. Lines are parsed into a typed raw record
//! ([`records`]) and converted into the domain type, so malformed JSON and
//! missing required fields surface with the file name and line number.

pub mod records;

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, StaticStoreError};

pub use records::{DumpGroup, DumpRegion, DumpType};

/// Location of a dump line, used for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    pub source_name: &'a str,
    pub line: usize,
}

impl LineRef<'_> {
    pub fn missing(&self, field: &'static str) -> StaticStoreError {
        StaticStoreError::MissingField {
            field,
            source_name: self.source_name.to_string(),
            line: self.line,
        }
    }
}

/// A raw dump line that converts into a domain record.
pub trait DumpRecord: DeserializeOwned {
    type Record;

    fn into_record(self, at: LineRef<'_>) -> Result<Self::Record>;
}

/// Streams the records of a dump, one line at a time.
pub struct DumpReader<R, T> {
    lines: Lines<R>,
    source_name: String,
    line: usize,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DumpRecord> DumpReader<R, T> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            source_name: source_name.into(),
            line: 0,
            _record: PhantomData,
        }
    }
}

impl<T: DumpRecord> DumpReader<BufReader<File>, T> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| StaticStoreError::file(path, e))?;
        debug!("Opened dump {}", path.display());
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead, T: DumpRecord> Iterator for DumpReader<R, T> {
    type Item = Result<T::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.lines.next()?;
            self.line += 1;
            let text = match next {
                Ok(text) => text,
                Err(source) => {
                    return Some(Err(StaticStoreError::LineRead {
                        source_name: self.source_name.clone(),
                        line: self.line,
                        source,
                    }))
                }
            };
            if text.trim().is_empty() {
                continue;
            }

            let at = LineRef {
                source_name: &self.source_name,
                line: self.line,
            };
            let raw: T = match serde_json::from_str(&text) {
                Ok(raw) => raw,
                Err(source) => {
                    return Some(Err(StaticStoreError::MalformedLine {
                        source_name: self.source_name.clone(),
                        line: self.line,
                        source,
                    }))
                }
            };
            return Some(raw.into_record(at));
        }
    }
}

/// Reads a whole JSON document (icon-alt mapping, group catalog) from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| StaticStoreError::file(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StaticStoreError::JsonFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IconAltMapping, TypeRecord};
    use std::io::Cursor;

    fn read_types(input: &str) -> Result<Vec<TypeRecord>> {
        DumpReader::<_, DumpType>::new(Cursor::new(input), "types.jsonl").collect()
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n{\"_key\": 34, \"name\": {\"en\": \"Tritanium\"}}\n\n{\"_key\": 35, \"name\": {\"en\": \"Pyerite\"}}\n";
        let types = read_types(input).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[1].name, "Pyerite");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "{\"_key\": 34, \"name\": {\"en\": \"Tritanium\"}}\n{\"_key\": 35,\n";
        match read_types(input).unwrap_err() {
            StaticStoreError::MalformedLine { source_name, line, .. } => {
                assert_eq!(source_name, "types.jsonl");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let input = "{\"_key\": 34, \"name\": {\"de\": \"Tritanium\"}}\n";
        match read_types(input).unwrap_err() {
            StaticStoreError::MissingField { field, line, .. } => {
                assert_eq!(field, "name.en");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let input: &[u8] = b"{\"_key\": 34, \"name\": {\"en\": \"Tritanium\"}}\n{\"_key\": 35, \"name\": {\"en\": \"\xff\"}}\n";
        let result: Result<Vec<TypeRecord>> =
            DumpReader::<_, DumpType>::new(Cursor::new(input), "types.jsonl").collect();

        match result.unwrap_err() {
            StaticStoreError::LineRead { source_name, line, .. } => {
                assert_eq!(source_name, "types.jsonl");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_json_file::<IconAltMapping>(&path).unwrap_err();
        match &err {
            StaticStoreError::JsonFile { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("icons.json"));
    }

    #[test]
    fn test_open_missing_file_names_path() {
        let err = DumpReader::<_, DumpType>::open(Path::new("/nonexistent/types.jsonl"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("/nonexistent/types.jsonl"));
    }
}
