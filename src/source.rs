use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::SeedError;

pub const COMPANY: &str = "Company";
pub const VALUATION: &str = "Valuation ($B)";
pub const DATE_JOINED: &str = "Date Joined";
pub const COUNTRY: &str = "Country";
pub const CITY: &str = "City";
pub const INDUSTRY: &str = "Industry";
pub const SELECT_INVESTORS: &str = "Select Investors";

/// Header columns every unicorns export must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COMPANY,
    VALUATION,
    DATE_JOINED,
    COUNTRY,
    CITY,
    INDUSTRY,
    SELECT_INVESTORS,
];

/// One data row keyed by header name, as read from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based line in the source file.
    pub line: u64,
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(line: u64, fields: HashMap<String, String>) -> Self {
        RawRecord { line, fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Streams a headered CSV file as [`RawRecord`]s in file order.
///
/// Cells are trimmed. A row whose field count differs from the header is an
/// error, as is a header missing any of [`REQUIRED_COLUMNS`].
pub struct CsvSource<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl CsvSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .map_err(|e| SeedError::SourceRead(format!("{}: {}", path.display(), e)))?;
        Self::with_reader(reader)
    }
}

impl<R: io::Read> CsvSource<R> {
    pub fn from_reader(rdr: R) -> Result<Self, SeedError> {
        let reader = ReaderBuilder::new().trim(Trim::All).from_reader(rdr);
        Self::with_reader(reader)
    }

    fn with_reader(mut reader: csv::Reader<R>) -> Result<Self, SeedError> {
        let headers = reader.headers()?.clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(SeedError::SourceRead(format!(
                "header is missing required column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(CsvSource { reader, headers })
    }

    /// Drains the source, stopping at the first malformed row.
    pub fn read_all(self) -> Result<Vec<RawRecord>, SeedError> {
        self.collect()
    }
}

impl<R: io::Read> Iterator for CsvSource<R> {
    type Item = Result<RawRecord, SeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                let fields = self
                    .headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, value)| (header.to_string(), value.to_string()))
                    .collect();
                Some(Ok(RawRecord::new(line, fields)))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
