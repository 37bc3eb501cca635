use csv::ReaderBuilder;
use std::io::Read;
use thiserror::Error;

use crate::domain::types::{Money, TransactionKind};

/// One requested deposit or withdrawal, tagged with the input line its
/// record starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub line: usize,
    pub kind: TransactionKind,
    pub amount: Money,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug)]
struct ColumnIndices {
    type_idx: usize,
    amount_idx: usize,
}

/// Streams [`Operation`]s out of a `type,amount` CSV. Amounts are in major
/// units (`12.50`).
pub struct CsvParser<R: Read> {
    reader: csv::Reader<R>,
    line_number: usize,
    columns: ColumnIndices,
}

impl<R: Read> std::fmt::Debug for CsvParser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvParser")
            .field("line_number", &self.line_number)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl<R: Read> CsvParser<R> {
    pub fn new(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| header_error(format!("Failed to read headers: {}", e)))?
            .clone();

        let columns = Self::extract_column_indices(&headers)?;

        Ok(CsvParser {
            reader: csv_reader,
            line_number: 1,
            columns,
        })
    }

    fn extract_column_indices(headers: &csv::StringRecord) -> Result<ColumnIndices, ParseError> {
        let find_col = |name: &str| -> Result<usize, ParseError> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| header_error(format!("Missing required column: '{}'", name)))
        };

        Ok(ColumnIndices {
            type_idx: find_col("type")?,
            amount_idx: find_col("amount")?,
        })
    }

    pub fn next_record(&mut self) -> Option<Result<Operation, ParseError>> {
        let mut record = csv::StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(true) => {
                // Quoted fields may span lines, so trust the reader's position.
                let line = record
                    .position()
                    .map_or(self.line_number + 1, |p| p.line() as usize);
                self.line_number = self.reader.position().line() as usize;
                Some(self.parse_record(&record, line))
            }
            Ok(false) => None,
            Err(e) => {
                let line = e
                    .position()
                    .map_or(self.line_number + 1, |p| p.line() as usize);
                self.line_number = line;
                Some(Err(ParseError {
                    line,
                    message: format!("CSV error: {}", e),
                }))
            }
        }
    }

    fn parse_record(&self, record: &csv::StringRecord, line: usize) -> Result<Operation, ParseError> {
        let kind_str = record.get(self.columns.type_idx).unwrap_or("").trim();
        let kind: TransactionKind = kind_str.parse().map_err(|_| ParseError {
            line,
            message: format!("Unknown transaction type: '{}'", kind_str),
        })?;

        let amount_str = record.get(self.columns.amount_idx).unwrap_or("").trim();
        if amount_str.is_empty() {
            return Err(ParseError {
                line,
                message: format!("{} requires an amount", kind),
            });
        }
        let amount: Money = amount_str.parse().map_err(|_| ParseError {
            line,
            message: format!("Invalid amount: '{}'", amount_str),
        })?;

        Ok(Operation { line, kind, amount })
    }
}

impl<R: Read> Iterator for CsvParser<R> {
    type Item = Result<Operation, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

fn header_error(message: String) -> ParseError {
    ParseError { line: 1, message }
}
