//! Raw tabular rows.
//!
//! Upstream sources disagree on header casing, padding, and even BOM
//! prefixes, so all field lookups go through one normalization function.
//! A `RawRow` keeps its fields in source order, which matters for wide-form
//! tables where year columns should normalize in ascending header order.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::EngineError;

/// One row of a source table: named string fields, in source column order.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .push((normalize_field_name(&name.into()), value.into()));
    }

    /// Look up a field by name (case/whitespace/BOM-insensitive).
    ///
    /// Empty cells read as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        let wanted = normalize_field_name(name);
        self.fields
            .iter()
            .find(|(n, _)| *n == wanted)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// All fields as `(normalized_name, value)` pairs, in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Build a row from one CSV record plus its headers.
pub fn row_from_record(headers: &StringRecord, record: &StringRecord) -> RawRow {
    let mut row = RawRow::new();
    for (idx, name) in headers.iter().enumerate() {
        let value = record.get(idx).unwrap_or("");
        row.push(name, value);
    }
    row
}

fn normalize_field_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on
    // the first header (e.g. "﻿Country Name"). If we don't strip it, field
    // lookups on the first column silently fail.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

/// A problem with one row of the source table.
///
/// Row-level problems never abort the load; they are collected so callers can
/// report how dirty the source was.
#[derive(Debug, Clone)]
pub struct RowIssue {
    /// 1-based line number in the source file (header is line 1).
    pub line: usize,
    pub message: String,
}

/// Output of reading a raw source table.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    pub issues: Vec<RowIssue>,
    pub rows_read: usize,
}

/// Read a CSV file into raw rows.
///
/// Only failures that make the whole table unreadable (missing file, broken
/// headers) are hard errors; malformed individual records become `RowIssue`s.
pub fn read_raw_table(path: impl AsRef<Path>) -> Result<RawTable, EngineError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| EngineError::new(format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| EngineError::new(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let mut table = RawTable::default();

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        table.rows_read += 1;

        match result {
            Ok(record) => table.rows.push(row_from_record(&headers, &record)),
            Err(e) => table.issues.push(RowIssue {
                line,
                message: format!("CSV parse error: {e}"),
            }),
        }
    }

    Ok(table)
}
