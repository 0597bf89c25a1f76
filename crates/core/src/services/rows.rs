use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::model::{
    ClassKind, Record, CLASS_TAG, CONSTANT_TAG, FUNCTION_TAG, INTERFACE_TAG, VARIABLE_TAG,
};

/// Row layout written for each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowFormat {
    /// Structured rows for classes, methods and members.
    #[default]
    Full,
    /// Flat `kind,name,value` rows: interfaces listed separately after classes,
    /// no trait or member rows.
    Legacy,
}

impl RowFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowFormat::Full => "full",
            RowFormat::Legacy => "legacy",
        }
    }
}

impl fmt::Display for RowFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(RowFormat::Full),
            "legacy" => Ok(RowFormat::Legacy),
            other => Err(format!("Unknown row format '{other}' (expected full or legacy)")),
        }
    }
}

/// Shape a record stream into rows of the chosen format.
pub fn rows<I>(records: I, format: RowFormat) -> Rows<I>
where
    I: Iterator<Item = ExportResult<Record>>,
{
    match format {
        RowFormat::Full => Rows::Full(records),
        RowFormat::Legacy => Rows::Legacy(LegacyRows::new(records)),
    }
}

/// Row iterator for either format.
pub enum Rows<I> {
    Full(I),
    Legacy(LegacyRows<I>),
}

impl<I> Iterator for Rows<I>
where
    I: Iterator<Item = ExportResult<Record>>,
{
    type Item = ExportResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Rows::Full(records) => records.next().map(|r| r.and_then(|record| record.fields())),
            Rows::Legacy(rows) => rows.next(),
        }
    }
}

/// Legacy row shaping.
///
/// Interface rows are held back and released in one block once the class
/// group is over, matching the old layout of classes first, then interfaces.
pub struct LegacyRows<I> {
    records: I,
    interfaces: VecDeque<Vec<String>>,
    held: Option<Vec<String>>,
    releasing: bool,
}

impl<I> LegacyRows<I> {
    pub fn new(records: I) -> Self {
        Self { records, interfaces: VecDeque::new(), held: None, releasing: false }
    }
}

fn legacy_row(tag: &str, name: &str, value: String) -> Vec<String> {
    vec![tag.to_string(), name.to_string(), value]
}

impl<I> Iterator for LegacyRows<I>
where
    I: Iterator<Item = ExportResult<Record>>,
{
    type Item = ExportResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.releasing {
                if let Some(row) = self.interfaces.pop_front() {
                    return Some(Ok(row));
                }
                if let Some(row) = self.held.take() {
                    return Some(Ok(row));
                }
            }

            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(err)) => return Some(Err(err)),
                None if self.interfaces.is_empty() => return None,
                None => {
                    self.releasing = true;
                    continue;
                }
            };

            let row = match record {
                Record::Function(f) => {
                    return Some(Ok(legacy_row(FUNCTION_TAG, &f.name, String::new())));
                }
                Record::Class(c) if c.kind == ClassKind::Interface => {
                    self.interfaces.push_back(legacy_row(INTERFACE_TAG, &c.name, String::new()));
                    continue;
                }
                Record::Class(c) if c.kind == ClassKind::Trait => continue,
                Record::Class(c) => return Some(Ok(legacy_row(CLASS_TAG, &c.name, String::new()))),
                Record::Method(_) | Record::Property(_) => continue,
                Record::Variable(v) => legacy_row(VARIABLE_TAG, &v.name, String::new()),
                Record::Constant(c) => match c.value.to_field() {
                    Ok(value) => legacy_row(CONSTANT_TAG, &c.name, value),
                    Err(err) => return Some(Err(err)),
                },
            };

            // First row past the class group: interfaces go out ahead of it.
            if !self.interfaces.is_empty() {
                self.releasing = true;
                self.held = Some(row);
                continue;
            }
            return Some(Ok(row));
        }
    }
}
