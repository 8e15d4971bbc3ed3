//! Flat text codec for whole ledgers.
//!
//! One product per line, six comma-separated fields:
//!
//! ```text
//! id,name,category,price,quantity,margin
//! ```
//!
//! No header and no quoting. Totals are not written; they are rebuilt from
//! the records on load. Because there is no escaping, a name or category
//! containing a comma or line break cannot be represented, and
//! [`Ledger::serialize`] refuses to write one.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use stockledger_core::{LedgerError, LedgerResult, ProductId};

use crate::ledger::Ledger;
use crate::record::Record;

pub const FIELD_DELIMITER: char = ',';

const FIELD_COUNT: usize = 6;

/// Why a single line could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected 6 fields, found {0}")]
    MissingFields(usize),

    #[error("{field}: invalid integer {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field}: invalid decimal {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// A line [`Ledger::deserialize`] could not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: usize,
    pub reason: String,
}

impl SkippedLine {
    fn new(line: usize, reason: impl ToString) -> Self {
        Self {
            line,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of [`Ledger::deserialize`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Lines that were decoded and applied (a later duplicate id counts too).
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Render one record as a line, without the trailing newline.
pub fn encode_record(record: &Record) -> String {
    format!(
        "{id}{d}{name}{d}{category}{d}{price}{d}{quantity}{d}{margin}",
        d = FIELD_DELIMITER,
        id = record.id,
        name = record.name,
        category = record.category,
        price = record.unit_price,
        quantity = record.quantity,
        margin = record.margin_percent,
    )
}

/// Parse one line (without its line terminator) into a record.
///
/// Text fields are kept verbatim; numeric fields may carry surrounding
/// whitespace. Anything after the sixth field is ignored.
pub fn decode_record(line: &str) -> Result<Record, FieldError> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT + 1, FIELD_DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(FieldError::MissingFields(fields.len()));
    }

    Ok(Record {
        id: parse_id(fields[0])?,
        name: fields[1].to_string(),
        category: fields[2].to_string(),
        unit_price: parse_decimal("price", fields[3])?,
        quantity: parse_integer("quantity", fields[4])?,
        margin_percent: parse_decimal("margin", fields[5])?,
    })
}

fn parse_id(raw: &str) -> Result<ProductId, FieldError> {
    raw.parse::<ProductId>()
        .map_err(|_| FieldError::InvalidInteger {
            field: "id",
            value: raw.to_string(),
        })
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, FieldError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FieldError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

/// Plain decimals, plus exponent notation (`1e+06`) as printed by tools that
/// format binary floats.
fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, FieldError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FieldError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}

fn check_text_field(id: ProductId, field: &'static str, value: &str) -> LedgerResult<()> {
    if value.contains([FIELD_DELIMITER, '\n', '\r']) {
        return Err(LedgerError::invalid_field(id, field));
    }
    Ok(())
}

impl Ledger {
    /// Fail with `InvalidField` if any record cannot be written losslessly.
    pub fn check_serializable(&self) -> LedgerResult<()> {
        for record in self.iter() {
            check_text_field(record.id, "name", &record.name)?;
            check_text_field(record.id, "category", &record.category)?;
        }
        Ok(())
    }

    /// Write every record, ascending by id, one line each.
    ///
    /// Nothing is written if any record fails [`Ledger::check_serializable`].
    pub fn serialize<W: Write>(&self, sink: &mut W) -> LedgerResult<()> {
        self.check_serializable()?;
        self.write_records(sink)
    }

    /// Callers must have run [`Ledger::check_serializable`] first.
    pub(crate) fn write_records<W: Write>(&self, sink: &mut W) -> LedgerResult<()> {
        for record in self.iter() {
            writeln!(sink, "{}", encode_record(record))?;
        }
        Ok(())
    }

    /// Replace the whole ledger with the records read from `source`.
    ///
    /// Malformed lines are logged, reported and skipped. Blank lines are
    /// ignored. The new contents are built aside and swapped in at the end,
    /// so an I/O error part-way through leaves the ledger as it was.
    pub fn deserialize<R: BufRead>(&mut self, mut source: R) -> LedgerResult<LoadReport> {
        let mut staged = Ledger::new();
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if source.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let outcome = match std::str::from_utf8(&buf) {
                Ok(text) => {
                    let text = text.trim_end_matches(['\n', '\r']);
                    if text.trim().is_empty() {
                        continue;
                    }
                    decode_record(text)
                }
                Err(_) => Err(FieldError::InvalidUtf8),
            };

            let applied = match outcome {
                Ok(record) => staged
                    .upsert(record)
                    .map_err(|e| SkippedLine::new(line_no, e)),
                Err(e) => Err(SkippedLine::new(line_no, e)),
            };

            match applied {
                Ok(_) => report.loaded += 1,
                Err(skipped) => {
                    warn!(line = line_no, reason = %skipped.reason, "skipping malformed inventory line");
                    report.skipped.push(skipped);
                }
            }
        }

        *self = staged;
        Ok(report)
    }
}
