use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use regex::Regex;

use crate::error::{GenError, Result};
use crate::model::row::{is_comment_address, TranslationRow};
use crate::services::encoding;

pub const COL_ADDRESS: &str = "Address";
pub const COL_MAX_LENGTH: &str = "MaxLength";
pub const COL_ORIGINAL: &str = "Original";
pub const COL_CANTONESE: &str = "Cantonese";
pub const COL_ENGLISH: &str = "English";
pub const COL_PATCHED_JAPANESE: &str = "Patched Japanese";

pub const COLUMNS: [&str; 6] = [
    COL_ADDRESS,
    COL_MAX_LENGTH,
    COL_ORIGINAL,
    COL_CANTONESE,
    COL_ENGLISH,
    COL_PATCHED_JAPANESE,
];

static INT_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[xX](?P<hex>[0-9A-Fa-f]+)|(?P<oct>0[0-7]*)|(?P<dec>[1-9][0-9]*))$").unwrap()
});

/// Value of a C integer literal (hex, octal or decimal, no suffix).
pub fn parse_c_integer(text: &str) -> Option<u64> {
    let caps = INT_LITERAL_RE.captures(text)?;
    if let Some(hex) = caps.name("hex") {
        u64::from_str_radix(hex.as_str(), 16).ok()
    } else if let Some(oct) = caps.name("oct") {
        u64::from_str_radix(oct.as_str(), 8).ok()
    } else {
        caps.name("dec")?.as_str().parse().ok()
    }
}

#[derive(Debug, Default)]
pub struct Table {
    /// Data rows in input order; comment rows are not kept.
    pub rows: Vec<TranslationRow>,
    pub skipped_comments: usize,
}

/// Header position of every required column.
struct ColumnIndex([usize; 6]);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut idx = [0usize; 6];
        for (slot, column) in idx.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == column)
                .ok_or(GenError::MissingColumn { column })?;
        }
        Ok(ColumnIndex(idx))
    }

    fn field<'r>(&self, record: &'r StringRecord, col: usize, line: u64) -> Result<&'r str> {
        record.get(self.0[col]).ok_or(GenError::MissingField {
            line,
            column: COLUMNS[col],
        })
    }
}

pub fn parse_bytes(bytes: &[u8]) -> Result<Table> {
    let text = encoding::decode_input(bytes)?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    let mut table = Table::default();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Annotation rows may be arbitrarily short; look at nothing else.
        let address = columns.field(&record, 0, line)?;
        if is_comment_address(address) {
            debug!("line {line}: skipping comment row {address}");
            table.skipped_comments += 1;
            continue;
        }

        table.rows.push(parse_row(&columns, &record, line)?);
    }

    Ok(table)
}

fn parse_row(columns: &ColumnIndex, record: &StringRecord, line: u64) -> Result<TranslationRow> {
    let address = columns.field(record, 0, line)?.trim();
    if parse_c_integer(address).is_none() {
        return Err(GenError::InvalidAddress {
            line,
            value: address.to_string(),
        });
    }

    let max_length_text = columns.field(record, 1, line)?.trim();
    let max_length = parse_c_integer(max_length_text)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| GenError::InvalidMaxLength {
            line,
            value: max_length_text.to_string(),
        })?;

    // A row may stop before the trailing, usually empty, column.
    let patched = record.get(columns.0[5]).unwrap_or_default();

    Ok(TranslationRow {
        line,
        address: address.to_string(),
        max_length,
        max_length_text: max_length_text.to_string(),
        original: columns.field(record, 2, line)?.to_string(),
        cantonese: columns.field(record, 3, line)?.to_string(),
        english: columns.field(record, 4, line)?.to_string(),
        patched_japanese: if patched.is_empty() {
            None
        } else {
            Some(patched.to_string())
        },
    })
}
