use std::collections::HashMap;

use serde::Serialize;

use crate::model::row::TranslationRow;
use crate::parsers::table::parse_c_integer;
use crate::services::encoding;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct QaIssue {
    pub line: u64,
    pub address: String,
    pub code: String,
    pub message: String,
}

impl QaIssue {
    fn new(row: &TranslationRow, code: &str, message: String) -> Self {
        QaIssue {
            line: row.line,
            address: row.address.clone(),
            code: code.to_string(),
            message,
        }
    }
}

pub fn run(rows: &[TranslationRow]) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();
    let mut seen: HashMap<String, u64> = HashMap::new();

    for row in rows {
        // Written into a fixed-size field in game memory.
        for (column, text) in row.variants() {
            let len = encoding::encoded_len(text);
            if len > row.max_length as usize {
                issues.push(QaIssue::new(
                    row,
                    "EXCEEDS_MAX_LENGTH",
                    format!("{column} is {len} bytes, field holds {}", row.max_length),
                ));
            }
        }

        for (column, text) in [("Cantonese", &row.cantonese), ("English", &row.english)] {
            if text.is_empty() {
                issues.push(QaIssue::new(
                    row,
                    "EMPTY_TRANSLATION",
                    format!("{column} is empty"),
                ));
            }
        }

        // 0x10 and 16 are the same field.
        let key = normalize_address(&row.address);
        if let Some(first) = seen.get(&key) {
            issues.push(QaIssue::new(
                row,
                "DUPLICATE_ADDRESS",
                format!("address already used on line {first}"),
            ));
        } else {
            seen.insert(key, row.line);
        }
    }

    issues
}

fn normalize_address(address: &str) -> String {
    match parse_c_integer(address) {
        Some(v) => format!("{v:#x}"),
        None => address.to_lowercase(),
    }
}
