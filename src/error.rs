use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// Header row lacks one of the required columns.
    #[error("input table has no `{column}` column")]
    MissingColumn { column: &'static str },

    /// Data row is shorter than the header and lacks a required field.
    #[error("line {line}: missing `{column}` field")]
    MissingField { line: u64, column: &'static str },

    #[error("line {line}: address `{value}` is not an integer literal")]
    InvalidAddress { line: u64, value: String },

    #[error("line {line}: max length `{value}` is not an integer literal")]
    InvalidMaxLength { line: u64, value: String },

    /// Malformed CSV (quoting, I/O inside the reader).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Input table is not UTF-8.
    #[error("input is not valid UTF-8 (looks like {guess}); save the table as UTF-8")]
    InputEncoding { guess: String },

    /// Text cannot be represented in the artifact encoding.
    #[error("line {line}: `{column}` contains {ch:?} (U+{code:04X}) which has no Shift_JIS-2004 mapping")]
    Unencodable {
        line: u64,
        column: &'static str,
        ch: char,
        code: u32,
    },

    #[error("rendered artifact is not representable in Shift_JIS-2004")]
    ArtifactEncoding,

    #[error("existing artifact is not valid Shift_JIS-2004")]
    ArtifactDecoding,

    #[error("run id {0} is out of range (must be below 100000000)")]
    InvalidRunId(u64),

    /// Strict mode refused to write because the lint pass reported issues.
    #[error("{0} lint issue(s) in the translation table")]
    Lint(usize),

    /// Check mode found the artifact missing or out of date.
    #[error("{path} is out of date; regenerate it")]
    Stale { path: PathBuf },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed {op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move generated file into '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
