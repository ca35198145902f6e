use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::{GenError, Result};

/// Numeric stamp spliced into the artifact so the runtime can tell which
/// generation of the table has been applied.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RunIdentifier(u32);

impl RunIdentifier {
    pub const MODULUS: u64 = 100_000_000;

    pub fn new(value: u64) -> Result<Self> {
        if value >= Self::MODULUS {
            return Err(GenError::InvalidRunId(value));
        }
        Ok(RunIdentifier(value as u32))
    }

    pub fn from_unix_secs(secs: u64) -> Self {
        RunIdentifier((secs % Self::MODULUS) as u32)
    }

    pub fn from_time(t: SystemTime) -> Self {
        let secs = t.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    pub fn now() -> Self {
        Self::from_time(SystemTime::now())
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RunIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
