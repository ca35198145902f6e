use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{GenError, Result};
use crate::model::run_id::RunIdentifier;
use crate::services::encoding;

static RUN_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"symbols\[":lang_patch_id"\] = (\d+);"#).unwrap());

/// Replace `path` with `bytes` without ever exposing a partial file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| GenError::io("creating", dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GenError::io("creating temp file in", dir, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| GenError::io("writing", tmp.path().to_path_buf(), e))?;

    tmp.persist(path).map_err(|e| GenError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Run identifier stamped into a previously generated artifact.
pub fn read_run_id(bytes: &[u8]) -> Option<RunIdentifier> {
    let text = encoding::decode_artifact(bytes).ok()?;
    let caps = RUN_ID_RE.captures(&text)?;
    let value = caps.get(1)?.as_str().parse::<u64>().ok()?;
    RunIdentifier::new(value).ok()
}

pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
