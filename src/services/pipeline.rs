use std::fs;
use std::io;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::Config;
use crate::error::{GenError, Result};
use crate::model::row::EmissionForm;
use crate::model::run_id::RunIdentifier;
use crate::parsers::table;
use crate::services::{artifact, emit, encoding, qa};

#[derive(Debug, Serialize)]
pub struct CompileReport {
    pub input: String,
    pub output: String,
    pub run_id: RunIdentifier,
    pub emitted: usize,
    pub translated: usize,
    pub customized: usize,
    pub skipped_comments: usize,
    pub issues: Vec<qa::QaIssue>,
    pub bytes: usize,
    pub sha256: String,
    /// False for dry runs and checks.
    pub written: bool,
}

impl CompileReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn compile(cfg: &Config) -> Result<CompileReport> {
    let input = cfg.input_path();
    let output = cfg.output_path();
    info!("reading {}", input.display());

    let raw = fs::read(&input).map_err(|e| GenError::io("reading", &input, e))?;
    let table = table::parse_bytes(&raw)?;

    for row in &table.rows {
        encoding::check_encodable(row)?;
    }

    let issues = qa::run(&table.rows);
    for issue in &issues {
        warn!("line {} ({}): {}: {}", issue.line, issue.address, issue.code, issue.message);
    }
    if cfg.strict && !issues.is_empty() {
        return Err(GenError::Lint(issues.len()));
    }

    // Check mode reuses the stamped id so an unchanged table compares equal.
    let existing = if cfg.check {
        match fs::read(&output) {
            Ok(b) => Some(b),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GenError::Stale { path: output });
            }
            Err(e) => return Err(GenError::io("reading", &output, e)),
        }
    } else {
        None
    };

    let run_id = match (cfg.run_id, existing.as_deref()) {
        (Some(v), _) => RunIdentifier::new(v)?,
        (None, Some(old)) => artifact::read_run_id(old).ok_or_else(|| GenError::Stale {
            path: output.clone(),
        })?,
        (None, None) => RunIdentifier::now(),
    };
    debug!("run id {run_id}");

    let text = emit::render(&emit::Artifact {
        disk: cfg.disk,
        run_id,
        rows: &table.rows,
    });
    let bytes = encoding::encode_artifact(&text)?;
    let sha256 = artifact::digest(&bytes);

    let mut written = false;
    if let Some(old) = existing {
        if old != bytes {
            return Err(GenError::Stale { path: output });
        }
        info!("{} is up to date", output.display());
    } else if cfg.dry_run {
        info!("dry run, not writing {}", output.display());
    } else {
        artifact::write_atomic(&output, &bytes)?;
        written = true;
    }

    let customized = table
        .rows
        .iter()
        .filter(|r| r.form() == EmissionForm::Customize)
        .count();

    let report = CompileReport {
        input: input.display().to_string(),
        output: output.display().to_string(),
        run_id,
        emitted: table.rows.len(),
        translated: table.rows.len() - customized,
        customized,
        skipped_comments: table.skipped_comments,
        issues,
        bytes: bytes.len(),
        sha256,
        written,
    };

    info!(
        "{} entries ({} customized, {} comments skipped), lang_patch_id {}",
        report.emitted, report.customized, report.skipped_comments, report.run_id
    );

    Ok(report)
}
