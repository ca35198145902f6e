use std::path::{Path, PathBuf};

use crate::services::emit::DEFAULT_DISK;

pub const DEFAULT_INPUT: &str = "translation.csv";
pub const DEFAULT_OUTPUT: &str = "../core/gdxsv/gdxsv_translation_patch.inc";

/// What a single generator run reads, writes and how.
#[derive(Debug, Clone)]
pub struct Config {
    /// Relative `input`/`output` paths are resolved against this directory.
    pub base_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub disk: u8,
    /// Pinned run identifier; the wall clock is used when unset.
    pub run_id: Option<u64>,
    /// Fail on lint issues instead of warning.
    pub strict: bool,
    /// Compare against the existing artifact instead of writing.
    pub check: bool,
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            disk: DEFAULT_DISK,
            run_id: None,
            strict: false,
            check: false,
            dry_run: false,
        }
    }
}

fn resolve(base: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

impl Config {
    pub fn input_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_against_base_dir() {
        let cfg = Config {
            base_dir: PathBuf::from("/src/gdxsv_langmod"),
            ..Config::default()
        };
        assert_eq!(cfg.input_path(), Path::new("/src/gdxsv_langmod/translation.csv"));
        assert_eq!(
            cfg.output_path(),
            Path::new("/src/gdxsv_langmod/../core/gdxsv/gdxsv_translation_patch.inc")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let cfg = Config {
            base_dir: PathBuf::from("/somewhere"),
            output: PathBuf::from("/tmp/out.inc"),
            ..Config::default()
        };
        assert_eq!(cfg.output_path(), Path::new("/tmp/out.inc"));
    }
}
