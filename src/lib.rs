//! Generates `gdxsv_translation_patch.inc` from the disk 2 translation table.

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use config::Config;
pub use error::{GenError, Result};
pub use model::row::{EmissionForm, TranslationRow};
pub use model::run_id::RunIdentifier;
pub use services::pipeline::{compile, CompileReport};
