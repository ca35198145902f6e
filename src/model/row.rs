use serde::Serialize;

/// Prefix that turns a table row into an annotation.
pub const COMMENT_MARKER: &str = "//";

/// One data row of the translation table.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    /// 1-based line of the row in the input file.
    pub line: u64,

    pub address: String,

    /// Field width as the C++ compiler reads the literal.
    pub max_length: u32,

    /// `MaxLength` exactly as written in the table (trimmed), emitted as is.
    pub max_length_text: String,

    pub original: String,

    pub cantonese: String,

    pub english: String,

    pub patched_japanese: Option<String>,
}

/// The two macro shapes a row can be emitted as.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmissionForm {
    Translate,
    Customize,
}

impl EmissionForm {
    pub fn macro_name(self) -> &'static str {
        match self {
            EmissionForm::Translate => "TRANSLATE",
            EmissionForm::Customize => "CUSTOMIZE",
        }
    }
}

pub fn is_comment_address(address: &str) -> bool {
    address.starts_with(COMMENT_MARKER)
}

impl TranslationRow {
    pub fn form(&self) -> EmissionForm {
        match self.patched_japanese.as_deref() {
            Some(p) if !p.is_empty() => EmissionForm::Customize,
            _ => EmissionForm::Translate,
        }
    }

    /// Replacement texts written into game memory, keyed by column name.
    pub fn variants(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            ("Cantonese", self.cantonese.as_str()),
            ("English", self.english.as_str()),
        ];
        if let Some(p) = self.patched_japanese.as_deref().filter(|p| !p.is_empty()) {
            out.push(("Patched Japanese", p));
        }
        out
    }

    /// Every text column, including the original, for encoding checks.
    pub fn texts(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![("Original", self.original.as_str())];
        out.extend(self.variants());
        out
    }
}
