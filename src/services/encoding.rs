use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::error::{GenError, Result};
use crate::model::row::TranslationRow;
use crate::services::sjis2004;

/// Best-effort name of what a byte buffer was saved as.
pub fn detect(bytes: &[u8]) -> String {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return format!("{} (BOM)", encoding.name().to_lowercase());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true).name().to_lowercase()
}

/// Decode the input table. Only UTF-8 (optionally with a BOM) is accepted.
pub fn decode_input(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let body = match Encoding::for_bom(bytes) {
        Some((enc, bom_len)) if enc == UTF_8 => &bytes[bom_len..],
        Some(_) => {
            return Err(GenError::InputEncoding {
                guess: detect(bytes),
            })
        }
        None => bytes,
    };

    UTF_8
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| GenError::InputEncoding {
            guess: detect(bytes),
        })
}

/// Byte length once written into the artifact. Unencodable text counts its
/// UTF-8 length; rows are checked with [`check_encodable`] first.
pub fn encoded_len(text: &str) -> usize {
    sjis2004::encode(text).map_or(text.len(), |b| b.len())
}

/// Reject rows holding characters the artifact encoding cannot carry.
pub fn check_encodable(row: &TranslationRow) -> Result<()> {
    for (column, text) in row.texts() {
        if let Err(ch) = sjis2004::encode(text) {
            return Err(GenError::Unencodable {
                line: row.line,
                column,
                ch,
                code: ch as u32,
            });
        }
    }
    Ok(())
}

pub fn encode_artifact(text: &str) -> Result<Vec<u8>> {
    sjis2004::encode(text).map_err(|_| GenError::ArtifactEncoding)
}

pub fn decode_artifact(bytes: &[u8]) -> Result<String> {
    sjis2004::decode(bytes).ok_or(GenError::ArtifactDecoding)
}
