//! C++ raw string literals (`R"delim(...)delim"`).
//!
//! Table text is embedded verbatim, so the literal delimiter is picked per
//! field such that the text can never close the literal early.

use std::borrow::Cow;

const DELIM_STEM: &str = "gdx";

/// C++ caps raw string delimiters at 16 characters.
const MAX_DELIM_LEN: usize = 16;

fn closes(text: &str, delim: &str) -> bool {
    text.contains(&format!("){delim}\""))
}

/// Shortest delimiter whose closing sequence does not occur in `text`.
pub fn delimiter_for(text: &str) -> Cow<'static, str> {
    if !closes(text, "") {
        return Cow::Borrowed("");
    }
    if !closes(text, DELIM_STEM) {
        return Cow::Borrowed(DELIM_STEM);
    }

    // Terminates within text.len() tries; the stem plus 13 digits fits.
    let mut n: u64 = 0;
    loop {
        let delim = format!("{DELIM_STEM}{n}");
        debug_assert!(delim.len() <= MAX_DELIM_LEN);
        if !closes(text, &delim) {
            return Cow::Owned(delim);
        }
        n += 1;
    }
}

pub fn raw_string(text: &str) -> String {
    let delim = delimiter_for(text);
    format!("R\"{delim}({text}){delim}\"")
}
