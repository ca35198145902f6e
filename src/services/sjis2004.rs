//! Shift_JIS-2004 (JIS X 0213 in Shift_JIS form).
//!
//! `encoding_rs` only carries the JIS X 0208 repertoire, which lacks many of
//! the hanzi the Cantonese column uses. The mapping lives in
//! `data/shift_jis_2004.txt`.

use std::collections::HashMap;
use std::sync::LazyLock;

static TABLE_SRC: &str = include_str!("../../data/shift_jis_2004.txt");

static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables::parse(TABLE_SRC));

struct Tables {
    single: HashMap<char, u16>,
    /// Base character + combining mark sharing one code.
    pairs: HashMap<(char, char), u16>,
    decode: HashMap<u16, (char, Option<char>)>,
}

impl Tables {
    fn parse(src: &str) -> Self {
        let mut t = Tables {
            single: HashMap::new(),
            pairs: HashMap::new(),
            decode: HashMap::new(),
        };

        for line in src.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (code, chars) = parse_line(line).expect("malformed Shift_JIS-2004 table");
            match chars {
                (c, None) => {
                    t.single.insert(c, code);
                }
                (c, Some(m)) => {
                    t.pairs.insert((c, m), code);
                }
            }
            t.decode.insert(code, chars);
        }

        t
    }
}

fn parse_line(line: &str) -> Option<(u16, (char, Option<char>))> {
    let (code, cps) = line.split_once(' ')?;
    let code = u16::from_str_radix(code, 16).ok()?;

    let mut it = cps.split('+').map(|cp| u32::from_str_radix(cp, 16).ok().and_then(char::from_u32));
    let first = it.next()??;
    let second = match it.next() {
        Some(c) => Some(c?),
        None => None,
    };
    Some((code, (first, second)))
}

fn push_code(out: &mut Vec<u8>, code: u16) {
    if code > 0xFF {
        out.extend_from_slice(&code.to_be_bytes());
    } else {
        out.push(code as u8);
    }
}

/// Encode `text`, or return the first character with no mapping.
pub fn encode(text: &str) -> Result<Vec<u8>, char> {
    let t = &*TABLES;
    let mut out = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(&next) = chars.peek() {
            if let Some(&code) = t.pairs.get(&(c, next)) {
                push_code(&mut out, code);
                chars.next();
                continue;
            }
        }

        // Checked before ASCII: backslash and tilde are remapped.
        if let Some(&code) = t.single.get(&c) {
            push_code(&mut out, code);
        } else if c.is_ascii() {
            out.push(c as u8);
        } else {
            return Err(c);
        }
    }

    Ok(out)
}

fn is_lead(b: u8) -> bool {
    matches!(b, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Decode bytes produced by [`encode`]; `None` on an unmapped sequence.
pub fn decode(bytes: &[u8]) -> Option<String> {
    let t = &*TABLES;
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let (code, width) = if is_lead(b) {
            let trail = *bytes.get(i + 1)?;
            (u16::from_be_bytes([b, trail]), 2)
        } else {
            (u16::from(b), 1)
        };

        match t.decode.get(&code) {
            Some(&(c, m)) => {
                out.push(c);
                if let Some(m) = m {
                    out.push(m);
                }
            }
            None if width == 1 && b.is_ascii() => out.push(b as char),
            None => return None,
        }
        i += width;
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::SHIFT_JIS;

    #[test]
    fn table_loads_fully() {
        assert_eq!(TABLES.single.len() + TABLES.pairs.len(), TABLES.decode.len());
        assert_eq!(TABLES.pairs.len(), 25);
        assert!(TABLES.single.len() > 11_000);
    }

    #[test]
    fn jis_x0213_hanzi_encode() {
        assert_eq!(encode("噉").unwrap(), [0x88, 0x52]);
        assert_eq!(encode("你").unwrap(), [0x87, 0xAB]);
        assert_eq!(encode("哈").unwrap(), [0x99, 0xFB]);
    }

    #[test]
    fn characters_outside_the_plane_are_reported() {
        assert_eq!(encode("哈囖"), Err('囖'));
        assert_eq!(encode("OK 😀"), Err('😀'));
    }

    #[test]
    fn backslash_and_tilde_use_fullwidth_codes() {
        assert_eq!(encode("a\\b~").unwrap(), [b'a', 0x81, 0x5F, b'b', 0x81, 0xB0]);
        assert_eq!(encode("¥‾").unwrap(), [0x5C, 0x7E]);
    }

    #[test]
    fn kana_with_semi_voiced_mark_is_one_code() {
        assert_eq!(encode("か\u{309A}").unwrap(), [0x82, 0xF5]);
        assert_eq!(encode("か").unwrap(), [0x82, 0xA9]);
    }

    #[test]
    fn jis_x0208_text_matches_plain_shift_jis() {
        let text = "こんにちは、世界。ﾊﾝｶｸ「終了」係多謝 R\"(ok)\";";
        let (expected, _, had_errors) = SHIFT_JIS.encode(text);
        assert!(!had_errors);
        assert_eq!(encode(text).unwrap(), expected.as_ref());
    }

    #[test]
    fn decode_reverses_encode() {
        let text = "噉樣 か\u{309A} a\\b~ ﾊ ①";
        assert_eq!(decode(&encode(text).unwrap()).as_deref(), Some(text));
        assert_eq!(decode(&[0x88]), None);
    }
}
