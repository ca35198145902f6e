use std::fmt::Write;

use crate::model::row::{EmissionForm, TranslationRow};
use crate::model::run_id::RunIdentifier;
use crate::services::literal::raw_string;

pub const DEFAULT_DISK: u8 = 2;

/// Where disk 2 text lives in Dreamcast memory.
pub const BASE_OFFSET: &str = "0x8C000000 + 0x00010000";

/// Unused text area the patch version is stamped into.
pub const LANG_PATCH_ID_ADDRESS: &str = "0x0c1d37dc";

const BANNER: &str = "\
// *WARNING* DO NOT EDIT BY HAND
// This file is auto-generated by a tool gdxsv_translation.py.

#define TRANSLATE(offset,length,original,cantonese,english) GdxsvTranslationWithMaxLength<length>(offset,original,cantonese,english)
#define CUSTOMIZE(offset,length,original,cantonese,english,japanese) GdxsvTranslationWithMaxLength<length>(offset,original,cantonese,english,japanese)
";

pub struct Artifact<'a> {
    pub disk: u8,
    pub run_id: RunIdentifier,
    pub rows: &'a [TranslationRow],
}

pub fn entry_line(row: &TranslationRow) -> String {
    let form = row.form();
    let mut line = format!(
        "    {}({}, {}, {}, {}, {}",
        form.macro_name(),
        row.address,
        row.max_length_text,
        raw_string(&row.original),
        raw_string(&row.cantonese),
        raw_string(&row.english),
    );
    if form == EmissionForm::Customize {
        let patched = row.patched_japanese.as_deref().unwrap_or_default();
        line.push_str(", ");
        line.push_str(&raw_string(patched));
    }
    line.push_str("),");
    line
}

pub fn render(artifact: &Artifact<'_>) -> String {
    let disk = artifact.disk;
    let mut out = String::with_capacity(BANNER.len() + 1024 + artifact.rows.len() * 96);

    out.push_str(BANNER);
    out.push('\n');
    let _ = writeln!(out, "const static GdxsvTranslation translations_disk{disk}[] = {{");
    for row in artifact.rows {
        out.push_str(&entry_line(row));
        out.push('\n');
    }
    out.push_str("};\n\n#undef TRANSLATE\n#undef CUSTOMIZE\n\n");

    let _ = write!(
        out,
        "\
if (disk == {disk}) {{
    for (const auto& translation : translations_disk{disk}) {{
        const static u32 offset = {BASE_OFFSET};
        const char * text = translation.Text();
        if (!text) continue;
        const auto length = strlen(text);
        for (int i = 0; i < length; ++i) {{
            gdxsv_WriteMem8(offset + translation.offset + i, u8(text[i]));
        }}
        gdxsv_WriteMem8(offset + translation.offset + (u32)length, u8(0));
    }}\n    \n    // To manage lang-path version, overwrite \"UNUSED\" text area
    symbols[\"lang_patch_id\"] = {LANG_PATCH_ID_ADDRESS};
    symbols[\":lang_patch_id\"] = {run_id};
    symbols[\":lang_patch_lang\"] = (u32)GdxsvLanguage::Language();
    gdxsv_WriteMem32(symbols[\"lang_patch_id\"], symbols[\":lang_patch_id\"]);
}}
",
        run_id = artifact.run_id,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, address: &str, english: &str, patched: Option<&str>) -> TranslationRow {
        TranslationRow {
            line,
            address: address.into(),
            max_length: 16,
            max_length_text: "16".into(),
            original: "こんにちは".into(),
            cantonese: "哈囖".into(),
            english: english.into(),
            patched_japanese: patched.map(str::to_string),
        }
    }

    fn render_rows(rows: &[TranslationRow], run_id: u64) -> String {
        render(&Artifact {
            disk: DEFAULT_DISK,
            run_id: RunIdentifier::new(run_id).unwrap(),
            rows,
        })
    }

    #[test]
    fn plain_row_line() {
        assert_eq!(
            entry_line(&row(2, "0x1000", "Hello", None)),
            r#"    TRANSLATE(0x1000, 16, R"(こんにちは)", R"(哈囖)", R"(Hello)"),"#
        );
    }

    #[test]
    fn customized_row_line_has_sixth_argument() {
        assert_eq!(
            entry_line(&row(2, "0x1000", "Hello", Some("やあ"))),
            r#"    CUSTOMIZE(0x1000, 16, R"(こんにちは)", R"(哈囖)", R"(Hello)", R"(やあ)"),"#
        );
    }

    #[test]
    fn max_length_literal_is_emitted_verbatim() {
        let mut r = row(2, "0x1000", "Hi", None);
        r.max_length = 14;
        r.max_length_text = "016".into();
        assert_eq!(
            entry_line(&r),
            r#"    TRANSLATE(0x1000, 016, R"(こんにちは)", R"(哈囖)", R"(Hi)"),"#
        );
    }

    #[test]
    fn text_with_closing_sequence_is_contained() {
        assert_eq!(
            entry_line(&row(2, "0x1", "Hi)\"x", None)),
            r#"    TRANSLATE(0x1, 16, R"(こんにちは)", R"(哈囖)", R"gdx(Hi)"x)gdx"),"#
        );
    }

    #[test]
    fn full_artifact_layout() {
        let rows = [row(2, "0x1000", "Hello", None)];
        let expected = r#"// *WARNING* DO NOT EDIT BY HAND
// This file is auto-generated by a tool gdxsv_translation.py.

#define TRANSLATE(offset,length,original,cantonese,english) GdxsvTranslationWithMaxLength<length>(offset,original,cantonese,english)
#define CUSTOMIZE(offset,length,original,cantonese,english,japanese) GdxsvTranslationWithMaxLength<length>(offset,original,cantonese,english,japanese)

const static GdxsvTranslation translations_disk2[] = {
    TRANSLATE(0x1000, 16, R"(こんにちは)", R"(哈囖)", R"(Hello)"),
};

#undef TRANSLATE
#undef CUSTOMIZE

if (disk == 2) {
    for (const auto& translation : translations_disk2) {
        const static u32 offset = 0x8C000000 + 0x00010000;
        const char * text = translation.Text();
        if (!text) continue;
        const auto length = strlen(text);
        for (int i = 0; i < length; ++i) {
            gdxsv_WriteMem8(offset + translation.offset + i, u8(text[i]));
        }
        gdxsv_WriteMem8(offset + translation.offset + (u32)length, u8(0));
    }

    // To manage lang-path version, overwrite "UNUSED" text area
    symbols["lang_patch_id"] = 0x0c1d37dc;
    symbols[":lang_patch_id"] = 12345678;
    symbols[":lang_patch_lang"] = (u32)GdxsvLanguage::Language();
    gdxsv_WriteMem32(symbols["lang_patch_id"], symbols[":lang_patch_id"]);
}
"#
        .replace("    }\n\n    // To", "    }\n    \n    // To");
        assert_eq!(render_rows(&rows, 12_345_678), expected);
    }

    #[test]
    fn rows_follow_input_order() {
        let rows = [
            row(2, "0x3000", "C", None),
            row(3, "0x1000", "A", Some("ア")),
            row(4, "0x2000", "B", None),
        ];
        let out = render_rows(&rows, 1);
        let a = out.find("0x3000").unwrap();
        let b = out.find("0x1000").unwrap();
        let c = out.find("0x2000").unwrap();
        assert!(a < b && b < c);
        assert_eq!(out.matches("    TRANSLATE(").count(), 2);
        assert_eq!(out.matches("    CUSTOMIZE(").count(), 1);
    }

    #[test]
    fn empty_table_still_renders_boilerplate() {
        let out = render_rows(&[], 0);
        assert!(out.contains("translations_disk2[] = {\n};\n"));
        assert!(out.contains("symbols[\":lang_patch_id\"] = 0;"));
    }

    #[test]
    fn only_run_id_differs_between_runs() {
        let rows = [row(2, "0x1000", "Hello", None)];
        let a = render_rows(&rows, 11);
        let b = render_rows(&rows, 99_999_999);
        assert_ne!(a, b);
        assert_eq!(a.replace("= 11;", "= 99999999;"), b);
    }

    #[test]
    fn disk_number_names_array_and_gate() {
        let out = render(&Artifact {
            disk: 3,
            run_id: RunIdentifier::from_unix_secs(5),
            rows: &[],
        });
        assert!(out.contains("translations_disk3[] = {"));
        assert!(out.contains("if (disk == 3) {"));
        assert!(out.contains("translation : translations_disk3)"));
    }
}
