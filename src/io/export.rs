/// Longest filename stem derived from a title, before ".md".
const MAX_STEM_LEN: usize = 60;

/// Derives a download filename from an article title: whitespace
/// becomes `_`, anything that isn't alphanumeric, `_` or `-` is
/// dropped, and the stem is capped at [`MAX_STEM_LEN`] chars.
pub fn brief_filename(title: &str) -> String {
    let mut stem = String::new();

    for c in title.trim().chars() {
        if stem.len() >= MAX_STEM_LEN {
            break;
        }
        if c.is_whitespace() {
            if !stem.ends_with('_') {
                stem.push('_');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            stem.push(c);
        }
    }

    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "brief.md".to_string()
    } else {
        format!("{stem}.md")
    }
}

/// Renders the whole brief store as a two-column CSV document,
/// `Title,Brief`, one row per entry in insertion order.
pub fn briefs_csv(briefs: &[(String, String)]) -> String {
    let mut out = String::from("Title,Brief\n");
    for (title, brief) in briefs {
        out.push_str(&csv_escape(title));
        out.push(',');
        out.push_str(&csv_escape(brief));
        out.push('\n');
    }
    out
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_has_no_whitespace_or_separators() {
        let name = brief_filename("Why  markets / move:  a primer?");
        assert_eq!(name, "Why_markets_move_a_primer.md");
        assert!(!name.contains(char::is_whitespace));
        assert!(!name.contains('/'));
    }

    #[test]
    fn filename_is_bounded() {
        let long = "word ".repeat(50);
        let name = brief_filename(&long);
        assert!(name.len() <= MAX_STEM_LEN + ".md".len() + 1);
        assert!(name.ends_with(".md"));
    }

    #[test]
    fn degenerate_title_still_yields_a_name() {
        assert_eq!(brief_filename("???"), "brief.md");
        assert_eq!(brief_filename("   "), "brief.md");
    }

    #[test]
    fn csv_has_exactly_two_columns_in_insertion_order() {
        let briefs = vec![
            ("First".to_string(), "Body one".to_string()),
            ("Second".to_string(), "Body two".to_string()),
        ];
        let csv = briefs_csv(&briefs);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec!["Title,Brief", "First,Body one", "Second,Body two"]
        );
    }

    #[test]
    fn csv_escapes_commas_quotes_and_newlines() {
        let briefs = vec![(
            "A, \"tricky\" title".to_string(),
            "line one\nline two".to_string(),
        )];
        let csv = briefs_csv(&briefs);
        assert_eq!(
            csv,
            "Title,Brief\n\"A, \"\"tricky\"\" title\",\"line one\nline two\"\n"
        );
    }

    #[test]
    fn empty_store_exports_just_the_header() {
        assert_eq!(briefs_csv(&[]), "Title,Brief\n");
    }
}
