/// Most responses allow at most this many proposed titles.
pub const MAX_TITLES: usize = 10;

/// Pulls article titles out of a numbered-list response.
///
/// A line counts as a title line when its first character is an ASCII
/// digit. A single leading "N." or "N)" marker is stripped; a line
/// like "3D printing trends" has no marker and is kept whole. Lines
/// that are empty after stripping are dropped, and at most
/// [`MAX_TITLES`] entries are returned.
pub fn parse_numbered_list(raw: &str) -> Vec<String> {
    let mut titles = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }

        let title = strip_marker(line);
        if title.is_empty() {
            continue;
        }

        titles.push(title.to_string());
        if titles.len() == MAX_TITLES {
            break;
        }
    }

    titles
}

fn strip_marker(line: &str) -> &str {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let rest = &line[digits_end..];
    if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        stripped.trim()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dot_and_paren_markers_and_skips_commentary() {
        let raw = "1. Foo\n2) Bar\nnote: ignore\n3. Baz";
        assert_eq!(parse_numbered_list(raw), vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn caps_at_ten_entries() {
        let raw: String = (1..=14).map(|i| format!("{i}. Title {i}\n")).collect();
        let titles = parse_numbered_list(&raw);
        assert_eq!(titles.len(), MAX_TITLES);
        assert_eq!(titles[9], "Title 10");
    }

    #[test]
    fn drops_lines_that_are_only_a_marker() {
        assert_eq!(parse_numbered_list("1.\n2) \n3. Kept"), vec!["Kept"]);
    }

    #[test]
    fn digit_led_line_without_marker_is_kept_whole() {
        // Known quirk of the numbered-list heuristic.
        assert_eq!(
            parse_numbered_list("3D printing trends"),
            vec!["3D printing trends"]
        );
    }

    #[test]
    fn non_digit_lines_never_parse() {
        assert!(parse_numbered_list("- Foo\n* Bar\nBaz").is_empty());
    }

    #[test]
    fn every_title_is_non_empty_after_trim() {
        let raw = "1.   Padded title   \n2. Ok";
        for title in parse_numbered_list(raw) {
            assert!(!title.trim().is_empty());
            assert_eq!(title, title.trim());
        }
    }
}
