use std::collections::HashSet;

/// De-duplicated, order-preserving list of article titles.
///
/// Built once per normalization pass from the uploaded file rows and
/// the manual text box; immutable afterwards. Two titles that differ
/// only in case count as the same title, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleList(Vec<String>);

impl TitleList {
    pub fn normalize(file_rows: &[String], manual_text: &str) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut titles = Vec::new();

        let candidates = file_rows
            .iter()
            .map(|s| s.as_str())
            .chain(manual_text.lines());

        for candidate in candidates {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                continue;
            }
            if seen.insert(candidate.to_lowercase()) {
                titles.push(candidate.to_string());
            }
        }

        TitleList(titles)
    }

    /// One title per line, for embedding into the stage-1 prompt.
    pub fn joined(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}
