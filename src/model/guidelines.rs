/// Merges the uploaded guideline document with the manually edited
/// guideline text. Uploaded content first, one blank line between the
/// two, empty sides omitted entirely.
pub fn compose(file_text: &str, manual_text: &str) -> String {
    let file_text = file_text.trim();
    let manual_text = manual_text.trim();

    match (file_text.is_empty(), manual_text.is_empty()) {
        (false, false) => format!("{}\n\n{}", file_text, manual_text),
        (false, true) => file_text.to_string(),
        (true, false) => manual_text.to_string(),
        (true, true) => String::new(),
    }
}
