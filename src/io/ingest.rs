use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Why an uploaded file contributed nothing. Always recovered by the
/// caller: the pipeline proceeds with whatever the other source has.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8")]
    NotUtf8,
}

/// Reads article titles from the first column of a tabular file.
///
/// `.csv` and `.tsv` follow spreadsheet conventions: the first row is
/// a header and is skipped. `.txt` is one title per line with no
/// header. Anything else is unsupported.
pub fn load_title_rows(path: &Path) -> Result<Vec<String>, ReadError> {
    let text = read_utf8(path)?;

    let rows = match extension_of(path).as_str() {
        "csv" => first_column(&text, ','),
        "tsv" => first_column(&text, '\t'),
        "txt" => text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect(),
        other => {
            warn!(path = %path.display(), format = other, "unsupported titles file");
            return Err(ReadError::UnsupportedFormat(describe_extension(other)));
        }
    };

    Ok(rows)
}

/// Reads a guideline document (`.txt` or `.md`) as UTF-8 text.
pub fn load_guideline_text(path: &Path) -> Result<String, ReadError> {
    match extension_of(path).as_str() {
        "txt" | "md" => read_utf8(path),
        other => Err(ReadError::UnsupportedFormat(describe_extension(other))),
    }
}

fn read_utf8(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ReadError::NotUtf8)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn describe_extension(ext: &str) -> String {
    if ext.is_empty() {
        "(no extension)".to_string()
    } else {
        format!(".{ext}")
    }
}

fn first_column(text: &str, delim: char) -> Vec<String> {
    text.lines()
        .skip(1) // header row
        .map(|line| first_field(line, delim))
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect()
}

// Minimal delimited-field reader: handles a leading quoted field with
// doubled-quote escapes, nothing more exotic.
fn first_field(line: &str, delim: char) -> String {
    let line = line.trim_end_matches('\r');

    let Some(rest) = line.strip_prefix('"') else {
        return line.split(delim).next().unwrap_or("").to_string();
    };

    let mut out = String::new();
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                out.push('"');
            } else {
                break;
            }
        } else {
            out.push(c);
        }
    }
    out
}
