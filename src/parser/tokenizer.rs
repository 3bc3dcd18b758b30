//! Line tokenizing with per-line delimiter detection

use regex::Regex;
use std::sync::OnceLock;

fn space_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("invalid space run regex"))
}

/// Field separator detected for a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
    /// Runs of two or more spaces, as found in space-aligned pasted tables
    SpaceRun,
}

impl Delimiter {
    /// Detect the delimiter of one line.
    ///
    /// Priority is tab, then semicolon, then comma. A line containing none of
    /// them is treated as space-aligned.
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            Delimiter::Tab
        } else if line.contains(';') {
            Delimiter::Semicolon
        } else if line.contains(',') {
            Delimiter::Comma
        } else {
            Delimiter::SpaceRun
        }
    }

    /// The separator character, if this is a single-character delimiter
    pub fn as_char(&self) -> Option<char> {
        match self {
            Delimiter::Tab => Some('\t'),
            Delimiter::Semicolon => Some(';'),
            Delimiter::Comma => Some(','),
            Delimiter::SpaceRun => None,
        }
    }
}

/// Split a line on `delimiter`, ignoring delimiters inside double quotes.
///
/// A `"` only toggles quoting and is never copied into the field, so
/// `"PT Maju" Jaya` becomes `PT Maju Jaya`. There is no `""` escape. Every
/// field is trimmed. The trailing field is always emitted, so a line with `n`
/// unquoted delimiters yields `n + 1` fields.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            fields.push(clean_field(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(clean_field(&current));

    fields
}

/// Split a line on runs of two or more whitespace characters
pub fn split_space_runs(line: &str) -> Vec<String> {
    space_run_re()
        .split(line.trim())
        .map(str::to_string)
        .collect()
}

/// Detect the line's delimiter and split it into fields
pub fn split_fields(line: &str) -> Vec<String> {
    let delimiter = Delimiter::detect(line);
    tracing::trace!(?delimiter, "splitting line");
    match delimiter.as_char() {
        Some(ch) => tokenize(line, ch),
        None => split_space_runs(line),
    }
}

fn clean_field(raw: &str) -> String {
    raw.trim().to_string()
}
