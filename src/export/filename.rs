//! Filesystem-safe filenames

use std::sync::LazyLock;

use regex::Regex;

/// Characters that are invalid in filenames on at least one supported
/// filesystem, plus ASCII control characters.
static INVALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap());

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Turn a title into a filesystem-safe name
///
/// Invalid characters become spaces, whitespace runs collapse to a single
/// space, and the result is trimmed. Deterministic: two titles that
/// sanitize to the same string target the same file (last write wins).
pub fn sanitize_title(title: &str) -> String {
    let replaced = INVALID.replace_all(title, " ");
    WHITESPACE_RUNS.replace_all(&replaced, " ").trim().to_string()
}

/// File stem for a bookmark: sanitized title, else sanitized location,
/// else the raw content id
pub fn entry_filename(title: Option<&str>, fallback: Option<&str>, id: &str) -> String {
    if let Some(name) = title.map(sanitize_title).filter(|s| !s.is_empty()) {
        return name;
    }
    if let Some(name) = fallback.map(sanitize_title).filter(|s| !s.is_empty()) {
        return name;
    }
    id.trim().to_string()
}
