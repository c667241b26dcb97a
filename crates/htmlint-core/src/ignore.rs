//! Ignore patterns and `.htmlvalidateignore` files.
//!
//! Patterns are a gitignore subset:
//!
//! - `dir/` matches the directory itself and anything below a `dir`
//!   segment, at any depth;
//! - a pattern containing `**` is split once around it (`**/*.gen.html`,
//!   `dist/**`, `src/**/*.min.html`);
//! - anything else is a shell glob tried against the basename, then the
//!   whole path.
//!
//! Paths are compared with `/` separators and without a leading `./`.

use crate::config::find_upward;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Name of the ignore file.
pub const IGNORE_FILE_NAME: &str = ".htmlvalidateignore";

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Returns true if any pattern matches `path`. Patterns are tried in order.
#[must_use]
pub fn should_ignore(path: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let path = normalize(path);
    patterns.iter().any(|p| matches_pattern(&path, p))
}

/// Matches one normalized path against one pattern.
#[must_use]
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(dir) = pattern.strip_suffix('/') {
        return path == dir
            || path.starts_with(&format!("{dir}/"))
            || path.contains(&format!("/{dir}/"));
    }

    if pattern.contains("**") {
        return matches_doublestar(path, pattern);
    }

    glob_match(pattern, basename(path)) || glob_match(pattern, path)
}

fn matches_doublestar(path: &str, pattern: &str) -> bool {
    let mut parts = pattern.split("**");
    let (Some(prefix), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    let suffix = suffix.strip_prefix('/').unwrap_or(suffix);

    if prefix.is_empty() {
        return glob_match(suffix, basename(path))
            || (!suffix.is_empty() && path.ends_with(suffix));
    }

    if suffix.is_empty() {
        return path == prefix || path.starts_with(&format!("{prefix}/"));
    }

    path.starts_with(prefix)
        && (path.ends_with(suffix) || glob_match(suffix, basename(path)))
}

fn glob_match(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|p| p.matches_with(text, GLOB_OPTIONS))
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn normalize(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let mut trimmed = text.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.to_string()
}

/// Finds the nearest `.htmlvalidateignore` at or above `start_dir`.
#[must_use]
pub fn find_ignore_file(start_dir: &Path) -> Option<PathBuf> {
    find_upward(start_dir, IGNORE_FILE_NAME)
}

/// Reads patterns from an ignore file: one per line, trimmed, skipping
/// blank lines and `#` comments.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_ignore_file(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Loads the nearest ignore file above `search_dir`, or nothing.
///
/// # Errors
///
/// Returns an error if an ignore file exists but cannot be read.
pub fn load_ignore_patterns(search_dir: &Path) -> std::io::Result<Vec<String>> {
    match find_ignore_file(search_dir) {
        Some(path) => load_ignore_file(&path),
        None => Ok(Vec::new()),
    }
}
