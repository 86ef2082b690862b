//! Per-dialect line extraction heuristics.
//!
//! Each extractor is a pure function of a single trimmed source line: an
//! inclusion gate decides whether the line is a plausible message site, an
//! exclusion gate (UI dialect only) rejects structural widget configuration,
//! and the surviving lines have their quoted string literals pulled out.
//! There is no cross-line state and no parsing beyond literal matching.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Source-line syntax variant deciding which extractor and filters apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Flutter widget code: single-quoted literals, SnackBar/validator/dialog markers.
    Ui,
    /// .NET controller/service code: double-quoted literals, throw/response markers.
    Backend,
}

// Non-greedy body with escaped-pair handling: an escaped quote (\') or escaped
// backslash (\\) inside the literal does not terminate it.
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^'\\]*(?:\\.[^'\\]*)*)'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).unwrap());

// C# literals are matched without escape handling: the backend messages in
// this codebase never embed quotes.
static DOUBLE_QUOTED_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Extract candidate messages from one UI-dialect line.
///
/// Returns an empty vector unless the line contains at least one inclusion
/// marker and none of the exclusion markers. Both single- and double-quoted
/// literals are extracted; the same text quoted twice on one line will appear
/// twice, which downstream aggregation keeps as-is.
///
/// The only escape sequence rewritten is `\n` (to a real newline); other
/// escaped pairs pass through verbatim.
pub fn extract_ui(line: &str, markers: &[String], exclusions: &[String]) -> Vec<String> {
    if !markers.iter().any(|m| line.contains(m.as_str())) {
        return Vec::new();
    }
    if exclusions.iter().any(|t| line.contains(t.as_str())) {
        return Vec::new();
    }

    let mut literals: Vec<String> = SINGLE_QUOTED
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect();
    literals.extend(DOUBLE_QUOTED.captures_iter(line).map(|c| c[1].to_string()));

    literals
        .iter()
        .map(|s| s.replace("\\n", "\n").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract candidate messages from one backend-dialect line.
///
/// Lines without a marker yield nothing; qualifying lines yield every
/// double-quoted literal, trimmed. No exclusion gate and no vocabulary
/// filtering apply to this dialect.
pub fn extract_backend(line: &str, markers: &[String]) -> Vec<String> {
    if !markers.iter().any(|m| line.contains(m.as_str())) {
        return Vec::new();
    }

    DOUBLE_QUOTED_PLAIN
        .captures_iter(line)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
