//! Occurrence aggregation and situation classification.
//!
//! The aggregate is `Area -> Message -> [Occurrence]`: areas keep their
//! configured order, each distinct trimmed message groups its occurrences in
//! file-walk then line order, and occurrences are never deduplicated (a
//! message quoted twice on one line stays listed twice).

use std::{collections::HashMap, fmt, path::Path};

use crate::{
    config::{Area, Config, SNIPPET_MAX_CHARS},
    extract::{Dialect, extract_backend, extract_ui},
    scanner::{FileRead, collect_files, read_lines},
    vocabulary::matches_vocabulary,
};

/// One concrete location where a message was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Path relative to the scan base, normalized to forward slashes.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// The trimmed source line, truncated to [`SNIPPET_MAX_CHARS`] characters.
    pub snippet: String,
}

/// Coarse category describing what kind of UI/backend event a message is
/// attached to. Display labels match the generated catalog's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    Feedback,
    FormValidation,
    Dialog,
    BackendException,
    Message,
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Situation::Feedback => write!(f, "SnackBar (feedback)"),
            Situation::FormValidation => write!(f, "Validacija forme"),
            Situation::Dialog => write!(f, "Dijalog"),
            Situation::BackendException => write!(f, "Backend exception / HTTP odgovor"),
            Situation::Message => write!(f, "Poruka"),
        }
    }
}

// Ordered (markers, situation) pairs; the first matching row wins, the
// backend fallback and the generic default come after the table.
const SITUATION_RULES: &[(&[&str], Situation)] = &[
    (&["snackbar", "showsnackbar"], Situation::Feedback),
    (&["validator", "return"], Situation::FormValidation),
    (&["alertdialog", "showdialog"], Situation::Dialog),
];

/// Classify an occurrence by its snippet (matched lowercase) and the dialect
/// of the file it came from.
pub fn classify(snippet: &str, dialect: Dialect) -> Situation {
    let lowered = snippet.to_lowercase();
    for (markers, situation) in SITUATION_RULES {
        if markers.iter().any(|m| lowered.contains(m)) {
            return *situation;
        }
    }
    if dialect == Dialect::Backend {
        Situation::BackendException
    } else {
        Situation::Message
    }
}

/// All messages collected for one area, keyed by distinct trimmed message
/// text. Keys are unordered here; rendering sorts them case-insensitively.
pub struct AreaCatalog {
    pub name: String,
    pub dialect: Dialect,
    pub messages: HashMap<String, Vec<Occurrence>>,
}

/// The full aggregate in configured area order.
pub struct Catalog {
    pub areas: Vec<AreaCatalog>,
}

/// Scan outcome, carrying the aggregate plus bookkeeping for terminal output.
pub struct ScanOutcome {
    pub catalog: Catalog,
    pub files_scanned: usize,
    /// One entry per file that could not be read (skipped with zero lines).
    pub warnings: Vec<String>,
}

/// Run extraction across every configured area rooted at `base_dir`.
pub fn build_catalog(base_dir: &Path, config: &Config) -> ScanOutcome {
    let mut areas = Vec::with_capacity(config.areas.len());
    let mut files_scanned = 0;
    let mut warnings = Vec::new();

    for area in &config.areas {
        let scan = scan_area(base_dir, area, config);
        files_scanned += scan.files_scanned;
        warnings.extend(scan.warnings);
        areas.push(scan.catalog);
    }

    ScanOutcome {
        catalog: Catalog { areas },
        files_scanned,
        warnings,
    }
}

struct AreaScan {
    catalog: AreaCatalog,
    files_scanned: usize,
    warnings: Vec<String>,
}

fn scan_area(base_dir: &Path, area: &Area, config: &Config) -> AreaScan {
    let mut messages: HashMap<String, Vec<Occurrence>> = HashMap::new();
    let mut warnings = Vec::new();
    let mut files_scanned = 0;

    let root = base_dir.join(&area.root);
    let result = collect_files(&root, &area.extensions, &config.skip_dirs);

    for path in &result.files {
        let lines = match read_lines(path) {
            FileRead::Lines(lines) => lines,
            FileRead::Unreadable(reason) => {
                warnings.push(format!("Cannot read {}: {}", path.display(), reason));
                continue;
            }
        };
        files_scanned += 1;

        let display_path = norm_path(path, base_dir);
        for (idx, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let extracted = match area.dialect {
                Dialect::Ui => extract_ui(line, &config.ui_markers, &config.ui_exclusions),
                Dialect::Backend => extract_backend(line, &config.backend_markers),
            };

            for message in extracted {
                if area.dialect == Dialect::Ui
                    && !matches_vocabulary(&message, &config.vocabulary)
                {
                    continue;
                }
                messages.entry(message).or_default().push(Occurrence {
                    file: display_path.clone(),
                    line: idx + 1,
                    snippet: truncate_chars(line, SNIPPET_MAX_CHARS),
                });
            }
        }
    }

    AreaScan {
        catalog: AreaCatalog {
            name: area.name.clone(),
            dialect: area.dialect,
            messages,
        },
        files_scanned,
        warnings,
    }
}

/// Strip the scan base and normalize separators so locators read the same on
/// every platform.
fn norm_path(path: &Path, base_dir: &Path) -> String {
    let rel = path.strip_prefix(base_dir).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
