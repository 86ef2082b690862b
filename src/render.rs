//! Markdown catalog rendering.
//!
//! Separate from the scan pipeline so the document shape can be tested
//! without touching the filesystem. The output is fully deterministic:
//! areas keep configured order, messages sort case-insensitively (raw text
//! breaks ties), occurrence lists keep walk order.

use std::fmt::Write;

use crate::catalog::{Catalog, classify};
use crate::config::MAX_OCCURRENCES_DISPLAY;

const TITLE: &str = "## Katalog poruka (automatski izvučeno iz koda)";

const NOTE: &str = "**Napomena:** Ovo je best-effort automatska ekstrakcija stringova koji se \
prikazuju korisniku (SnackBar/validacije/dijalozi) i backend poruka iz exceptiona. Poruke koje \
su dinamički konstruisane (npr. `Greška: {e}`) su prikazane kao šablon kroz izvorni snippet.";

/// Render the full catalog document.
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", NOTE);

    for area in &catalog.areas {
        let _ = writeln!(out, "### {}", area.name);

        let mut messages: Vec<&String> = area.messages.keys().collect();
        messages.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });

        for message in messages {
            let occurrences = &area.messages[message];
            let _ = writeln!(out, "- **{}**", message);

            for occ in occurrences.iter().take(MAX_OCCURRENCES_DISPLAY) {
                let situation = classify(&occ.snippet, area.dialect);
                let _ = writeln!(
                    out,
                    "  - **situacija**: {} — `{}:{}`",
                    situation, occ.file, occ.line
                );
                let _ = writeln!(out, "    - `{}`", occ.snippet);
            }
            if occurrences.len() > MAX_OCCURRENCES_DISPLAY {
                let _ = writeln!(
                    out,
                    "  - … (+{} mjesta)",
                    occurrences.len() - MAX_OCCURRENCES_DISPLAY
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{AreaCatalog, Occurrence};
    use crate::extract::Dialect;

    fn occurrence(file: &str, line: usize, snippet: &str) -> Occurrence {
        Occurrence {
            file: file.to_string(),
            line,
            snippet: snippet.to_string(),
        }
    }

    fn area(name: &str, dialect: Dialect, entries: &[(&str, Vec<Occurrence>)]) -> AreaCatalog {
        let mut messages = HashMap::new();
        for (message, occurrences) in entries {
            messages.insert(message.to_string(), occurrences.clone());
        }
        AreaCatalog {
            name: name.to_string(),
            dialect,
            messages,
        }
    }

    #[test]
    fn test_render_empty_catalog_has_header_only() {
        let doc = render(&Catalog { areas: Vec::new() });
        assert!(doc.starts_with("## Katalog poruka"));
        assert!(doc.contains("**Napomena:**"));
        assert!(!doc.contains("###"));
    }

    #[test]
    fn test_render_single_message() {
        let catalog = Catalog {
            areas: vec![area(
                "Desktop (Flutter)",
                Dialect::Ui,
                &[(
                    "Greška pri snimanju",
                    vec![occurrence(
                        "desktop/lib/a.dart",
                        12,
                        "showSnackBar(SnackBar(content: Text('Greška pri snimanju')));",
                    )],
                )],
            )],
        };
        let doc = render(&catalog);

        assert!(doc.contains("### Desktop (Flutter)\n"));
        assert!(doc.contains("- **Greška pri snimanju**\n"));
        assert!(
            doc.contains("  - **situacija**: SnackBar (feedback) — `desktop/lib/a.dart:12`\n")
        );
        assert!(
            doc.contains("    - `showSnackBar(SnackBar(content: Text('Greška pri snimanju')));`\n")
        );
    }

    #[test]
    fn test_render_backend_situation() {
        let catalog = Catalog {
            areas: vec![area(
                "Backend (.NET)",
                Dialect::Backend,
                &[(
                    "Korisnik nije pronađen",
                    vec![occurrence(
                        "backend/UsersController.cs",
                        40,
                        r#"throw new KeyNotFoundException("Korisnik nije pronađen");"#,
                    )],
                )],
            )],
        };
        let doc = render(&catalog);
        assert!(doc.contains("**situacija**: Backend exception / HTTP odgovor"));
    }

    #[test]
    fn test_render_sorts_messages_case_insensitively() {
        let catalog = Catalog {
            areas: vec![area(
                "Desktop (Flutter)",
                Dialect::Ui,
                &[
                    ("zadnja greška", vec![occurrence("a.dart", 1, "x")]),
                    ("Prva greška", vec![occurrence("a.dart", 2, "x")]),
                    ("druga greška", vec![occurrence("a.dart", 3, "x")]),
                ],
            )],
        };
        let doc = render(&catalog);

        let first = doc.find("- **druga greška**").unwrap();
        let second = doc.find("- **Prva greška**").unwrap();
        let third = doc.find("- **zadnja greška**").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_truncates_after_six_occurrences() {
        let occurrences: Vec<Occurrence> = (1..=9)
            .map(|i| occurrence(&format!("desktop/lib/f{}.dart", i), i, "snippet"))
            .collect();
        let catalog = Catalog {
            areas: vec![area(
                "Desktop (Flutter)",
                Dialect::Ui,
                &[("Greška", occurrences)],
            )],
        };
        let doc = render(&catalog);

        assert_eq!(doc.matches("**situacija**:").count(), 6);
        assert!(doc.contains("desktop/lib/f6.dart:6"));
        assert!(!doc.contains("desktop/lib/f7.dart"));
        assert!(doc.contains("  - … (+3 mjesta)\n"));
    }

    #[test]
    fn test_render_exactly_six_occurrences_has_no_truncation_note() {
        let occurrences: Vec<Occurrence> = (1..=6)
            .map(|i| occurrence("a.dart", i, "snippet"))
            .collect();
        let catalog = Catalog {
            areas: vec![area(
                "Desktop (Flutter)",
                Dialect::Ui,
                &[("Greška", occurrences)],
            )],
        };
        let doc = render(&catalog);
        assert!(!doc.contains("mjesta"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = Catalog {
            areas: vec![area(
                "Desktop (Flutter)",
                Dialect::Ui,
                &[
                    ("Greška A", vec![occurrence("a.dart", 1, "x")]),
                    ("greška a", vec![occurrence("a.dart", 2, "x")]),
                    ("Greška B", vec![occurrence("b.dart", 3, "x")]),
                ],
            )],
        };
        assert_eq!(render(&catalog), render(&catalog));
    }
}
