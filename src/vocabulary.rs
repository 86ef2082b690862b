//! Target-language vocabulary filter.
//!
//! UI lines carry plenty of string literals that are not user messages (asset
//! keys, route names, format strings). A candidate survives only if it
//! contains at least one fragment of the target-language vocabulary, matched
//! case-insensitively. Backend candidates are never filtered this way.

/// Checks whether the message contains any vocabulary fragment,
/// case-insensitively. Fragments are expected to be lowercase already
/// (enforced by config validation).
pub fn matches_vocabulary(message: &str, fragments: &[String]) -> bool {
    let lowered = message.to_lowercase();
    fragments.iter().any(|f| lowered.contains(f.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn keeps(message: &str) -> bool {
        matches_vocabulary(message, &Config::default().vocabulary)
    }

    #[test]
    fn test_error_and_requirement_fragments() {
        assert!(keeps("Greška: obavezno polje"));
        assert!(keeps("greška pri snimanju"));
        assert!(keeps("Polje je obavezno"));
    }

    #[test]
    fn test_case_insensitive_match_on_non_ascii() {
        // Uppercase Š must still match the lowercase fragment "grešk"
        assert!(keeps("GREŠKA PRI SNIMANJU"));
        assert!(keeps("PLAĆANJE ODBIJENO"));
    }

    #[test]
    fn test_success_and_confirmation_fragments() {
        assert!(keeps("Uspješno sačuvano"));
        assert!(keeps("Potvrdite narudžbu"));
        assert!(keeps("Molimo pokušajte ponovo"));
    }

    #[test]
    fn test_non_target_text_is_rejected() {
        assert!(!keeps("Select an item"));
        assert!(!keeps("assets/images/logo.png"));
        assert!(!keeps("OK"));
        assert!(!keeps(""));
    }
}
