//! Integration Tests für die Kommando-Übersetzung
//!
//! Diese Tests laufen auf dem Host (x86_64)

use esp_core::{AnimationCode, parse_command, translate};

// ============================================================================
// Tests: Symbolisches Vokabular
// ============================================================================

#[test]
fn test_translate_full_vocabulary() {
    let expected = [
        ("pacman", 20),
        ("digdug", 21),
        ("mario", 22),
        ("donkeykong", 23),
        ("dkjr", 24),
        ("donkeykongjr", 24),
        ("bubblebobble", 25),
        ("mspacman", 26),
        ("christmas", 4),
    ];
    for (token, code) in expected {
        assert_eq!(translate(token).raw(), code, "Token: {}", token);
    }
}

#[test]
fn test_translate_ignores_letter_case() {
    for token in ["PacMan", "pacman", "PACMAN", "pAcMaN"] {
        assert_eq!(translate(token), AnimationCode::Theme(20));
    }
    assert_eq!(translate("ChRiStMaS"), AnimationCode::Basic(4));
    assert_eq!(translate("DONKEYKONGJR"), AnimationCode::Theme(24));
}

#[test]
fn test_translate_requires_exact_match() {
    // Teil-Strings und Varianten mit Leerzeichen sind keine Treffer
    assert_eq!(parse_command("pac"), None);
    assert_eq!(parse_command("pacman "), None);
    assert_eq!(parse_command("pac man"), None);
}

// ============================================================================
// Tests: Literale Integer-Codes
// ============================================================================

#[test]
fn test_translate_literal_integers() {
    assert_eq!(translate("0"), AnimationCode::Basic(0));
    assert_eq!(translate("1"), AnimationCode::Basic(1));
    assert_eq!(translate("4"), AnimationCode::Basic(4));
    assert_eq!(translate("20"), AnimationCode::Theme(20));
    assert_eq!(translate("28"), AnimationCode::Theme(28));
}

#[test]
fn test_translate_rejects_out_of_domain_integers() {
    // Werte zwischen und außerhalb der beiden Code-Bereiche
    for token in ["5", "19", "29", "-1", "100"] {
        assert_eq!(parse_command(token), None, "Token: {}", token);
        assert_eq!(translate(token), AnimationCode::OFF, "Token: {}", token);
    }
}

// ============================================================================
// Tests: Fallback-Verhalten
// ============================================================================

#[test]
fn test_unknown_token_translates_to_off() {
    // Dokumentiertes Verhalten: nicht lesbare Tokens → Code 0
    assert_eq!(translate("xyz"), AnimationCode::OFF);
    assert_eq!(translate(""), AnimationCode::OFF);
    assert_eq!(translate("12abc"), AnimationCode::OFF);
}

#[test]
fn test_parse_command_distinguishes_failure_from_off() {
    // parse_command macht den Parse-Fehler sichtbar,
    // ein explizites "0" bleibt ein gültiges Kommando
    assert_eq!(parse_command("xyz"), None);
    assert_eq!(parse_command("0"), Some(AnimationCode::OFF));
}
