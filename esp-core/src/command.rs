//! Kommando-Übersetzung: symbolisches Token → Animations-Code
//!
//! Totale Funktion ohne Hardware-Dependencies (testbar!).

use crate::types::AnimationCode;

/// Festes symbolisches Vokabular (case-insensitive Match)
///
/// `dkjr` und `donkeykongjr` sind Aliase für denselben Code.
const VOCABULARY: &[(&str, AnimationCode)] = &[
    ("pacman", AnimationCode::Theme(20)),
    ("digdug", AnimationCode::Theme(21)),
    ("mario", AnimationCode::Theme(22)),
    ("donkeykong", AnimationCode::Theme(23)),
    ("dkjr", AnimationCode::Theme(24)),
    ("donkeykongjr", AnimationCode::Theme(24)),
    ("bubblebobble", AnimationCode::Theme(25)),
    ("mspacman", AnimationCode::Theme(26)),
    ("christmas", AnimationCode::Basic(4)),
];

/// Strikte Variante der Übersetzung
///
/// Reihenfolge:
/// 1. Case-insensitiver exakter Match gegen das Vokabular
/// 2. Parse als literaler Integer-Code, validiert gegen die
///    beiden Code-Bereiche
///
/// Gibt `None` zurück wenn das Token weder symbolisch noch als
/// gültiger Code lesbar ist - damit können Aufrufer einen Parse-Fehler
/// von einem expliziten "aus"-Wunsch unterscheiden.
pub fn parse_command(token: &str) -> Option<AnimationCode> {
    for (name, code) in VOCABULARY {
        if token.eq_ignore_ascii_case(name) {
            return Some(*code);
        }
    }
    token.parse::<i32>().ok().and_then(AnimationCode::from_raw)
}

/// Übersetzt ein Kommando-Token in einen Animations-Code
///
/// Totale Funktion: unbekannte Tokens fallen auf Code 0 (aus) zurück.
/// Das ist das dokumentierte Verhalten des Kommando-Interfaces;
/// für strikte Semantik steht `parse_command` zur Verfügung.
pub fn translate(token: &str) -> AnimationCode {
    parse_command(token).unwrap_or(AnimationCode::OFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_is_case_insensitive() {
        for token in ["pacman", "PacMan", "PACMAN"] {
            assert_eq!(translate(token), AnimationCode::Theme(20));
        }
    }

    #[test]
    fn test_translate_aliases() {
        assert_eq!(translate("dkjr"), AnimationCode::Theme(24));
        assert_eq!(translate("donkeykongjr"), AnimationCode::Theme(24));
    }

    #[test]
    fn test_translate_literal_integer() {
        assert_eq!(translate("3"), AnimationCode::Basic(3));
        assert_eq!(translate("25"), AnimationCode::Theme(25));
    }

    #[test]
    fn test_translate_unknown_token_falls_back_to_off() {
        assert_eq!(translate("xyz"), AnimationCode::OFF);
        assert_eq!(parse_command("xyz"), None);
    }

    #[test]
    fn test_translate_rejects_out_of_range_integers() {
        assert_eq!(parse_command("7"), None);
        assert_eq!(parse_command("-3"), None);
        assert_eq!(translate("7"), AnimationCode::OFF);
    }
}
