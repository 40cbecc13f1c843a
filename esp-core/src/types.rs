//! Core Types für die Arcade-LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies: Animations-Codes,
//! Pattern-Lookup und Farbkonstanten.

use rgb::RGB8;

/// Standard-Gruppengröße für Crawl-Patterns (Christmas)
pub const DEFAULT_GROUP_SIZE: u16 = 6;

/// Frame-Intervall für das Christmas-Crawl in Millisekunden
pub const CHRISTMAS_FRAME_INTERVAL_MS: u64 = 1000;

/// Frame-Intervall für Theme-Crawls in Millisekunden
pub const THEME_FRAME_INTERVAL_MS: u64 = 500;

/// Farbkonstanten für die Pattern-Tabelle
///
/// Volle Skala (0-255); die Helligkeit wird erst beim Flush
/// im Strip-Writer skaliert.
pub mod colors {
    use rgb::RGB8;

    pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
    pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
    pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
    pub const YELLOW: RGB8 = RGB8 { r: 255, g: 200, b: 0 };
    pub const FOREST_GREEN: RGB8 = RGB8 { r: 34, g: 139, b: 34 };
    pub const BARREL_BROWN: RGB8 = RGB8 { r: 139, g: 69, b: 19 };
}

/// Animations-Code: wählt das aktive Pattern
///
/// Zwei getrennte, validierte Wertebereiche statt roher Magic Numbers:
/// - `Basic(0..=4)`: 0 = aus, 1-3 = Grundfarben, 4 = Christmas-Crawl
/// - `Theme(20..=28)`: ein Code pro Spiel-Theme (siehe `Pattern::for_code`)
///
/// Werte außerhalb beider Bereiche werden bereits bei der
/// Kommando-Übersetzung abgelehnt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCode {
    Basic(u8),
    Theme(u8),
}

impl AnimationCode {
    /// Default-Zustand: alle Pixel aus
    pub const OFF: Self = AnimationCode::Basic(0);

    /// Validierte Konstruktion aus einem rohen Integer-Code
    ///
    /// Gibt `None` zurück wenn der Wert in keinem der beiden
    /// Wertebereiche liegt.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0..=4 => Some(AnimationCode::Basic(raw as u8)),
            20..=28 => Some(AnimationCode::Theme(raw as u8)),
            _ => None,
        }
    }

    /// Roher Integer-Code für das REST-Interface
    pub fn raw(self) -> i32 {
        match self {
            AnimationCode::Basic(n) | AnimationCode::Theme(n) => i32::from(n),
        }
    }
}

/// Gruppengröße eines Crawl-Patterns
///
/// Theme-Crawls nutzen die halbe Strip-Länge, Christmas die feste
/// Default-Gruppe. Aufgelöst wird erst zur Render-Zeit, wenn die
/// tatsächliche Strip-Länge bekannt ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSize {
    Fixed(u16),
    HalfStrip,
}

impl GroupSize {
    /// Löst die Gruppengröße gegen die Strip-Länge auf (mindestens 1)
    pub fn resolve(self, strip_len: usize) -> u16 {
        let group = match self {
            GroupSize::Fixed(n) => n,
            GroupSize::HalfStrip => (strip_len / 2) as u16,
        };
        group.max(1)
    }
}

/// Parameter eines alternierenden Crawl-Patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crawl {
    pub colors: (RGB8, RGB8),
    pub group_size: GroupSize,
    pub frame_interval_ms: u64,
}

/// Render-Pattern, deterministisch aus einem `AnimationCode` abgeleitet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Alle Pixel aus (instant)
    Off,
    /// Einfarbige Füllung (Einstieg per sichtbarem Wipe)
    Solid(RGB8),
    /// Alternierendes Gruppen-Crawl (periodisches Re-Phasing)
    Crawl(Crawl),
}

impl Pattern {
    /// Feste Lookup-Tabelle Code → Pattern
    ///
    /// Nicht belegte Theme-Codes (23 hat eine eigene Farbe, 27/28 sind
    /// reserviert) fallen auf einfarbiges Weiß zurück.
    pub fn for_code(code: AnimationCode) -> Pattern {
        match code {
            AnimationCode::Basic(0) => Pattern::Off,
            AnimationCode::Basic(1) => Pattern::Solid(colors::RED),
            AnimationCode::Basic(2) => Pattern::Solid(colors::GREEN),
            AnimationCode::Basic(3) => Pattern::Solid(colors::BLUE),
            // 4 = Christmas: rot/grün im Wechsel, feste Gruppengröße
            AnimationCode::Basic(_) => Pattern::Crawl(Crawl {
                colors: (colors::RED, colors::GREEN),
                group_size: GroupSize::Fixed(DEFAULT_GROUP_SIZE),
                frame_interval_ms: CHRISTMAS_FRAME_INTERVAL_MS,
            }),
            // Pac-Man und Ms. Pac-Man: gelb
            AnimationCode::Theme(20) | AnimationCode::Theme(26) => {
                Pattern::Solid(colors::YELLOW)
            }
            // Dig Dug: weiß/blau Crawl
            AnimationCode::Theme(21) => Pattern::Crawl(Crawl {
                colors: (colors::WHITE, colors::BLUE),
                group_size: GroupSize::HalfStrip,
                frame_interval_ms: THEME_FRAME_INTERVAL_MS,
            }),
            // Mario: rot/blau Crawl
            AnimationCode::Theme(22) => Pattern::Crawl(Crawl {
                colors: (colors::RED, colors::BLUE),
                group_size: GroupSize::HalfStrip,
                frame_interval_ms: THEME_FRAME_INTERVAL_MS,
            }),
            // Donkey Kong: Fass-Braun
            AnimationCode::Theme(23) => Pattern::Solid(colors::BARREL_BROWN),
            // DK Jr.: Dschungel-Grün
            AnimationCode::Theme(24) => Pattern::Solid(colors::FOREST_GREEN),
            // Bubble Bobble: grün/blau Crawl
            AnimationCode::Theme(25) => Pattern::Crawl(Crawl {
                colors: (colors::GREEN, colors::BLUE),
                group_size: GroupSize::HalfStrip,
                frame_interval_ms: THEME_FRAME_INTERVAL_MS,
            }),
            // Reserviert (27, 28): weißer Fallback
            AnimationCode::Theme(_) => Pattern::Solid(colors::WHITE),
        }
    }
}

// ============================================================================
// serde Implementations (optional feature)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for AnimationCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.raw())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AnimationCode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AnimationCode::Basic(n) => defmt::write!(fmt, "Basic({})", n),
            AnimationCode::Theme(n) => defmt::write!(fmt, "Theme({})", n),
        }
    }
}
