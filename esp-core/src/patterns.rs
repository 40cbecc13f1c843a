//! Pattern-Primitive über dem `PixelStrip` Trait
//!
//! Reine Frame-Funktionen ohne Timing: "einen Frame rendern" und
//! "Frames takten" sind getrennt. Das Pacing (Tick-Schlaf, Wipe-Delay
//! zwischen Pixeln) übernimmt der Animations-Task der Firmware.

use rgb::RGB8;

use crate::traits::{PixelStrip, StripError};
use crate::types::colors;

/// Setzt den ganzen Strip auf eine Farbe, ein einziger Flush
pub fn fill_solid<S: PixelStrip>(strip: &mut S, color: RGB8) -> Result<(), StripError> {
    for i in 0..strip.len() {
        strip.set_pixel(i, color);
    }
    strip.show()
}

/// Ein Schritt eines sequentiellen Wipes: Pixel setzen und flushen
///
/// Der Aufrufer iteriert über die Indizes und legt das Delay zwischen
/// die Schritte - so entsteht der sichtbare Links-nach-rechts-Übergang.
pub fn wipe_pixel<S: PixelStrip>(
    strip: &mut S,
    index: usize,
    color: RGB8,
) -> Result<(), StripError> {
    strip.set_pixel(index, color);
    strip.show()
}

/// Gruppen-Farbregel des alternierenden Patterns
///
/// Die zweite Farbe gilt genau dann, wenn
/// `(index + offset) mod (2 * group_size) >= group_size`.
/// Über `offset` rotiert das Muster; ein voller Zyklus hat die
/// Länge `2 * group_size`.
pub fn group_color(index: usize, offset: u16, group_size: u16, c1: RGB8, c2: RGB8) -> RGB8 {
    let group = usize::from(group_size.max(1));
    if (index + usize::from(offset)) % (2 * group) >= group {
        c2
    } else {
        c1
    }
}

/// Instant-Frame des alternierenden Gruppen-Patterns
///
/// Berechnet für jeden Pixel die Gruppenfarbe unter dem gegebenen
/// Offset und flusht einmal. Wird für das periodische Re-Phasing
/// genutzt, damit das Crawl ohne sichtbaren Wipe animiert. Per
/// Konstruktion phasen-äquivalent zum delay-freien alternierenden
/// Wipe mit demselben Offset.
pub fn fill_alternating<S: PixelStrip>(
    strip: &mut S,
    c1: RGB8,
    c2: RGB8,
    group_size: u16,
    offset: u16,
) -> Result<(), StripError> {
    for i in 0..strip.len() {
        strip.set_pixel(i, group_color(i, offset, group_size, c1, c2));
    }
    strip.show()
}

/// Klassisches Farbrad: Position 0-255 → RGB
///
/// Drittelt den Wertebereich in rot→blau, blau→grün und grün→rot
/// Übergänge (Adafruit-Wheel-Semantik).
pub fn color_wheel(pos: u8) -> RGB8 {
    let pos = 255 - pos;
    if pos < 85 {
        RGB8 {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        RGB8 {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    } else {
        let pos = pos - 170;
        RGB8 {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    }
}

/// Ein Frame des Regenbogen-Effekts
///
/// Verteilt eine volle Farbrad-Umdrehung über die Strip-Länge,
/// verschoben um `first_hue`. Nicht im Default-Mapping verdrahtet,
/// als Library-Primitive verfügbar.
pub fn rainbow_frame<S: PixelStrip>(strip: &mut S, first_hue: u8) -> Result<(), StripError> {
    let len = strip.len().max(1);
    for i in 0..strip.len() {
        let hue = first_hue.wrapping_add(((i * 256) / len) as u8);
        strip.set_pixel(i, color_wheel(hue));
    }
    strip.show()
}

/// Ein Frame des Theater-Chase-Effekts
///
/// Jeder dritte Pixel leuchtet, der Rest ist aus; `phase` verschiebt
/// das Raster. Nicht im Default-Mapping verdrahtet.
pub fn theater_chase_frame<S: PixelStrip>(
    strip: &mut S,
    color: RGB8,
    phase: usize,
) -> Result<(), StripError> {
    for i in 0..strip.len() {
        let c = if i % 3 == phase % 3 {
            color
        } else {
            colors::BLACK
        };
        strip.set_pixel(i, c);
    }
    strip.show()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_color_boundary() {
        let c1 = colors::RED;
        let c2 = colors::GREEN;
        // Gruppe 6: Indizes 0-5 erste Farbe, 6-11 zweite, 12 wieder erste
        for i in 0..6 {
            assert_eq!(group_color(i, 0, 6, c1, c2), c1);
        }
        for i in 6..12 {
            assert_eq!(group_color(i, 0, 6, c1, c2), c2);
        }
        assert_eq!(group_color(12, 0, 6, c1, c2), c1);
    }

    #[test]
    fn test_group_color_offset_rotates_pattern() {
        let c1 = colors::RED;
        let c2 = colors::GREEN;
        // Offset verschiebt die Gruppengrenze um genau ein Pixel
        assert_eq!(group_color(5, 1, 6, c1, c2), c2);
        // Voller Zyklus (2 * Gruppe) ist die Identität
        for i in 0..30 {
            assert_eq!(group_color(i, 12, 6, c1, c2), group_color(i, 0, 6, c1, c2));
        }
    }

    #[test]
    fn test_color_wheel_endpoints() {
        // Position 0 und 255 liegen im rot-dominierten Drittel
        assert_eq!(color_wheel(0).g, 0);
        let mid = color_wheel(128);
        assert_eq!(mid.r, 0);
    }
}
