//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für Strip-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    WriteFailed,
}

/// Trait für den adressierbaren LED-Strip
///
/// Abstrahiert das Pixel-Buffer-Device (WS2812/Neopixel Strip):
/// Pixel setzen, Frame flushen, Helligkeit. `set_pixel` schreibt nur
/// in den Frame-Buffer; sichtbar wird der Frame erst mit `show`.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStrip (in-memory Frame-Buffer)
pub trait PixelStrip: Send {
    /// Anzahl der Pixel im Strip
    fn len(&self) -> usize;

    /// Setzt die Farbe eines Pixels im Frame-Buffer
    ///
    /// Indizes außerhalb des Strips werden ignoriert.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Flusht den Frame-Buffer auf die Hardware
    ///
    /// # Fehlerbehandlung
    /// Gibt `StripError::WriteFailed` zurück wenn der Hardware-Push
    /// fehlschlägt.
    fn show(&mut self) -> Result<(), StripError>;

    /// Setzt die Helligkeit (0-255), angewendet beim nächsten Flush
    fn set_brightness(&mut self, level: u8);
}
