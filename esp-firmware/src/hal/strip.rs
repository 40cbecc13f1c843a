// RMT Strip Writer - PixelStrip Implementierung für WS2812
//
// Hält einen Frame-Buffer für alle 30 Pixel; sichtbar wird ein Frame
// erst beim Flush über das RMT Peripheral.

use esp_core::{PixelStrip, StripError};
use rgb::RGB8;

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

/// RMT Buffer-Größe: 3 Farben * 8 Bits pro Pixel + 1 Reset
pub const STRIP_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Strip Writer
///
/// Nutzt ESP32 RMT Peripheral um den WS2812 Strip anzusteuern.
/// Die Helligkeit wird erst beim Flush auf den Frame skaliert, damit
/// die Pattern-Logik mit vollen Farbwerten rechnen kann.
///
/// Hinweis: Der RMT-Buffer muss 'static sein, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    led: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
    frame: [RGB8; LED_COUNT],
    brightness: u8,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Strip-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STRIP_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self {
            led,
            frame: [RGB8 { r: 0, g: 0, b: 0 }; LED_COUNT],
            brightness: 255,
        }
    }
}

/// Skaliert eine Farbe auf die eingestellte Helligkeit
fn scale(color: RGB8, brightness: u8) -> RGB8 {
    let b = u16::from(brightness);
    RGB8 {
        r: ((u16::from(color.r) * b) / 255) as u8,
        g: ((u16::from(color.g) * b) / 255) as u8,
        b: ((u16::from(color.b) * b) / 255) as u8,
    }
}

impl PixelStrip for RmtStripWriter<'_> {
    fn len(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), StripError> {
        let frame = self.frame;
        let brightness = self.brightness;
        // Das WS2812-Update-Protokoll ist timing-sensitiv: ein
        // unterbrochener Push korrumpiert den Frame. Der Flush läuft
        // daher als scoped Critical Section, der auf jedem Exit-Pfad
        // wieder freigegeben wird.
        critical_section::with(|_| {
            self.led
                .write(frame.iter().map(|c| scale(*c, brightness)))
                .map_err(|_| StripError::WriteFailed)
        })
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
