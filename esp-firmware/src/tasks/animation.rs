// Animations-Task - Treibt die State-Machine und rendert auf den Strip
use defmt::{error, info};
use embassy_time::{Duration, Instant, Timer};
use esp_hal_smartled::smart_led_buffer;

use esp_core::engine::Engine;
use esp_core::patterns;
use esp_core::traits::{PixelStrip, StripError};
use esp_core::types::{Pattern, colors};

use crate::PatternCell;
use crate::config::{ENGINE_TICK_MS, LED_BRIGHTNESS, RMT_CLOCK_MHZ, WIPE_DELAY_MS};
use crate::hal::RmtStripWriter;

/// Animations-Loop - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pro Tick:
/// 1. Engine-Tick mit aktueller Zeit und frischer Momentaufnahme der
///    Zustands-Zelle; die Engine liefert den Render-Plan
/// 2. Geplantes Crawl-Re-Phasing: instant, ein einziger Flush
/// 3. Geplanter Übergang: voller Render (sichtbarer Wipe bzw.
///    instant aus), läuft ununterbrochen zu Ende bevor die Zelle
///    erneut geprüft wird
///
/// Render-Fehler werden geloggt und im nächsten Tick erneut versucht -
/// es gibt keinen fatalen Pfad, der Loop terminiert nie.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: PixelStrip` ermöglicht:
/// - Real Hardware (RmtStripWriter) im Production-Code
/// - Mock Implementation (MockStrip) in Host-Tests
pub async fn animation_logic<S: PixelStrip>(mut strip: S, cell: &'static PatternCell) {
    let mut engine = Engine::new(strip.len());

    strip.set_brightness(LED_BRIGHTNESS);

    // Boot-Zustand: Strip dunkel
    if patterns::fill_solid(&mut strip, colors::BLACK).is_err() {
        error!("Animation: initial clear failed");
    }

    loop {
        let now = Instant::now().as_millis();
        let plan = engine.tick(now, Some(cell.read()));

        if let Some(frame) = plan.rephase {
            let (c1, c2) = frame.colors;
            if patterns::fill_alternating(&mut strip, c1, c2, frame.group_size, frame.offset)
                .is_err()
            {
                error!("Animation: re-phase flush failed");
            }
        }

        if let Some(transition) = plan.transition {
            info!("Animation: transition to code {}", transition.code);
            if render_transition(&mut strip, transition.pattern).await.is_err() {
                error!("Animation: transition render failed");
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(ENGINE_TICK_MS)).await;
    }
}

/// Voller Übergangs-Render bei Code-Wechsel
///
/// - Aus: instant dunkel, ein Flush
/// - Einfarbig: sichtbarer Wipe von links nach rechts
/// - Crawl: alternierender Gruppen-Wipe, Einstieg bei Offset 0
async fn render_transition<S: PixelStrip>(
    strip: &mut S,
    pattern: Pattern,
) -> Result<(), StripError> {
    match pattern {
        Pattern::Off => patterns::fill_solid(strip, colors::BLACK),
        Pattern::Solid(color) => {
            for i in 0..strip.len() {
                patterns::wipe_pixel(strip, i, color)?;
                Timer::after(Duration::from_millis(WIPE_DELAY_MS)).await;
            }
            Ok(())
        }
        Pattern::Crawl(crawl) => {
            let group = crawl.group_size.resolve(strip.len());
            let (c1, c2) = crawl.colors;
            for i in 0..strip.len() {
                patterns::wipe_pixel(strip, i, patterns::group_color(i, 0, group, c1, c2))?;
                Timer::after(Duration::from_millis(WIPE_DELAY_MS)).await;
            }
            Ok(())
        }
    }
}

/// Animations-Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `animation_logic()` Funktion auf.
#[embassy_executor::task]
pub async fn animation_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    cell: &'static PatternCell,
) {
    // Buffer für SmartLED Daten erstellen (30 Pixel)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(30);

    // Hardware initialisieren: RmtStripWriter kapselt RMT + SmartLED
    let strip = RmtStripWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    info!("Animation: strip initialized, starting engine loop");

    animation_logic(strip, cell).await;
}
