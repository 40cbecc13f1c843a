// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

/// GPIO-Pin für den WS2812 LED-Strip (Datenleitung)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der Pixel im Strip
pub const LED_COUNT: usize = 30;

/// Default-Helligkeit für den Strip (0-255)
/// Gedimmt auf ~20% - der Strip hängt in einem Arcade-Cabinet
pub const LED_BRIGHTNESS: u8 = 50;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Animations-Engine Konfiguration
// ============================================================================

/// Tick-Intervall des Animations-Loops in Millisekunden
/// Bestimmt wie schnell ein Kommando sichtbar wird; das Frame-Timing
/// der Crawl-Patterns steckt in der Pattern-Tabelle von esp-core
pub const ENGINE_TICK_MS: u64 = 20;

/// Delay zwischen zwei Pixeln eines sichtbaren Übergangs-Wipes (ms)
pub const WIPE_DELAY_MS: u64 = 50;

/// Maximale Länge eines Kommando-Tokens im REST-Pfad
/// Längstes Vokabular-Token: "donkeykongjr" (12 Zeichen)
pub const COMMAND_MAX_LEN: usize = 24;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Der ESP32 wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "arcade";

/// mDNS TTL (Time To Live) in Sekunden
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port laut RFC 6762
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251) laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers und Body
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;
