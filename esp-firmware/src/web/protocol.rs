// REST-Protokoll-Definitionen
// Definiert die JSON-Antworten des Kommando-Interfaces

use serde::Serialize;

/// Antwort der /led Endpunkte
///
/// `result` ist der Integer-Return-Code des Kommando-Interfaces:
/// 0 = Kommando angenommen. Die Zustands-Zelle kann nicht timeouten,
/// ein negativer Wert ist daher nicht mehr erreichbar, bleibt aber
/// Teil des Protokolls.
///
/// `code` ist der rohe Animations-Code, der nach dem Kommando aktiv
/// ist (bzw. beim Status-Query der aktuell gewünschte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedStatus {
    pub result: i8,
    pub code: i32,
}
