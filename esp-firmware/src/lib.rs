// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von esp-core
pub use esp_core::{
    AnimationCode, Engine, Pattern, PixelStrip, SharedStateCell, Snapshot, StripError,
    parse_command, translate,
};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// ============================================================================
// Geteilter Zustand
// ============================================================================
//
// Die Zustands-Zelle ist die EINZIGE geteilte mutable Ressource zwischen
// HTTP-Tasks (Kommando-Intake) und dem Animations-Task (Rendering).
// Der Strip selbst gehört exklusiv dem Animations-Task.

/// Zustands-Zelle für den aktiven Animations-Code
///
/// CriticalSectionRawMutex: die Akquisition ist ein kurzer, scoped
/// Critical Section - bounded, kein Queueing, last-write-wins.
pub type PatternCell = SharedStateCell<CriticalSectionRawMutex>;
