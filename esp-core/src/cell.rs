//! Geteilte Zustands-Zelle zwischen Kommando-Intake und Rendering
//!
//! Die einzige geteilte mutable Ressource des Kerns. Statt einer
//! Queue hält die Zelle genau die letzte Absicht (last-write-wins):
//! das Kommando-Interface ist level-getriggert, ein verlorener
//! Zwischenwert ist per Design akzeptabel.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::types::AnimationCode;

/// Momentaufnahme der Zelle
///
/// Der Versions-Zähler macht Staleness explizit: eine unveränderte
/// Version bedeutet "kein neuer Write seit dem letzten Read".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub code: AnimationCode,
    pub version: u32,
}

/// Mutex-geschützte Ein-Wert-Zelle mit Versions-Zähler
///
/// Generisch über den RawMutex: `CriticalSectionRawMutex` in der
/// Firmware, `NoopRawMutex` in Single-Thread-Tests. Die Akquisition
/// ist ein kurzer, scoped Critical Section - kein unbounded Blocking,
/// keine Queue, kein Retry.
pub struct SharedStateCell<M: RawMutex> {
    inner: Mutex<M, Cell<Snapshot>>,
}

impl<M: RawMutex> SharedStateCell<M> {
    /// Erstellt die Zelle im Default-Zustand (Code 0, Version 0)
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Snapshot {
                code: AnimationCode::OFF,
                version: 0,
            })),
        }
    }

    /// Speichert einen neuen Code und erhöht die Version
    ///
    /// Last-write-wins: ein vorheriger, noch nicht gelesener Wert
    /// wird überschrieben. Gibt die neue Version zurück.
    pub fn write(&self, code: AnimationCode) -> u32 {
        self.inner.lock(|state| {
            let next = Snapshot {
                code,
                version: state.get().version.wrapping_add(1),
            };
            state.set(next);
            next.version
        })
    }

    /// Liest die aktuelle Momentaufnahme
    pub fn read(&self) -> Snapshot {
        self.inner.lock(Cell::get)
    }
}

impl<M: RawMutex> Default for SharedStateCell<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_initial_snapshot_is_off() {
        let cell = SharedStateCell::<NoopRawMutex>::new();
        let snapshot = cell.read();
        assert_eq!(snapshot.code, AnimationCode::OFF);
        assert_eq!(snapshot.version, 0);
    }

    #[test]
    fn test_write_then_read_returns_written_code() {
        let cell = SharedStateCell::<NoopRawMutex>::new();
        cell.write(AnimationCode::Theme(20));
        let snapshot = cell.read();
        assert_eq!(snapshot.code, AnimationCode::Theme(20));
        assert_eq!(snapshot.version, 1);
    }

    #[test]
    fn test_version_counts_every_write() {
        let cell = SharedStateCell::<NoopRawMutex>::new();
        cell.write(AnimationCode::Basic(1));
        cell.write(AnimationCode::Basic(1));
        cell.write(AnimationCode::Basic(2));
        // Auch Writes desselben Codes bumpen die Version
        assert_eq!(cell.read().version, 3);
        assert_eq!(cell.read().code, AnimationCode::Basic(2));
    }
}
