// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter dem PixelStrip Trait
// aus esp-core, um Testbarkeit und Wartbarkeit zu verbessern.

pub mod strip;

pub use strip::{RmtStripWriter, STRIP_BUFFER_SIZE};
