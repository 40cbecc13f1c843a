//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die komplette Animations-Logik der Arcade-LED-Steuerung:
//! Kommando-Übersetzung, geteilte Zustands-Zelle, State-Machine und
//! Pattern-Primitive über dem `PixelStrip` Trait.

#![no_std]

pub mod cell;
pub mod command;
pub mod engine;
pub mod patterns;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cell::{SharedStateCell, Snapshot};
pub use command::{parse_command, translate};
pub use engine::{CrawlFrame, Engine, TickPlan, Transition};
pub use traits::{PixelStrip, StripError};
pub use types::{AnimationCode, Crawl, GroupSize, Pattern};
