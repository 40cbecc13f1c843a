//! Animations-State-Machine
//!
//! Entscheidet pro Tick, was gerendert werden muss, ohne selbst zu
//! rendern oder zu warten: der Tick liefert einen Plan, den der
//! Animations-Task gegen den Strip ausführt und taktet. Dadurch ist
//! die komplette Zustandslogik auf dem Host testbar.

use rgb::RGB8;

use crate::cell::Snapshot;
use crate::types::{AnimationCode, Pattern};

/// Instant-Frame eines Crawl-Re-Phasings (Gruppengröße bereits
/// gegen die Strip-Länge aufgelöst)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlFrame {
    pub colors: (RGB8, RGB8),
    pub group_size: u16,
    pub offset: u16,
}

/// Voller Übergangs-Render bei Code-Wechsel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub code: AnimationCode,
    pub pattern: Pattern,
}

/// Render-Plan eines Ticks
///
/// Beide Teile können im selben Tick anfallen; sie werden in dieser
/// Reihenfolge ausgeführt (Re-Phasing zuerst, dann der Übergang).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlan {
    pub rephase: Option<CrawlFrame>,
    pub transition: Option<Transition>,
}

impl TickPlan {
    const EMPTY: Self = TickPlan {
        rephase: None,
        transition: None,
    };
}

/// Die State-Machine: hält den Render-Kontext des Animations-Loops
///
/// Exklusiv im Besitz des Animations-Tasks, niemals geteilt.
/// Startzustand: aus. Terminalzustand: keiner.
pub struct Engine {
    strip_len: usize,
    last_code: AnimationCode,
    frame_offset: u16,
    last_frame_ms: u64,
    seen_version: u32,
}

impl Engine {
    pub fn new(strip_len: usize) -> Self {
        Self {
            strip_len,
            last_code: AnimationCode::OFF,
            frame_offset: 0,
            last_frame_ms: 0,
            seen_version: 0,
        }
    }

    /// Zuletzt gerenderter Code
    pub fn active_code(&self) -> AnimationCode {
        self.last_code
    }

    /// Zuletzt gesehene Zellen-Version
    pub fn seen_version(&self) -> u32 {
        self.seen_version
    }

    /// Ein Tick der State-Machine
    ///
    /// 1. Läuft ein Crawl und ist das Frame-Intervall abgelaufen,
    ///    rückt der Frame-Offset um eins vor (modulo `2 * Gruppe`)
    ///    und ein Instant-Re-Phasing wird geplant. Das ist kein
    ///    Zustandswechsel.
    /// 2. Liegt eine frische Momentaufnahme vor und weicht ihr Code
    ///    vom zuletzt gerenderten ab, wird ein voller Übergang
    ///    geplant; Offset und Frame-Uhr werden zurückgesetzt.
    /// 3. `snapshot == None` (Read diese Runde nicht möglich):
    ///    nichts ändert sich, das bisherige Pattern läuft weiter.
    pub fn tick(&mut self, now_ms: u64, snapshot: Option<Snapshot>) -> TickPlan {
        let mut plan = TickPlan::EMPTY;

        if let Pattern::Crawl(crawl) = Pattern::for_code(self.last_code) {
            if now_ms.saturating_sub(self.last_frame_ms) >= crawl.frame_interval_ms {
                let group = crawl.group_size.resolve(self.strip_len);
                self.frame_offset = (self.frame_offset + 1) % (2 * group);
                self.last_frame_ms = now_ms;
                plan.rephase = Some(CrawlFrame {
                    colors: crawl.colors,
                    group_size: group,
                    offset: self.frame_offset,
                });
            }
        }

        if let Some(snapshot) = snapshot {
            self.seen_version = snapshot.version;
            if snapshot.code != self.last_code {
                self.last_code = snapshot.code;
                self.frame_offset = 0;
                self.last_frame_ms = now_ms;
                plan.transition = Some(Transition {
                    code: snapshot.code,
                    pattern: Pattern::for_code(snapshot.code),
                });
            }
        }

        plan
    }
}
