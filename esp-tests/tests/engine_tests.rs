//! Integration Tests für die Animations-State-Machine
//!
//! Diese Tests laufen auf dem Host (x86_64) und treiben die Engine
//! mit expliziten Zeitstempeln - ohne echtes Timing, ohne Hardware.

use esp_core::engine::Engine;
use esp_core::{AnimationCode, Pattern, Snapshot};

const STRIP_LEN: usize = 30;

fn snapshot(raw: i32, version: u32) -> Snapshot {
    Snapshot {
        code: AnimationCode::from_raw(raw).expect("gültiger Code"),
        version,
    }
}

// ============================================================================
// Tests: Übergänge (Code-Wechsel)
// ============================================================================

#[test]
fn test_transition_only_on_code_change() {
    let mut engine = Engine::new(STRIP_LEN);

    // Code-Sequenz [1, 1, 1, 2], ein Tick pro Code, ohne Contention:
    // genau 2 Übergänge (Tick 1 und Tick 4)
    let mut transitions = 0;
    for (tick, raw) in [1, 1, 1, 2].into_iter().enumerate() {
        let now = tick as u64 * 20;
        let plan = engine.tick(now, Some(snapshot(raw, tick as u32 + 1)));
        if plan.transition.is_some() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 2);
    assert_eq!(engine.active_code(), AnimationCode::Basic(2));
}

#[test]
fn test_transition_carries_pattern_for_new_code() {
    let mut engine = Engine::new(STRIP_LEN);
    let plan = engine.tick(0, Some(snapshot(24, 1)));
    let transition = plan.transition.expect("Übergang erwartet");
    assert_eq!(transition.code, AnimationCode::Theme(24));
    assert!(matches!(transition.pattern, Pattern::Solid(_)));
}

#[test]
fn test_initial_off_write_is_not_a_transition() {
    let mut engine = Engine::new(STRIP_LEN);
    // Code 0 entspricht dem Startzustand: kein Render nötig
    let plan = engine.tick(0, Some(snapshot(0, 1)));
    assert!(plan.transition.is_none());
}

// ============================================================================
// Tests: Ausfall des Zellen-Reads (stale value)
// ============================================================================

#[test]
fn test_missing_snapshot_keeps_previous_pattern() {
    let mut engine = Engine::new(STRIP_LEN);
    engine.tick(0, Some(snapshot(1, 1)));

    // Read diese Runde nicht möglich: nichts wird geplant,
    // der zuletzt gerenderte Code bleibt aktiv
    let plan = engine.tick(20, None);
    assert!(plan.transition.is_none());
    assert!(plan.rephase.is_none());
    assert_eq!(engine.active_code(), AnimationCode::Basic(1));
}

// ============================================================================
// Tests: Periodisches Re-Phasing (Crawl)
// ============================================================================

#[test]
fn test_frame_offset_cycles_over_double_group_size() {
    let mut engine = Engine::new(STRIP_LEN);
    // Christmas-Crawl: Gruppe 6, Intervall 1000 ms, Einstieg bei Offset 0
    engine.tick(0, Some(snapshot(4, 1)));

    // Offset-Sequenz über die periodischen Ticks: 1, 2, ..., 11, 0, 1
    let mut offsets = Vec::new();
    for frame in 1..=13u64 {
        let plan = engine.tick(frame * 1000, None);
        offsets.push(plan.rephase.expect("Re-Phasing erwartet").offset);
    }
    let expected: Vec<u16> = (1..=11).chain([0, 1]).collect();
    assert_eq!(offsets, expected);
}

#[test]
fn test_rephase_respects_frame_interval() {
    let mut engine = Engine::new(STRIP_LEN);
    engine.tick(0, Some(snapshot(4, 1)));

    // Vor Ablauf des Intervalls kein Frame
    assert!(engine.tick(500, None).rephase.is_none());
    assert!(engine.tick(999, None).rephase.is_none());
    // Ab 1000 ms genau einer
    assert!(engine.tick(1000, None).rephase.is_some());
    assert!(engine.tick(1010, None).rephase.is_none());
}

#[test]
fn test_theme_crawl_uses_half_strip_group() {
    let mut engine = Engine::new(STRIP_LEN);
    // Mario-Crawl: Gruppengröße = halbe Strip-Länge
    engine.tick(0, Some(snapshot(22, 1)));
    let plan = engine.tick(500, None);
    let frame = plan.rephase.expect("Re-Phasing erwartet");
    assert_eq!(frame.group_size, 15);
}

#[test]
fn test_solid_pattern_never_rephases() {
    let mut engine = Engine::new(STRIP_LEN);
    engine.tick(0, Some(snapshot(1, 1)));
    for frame in 1..=5u64 {
        assert!(engine.tick(frame * 1000, None).rephase.is_none());
    }
}

#[test]
fn test_transition_resets_frame_offset() {
    let mut engine = Engine::new(STRIP_LEN);
    engine.tick(0, Some(snapshot(4, 1)));
    // Crawl ein paar Frames laufen lassen
    engine.tick(1000, None);
    engine.tick(2000, None);

    // Wechsel auf ein anderes Crawl: Offset startet wieder bei 0,
    // das erste Re-Phasing danach liefert Offset 1
    engine.tick(2020, Some(snapshot(25, 2)));
    let plan = engine.tick(2520, None);
    assert_eq!(plan.rephase.expect("Re-Phasing erwartet").offset, 1);
}

#[test]
fn test_rephase_and_transition_in_same_tick() {
    let mut engine = Engine::new(STRIP_LEN);
    engine.tick(0, Some(snapshot(4, 1)));

    // Frame-Intervall abgelaufen UND neuer Code im selben Tick:
    // beides wird geplant, Re-Phasing zuerst ausgeführt
    let plan = engine.tick(1000, Some(snapshot(2, 2)));
    assert!(plan.rephase.is_some());
    assert!(plan.transition.is_some());
    assert_eq!(engine.active_code(), AnimationCode::Basic(2));
}
