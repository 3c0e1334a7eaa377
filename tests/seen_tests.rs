use quarterturn::solver::{SeenMap, SeenSet};
use quarterturn::{CubeState, Variant};

fn key() -> quarterturn::StateKey {
    CubeState::new(2, Variant::Normal).expect("state").key()
}

#[test]
fn set_counts_inserts_and_hits() {
    let mut seen = SeenSet::default();
    let k = key();
    assert!(seen.insert(k.clone()), "first sighting is new");
    assert!(!seen.insert(k), "second sighting is a hit");
    assert_eq!(seen.stats().inserts, 1);
    assert_eq!(seen.stats().hits, 1);
    assert_eq!(seen.len(), 1);
}

#[test]
fn map_readmits_only_strictly_shallower_visits() {
    let mut seen = SeenMap::default();
    let k = key();
    assert!(seen.visit(k.clone(), 5));
    assert!(!seen.visit(k.clone(), 5), "equal depth is a hit");
    assert!(!seen.visit(k.clone(), 7), "deeper is a hit");
    assert!(seen.visit(k.clone(), 3), "shallower reopens the state");
    assert!(!seen.visit(k, 4));
}

#[test]
fn map_clear_drops_entries_but_keeps_counters() {
    let mut seen = SeenMap::default();
    let k = key();
    seen.visit(k.clone(), 1);
    seen.clear();
    assert!(seen.is_empty());
    assert!(seen.visit(k, 9), "a cleared map forgets recorded depths");
    assert_eq!(seen.stats().inserts, 2, "counters span clears");
}
